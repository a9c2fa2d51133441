//! Weighted random choice over the spawn table.

use rand::Rng;

use super::components::{ItemDescriptor, ItemKind};

/// Sum of all non-negative weights.
pub fn total_weight(table: &[ItemDescriptor]) -> f32 {
    table.iter().map(|d| d.spawn_weight.max(0.0)).sum()
}

/// Walk the table with a draw from `[0, total_weight)`.
///
/// The first entry whose running sum exceeds the draw wins. If rounding
/// leaves the draw past the end, the last entry with positive weight wins.
pub fn select_by_draw(table: &[ItemDescriptor], draw: f32) -> Option<ItemKind> {
    let mut running = 0.0;
    for descriptor in table {
        let weight = descriptor.spawn_weight.max(0.0);
        if weight <= 0.0 {
            continue;
        }
        running += weight;
        if draw < running {
            return Some(descriptor.kind);
        }
    }
    table
        .iter()
        .rev()
        .find(|d| d.spawn_weight > 0.0)
        .map(|d| d.kind)
}

/// Pick a kind at random; `None` when nothing can be picked.
pub fn pick_weighted<R: Rng + ?Sized>(table: &[ItemDescriptor], rng: &mut R) -> Option<ItemKind> {
    let total = total_weight(table);
    if !(total > 0.0) {
        return None;
    }
    let draw = rng.gen_range(0.0..total);
    select_by_draw(table, draw)
}
