//! Title, pause, and game-over screens.

use bevy::prelude::*;

use crate::core::{GameState, PlayState};

/// Name shown on the title screen.
#[derive(Resource, Debug, Clone)]
pub struct GameTitle(pub String);

impl Default for GameTitle {
    fn default() -> Self {
        Self("DASH ARENA".to_string())
    }
}

/// Marker for title screen UI entities.
#[derive(Component)]
pub struct TitleUi;

/// Marker for the camera used while no arena exists.
#[derive(Component)]
pub struct MenuCamera;

/// Marker for pause overlay entities.
#[derive(Component)]
pub struct PauseUi;

/// Marker for game over UI entities.
#[derive(Component)]
pub struct GameOverUi;

/// Menu buttons.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Resume,
    Retry,
    Title,
    Quit,
}

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);

fn screen_root(background: Color) -> (Node, BackgroundColor) {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
    )
}

fn spawn_heading(parent: &mut ChildBuilder, text: &str, size: f32, color: Color, gap: f32) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(gap)),
            ..default()
        },
    ));
}

fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

pub fn setup_title_screen(mut commands: Commands, title: Res<GameTitle>) {
    commands.spawn((Camera2d, MenuCamera));

    commands
        .spawn((screen_root(Color::srgb(0.05, 0.05, 0.08)), TitleUi))
        .with_children(|parent| {
            spawn_heading(parent, &title.0, 80.0, Color::srgb(0.9, 0.8, 0.5), 30.0);
            spawn_heading(
                parent,
                "WASD move, double-tap to dash, hold left mouse to fire",
                20.0,
                Color::srgb(0.5, 0.5, 0.55),
                40.0,
            );
            spawn_menu_button(parent, "Start (Enter)", MenuButton::Start);
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

pub fn setup_pause_overlay(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgba(0.0, 0.0, 0.0, 0.7)), PauseUi))
        .with_children(|parent| {
            spawn_heading(parent, "PAUSED", 48.0, Color::srgb(0.8, 0.8, 0.85), 40.0);
            spawn_menu_button(parent, "Resume", MenuButton::Resume);
            spawn_menu_button(parent, "Title", MenuButton::Title);
        });
}

pub fn setup_game_over(mut commands: Commands) {
    commands.spawn((Camera2d, MenuCamera));

    commands
        .spawn((screen_root(Color::srgba(0.1, 0.0, 0.0, 0.9)), GameOverUi))
        .with_children(|parent| {
            spawn_heading(parent, "DEFEATED", 72.0, Color::srgb(0.8, 0.2, 0.2), 60.0);
            spawn_menu_button(parent, "Retry (Enter)", MenuButton::Retry);
            spawn_menu_button(parent, "Title", MenuButton::Title);
        });
}

/// Enter starts a run from the title screen or retries after a defeat.
pub fn start_on_enter(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::InGame);
    }
}

/// Shared button handling for every screen.
pub fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_game_state: ResMut<NextState<GameState>>,
    mut next_play_state: ResMut<NextState<PlayState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                match button {
                    MenuButton::Start | MenuButton::Retry => next_game_state.set(GameState::InGame),
                    MenuButton::Resume => next_play_state.set(PlayState::Running),
                    MenuButton::Title => next_game_state.set(GameState::Title),
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => *bg_color = BUTTON_HOVER.into(),
            Interaction::None => *bg_color = BUTTON_IDLE.into(),
        }
    }
}

/// Despawn all entities carrying marker `T`.
pub fn despawn_screen<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
