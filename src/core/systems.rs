//! Core domain: play flow systems gated by progress unlocks.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::{AppSettings, LevelCatalog};
use crate::core::events::{
    LanguageSelectedEvent, LevelSelectedEvent, NavigateBackEvent, StageSelectedEvent,
};
use crate::core::resources::{SelectedLanguage, SelectedLevel, SelectedStage};
use crate::core::state::AppState;
use crate::progress::{ProgressChangedEvent, UserProgress};

pub(crate) fn transition_to_level_select(mut next_state: ResMut<NextState<AppState>>) {
    next_state.set(AppState::LevelSelect);
}

/// Enter a level only if the previous one has been completed
pub(crate) fn handle_level_selected(
    mut events: MessageReader<LevelSelectedEvent>,
    catalog: Res<LevelCatalog>,
    progress: Res<UserProgress>,
    mut selected: ResMut<SelectedLevel>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for event in events.read() {
        if !progress.is_level_unlocked(event.index, catalog.levels()) {
            warn!("Level {} is locked", event.index);
            continue;
        }

        selected.select(event.index);
        if let Some(level) = selected.level(&catalog) {
            info!("Selected level '{}'", level.title);
        }
        next_state.set(AppState::StageSelect);
    }
}

/// Start a stage only if it is completed (replay) or next in line
pub(crate) fn handle_stage_selected(
    mut events: MessageReader<StageSelectedEvent>,
    catalog: Res<LevelCatalog>,
    progress: Res<UserProgress>,
    selected_level: Res<SelectedLevel>,
    mut selected_stage: ResMut<SelectedStage>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for event in events.read() {
        let Some(level) = selected_level.level(&catalog) else {
            warn!("{} selected with no level selected", event.stage);
            continue;
        };

        if !progress.is_stage_enabled(event.stage, level) {
            warn!("{} is not available yet in '{}'", event.stage, level.title);
            continue;
        }

        info!("Starting {} in '{}'", event.stage, level.title);
        selected_stage.stage = Some(event.stage);
        next_state.set(AppState::Playing);
    }
}

/// Leave the finished stage, celebrating if the level just became complete
pub(crate) fn handle_progress_changed(
    mut events: MessageReader<ProgressChangedEvent>,
    mut selected_stage: ResMut<SelectedStage>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for event in events.read() {
        selected_stage.stage = None;

        if event.change.level_completed && event.change.newly_completed {
            info!("Level '{}' completed!", event.change.level_id);
            next_state.set(AppState::LevelComplete);
        } else {
            next_state.set(AppState::StageSelect);
        }
    }
}

pub(crate) fn handle_navigate_back(
    mut events: MessageReader<NavigateBackEvent>,
    state: Res<State<AppState>>,
    mut selected_level: ResMut<SelectedLevel>,
    mut selected_stage: ResMut<SelectedStage>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if events.read().count() == 0 {
        return;
    }

    match state.get() {
        AppState::Playing => {
            selected_stage.stage = None;
            next_state.set(AppState::StageSelect);
        }
        AppState::StageSelect | AppState::LevelComplete => {
            selected_stage.stage = None;
            selected_level.clear();
            next_state.set(AppState::LevelSelect);
        }
        AppState::Boot | AppState::LevelSelect => {}
    }
}

pub(crate) fn handle_language_selected(
    mut events: MessageReader<LanguageSelectedEvent>,
    settings: Option<Res<AppSettings>>,
    mut language: ResMut<SelectedLanguage>,
) {
    let available = settings
        .map(|s| s.required_languages.clone())
        .unwrap_or_else(|| AppSettings::default().required_languages);

    for event in events.read() {
        if !available.contains(&event.code) {
            warn!("Language '{}' is not available", event.code);
            continue;
        }

        info!("Now learning '{}'", event.code);
        language.target = event.code.clone();
    }
}
