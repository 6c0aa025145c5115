//! Core domain: play flow states, selections, and navigation.

mod events;
mod resources;
mod state;
mod systems;

pub use events::{LanguageSelectedEvent, LevelSelectedEvent, NavigateBackEvent, StageSelectedEvent};
pub use resources::{SelectedLanguage, SelectedLevel, SelectedStage};
pub use state::AppState;

use bevy::prelude::*;

use crate::content::AppSettings;
use crate::core::systems::{
    handle_language_selected, handle_level_selected, handle_navigate_back,
    handle_progress_changed, handle_stage_selected, transition_to_level_select,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let language = app
            .world()
            .get_resource::<AppSettings>()
            .map(SelectedLanguage::from_settings)
            .unwrap_or_default();

        app.init_state::<AppState>()
            .init_resource::<SelectedLevel>()
            .init_resource::<SelectedStage>()
            .insert_resource(language)
            .add_message::<LevelSelectedEvent>()
            .add_message::<StageSelectedEvent>()
            .add_message::<LanguageSelectedEvent>()
            .add_message::<NavigateBackEvent>()
            .add_systems(Startup, transition_to_level_select)
            .add_systems(
                Update,
                (handle_navigate_back, handle_language_selected),
            )
            .add_systems(
                Update,
                handle_level_selected.run_if(in_state(AppState::LevelSelect)),
            )
            .add_systems(
                Update,
                handle_stage_selected.run_if(in_state(AppState::StageSelect)),
            )
            .add_systems(
                Update,
                handle_progress_changed.run_if(in_state(AppState::Playing)),
            );
    }
}
