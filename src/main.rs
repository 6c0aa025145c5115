mod content;
mod core;
mod minigames;
mod progress;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 30.0,
            ))),
        )
        .add_plugins((LogPlugin::default(), StatesPlugin))
        // Content first: later plugins read AppSettings while building.
        .add_plugins(content::ContentPlugin::default())
        .add_plugins((
            progress::ProgressPlugin::default(),
            core::CorePlugin,
            minigames::MinigamesPlugin::default(),
        ))
        .run();
}
