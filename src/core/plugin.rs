//! Core plugin
//!
//! Provides fundamental application setup:
//! - Panic hook that reports the current game state
//! - Settings and window configuration resources
//! - State management
//!
//! # Plugin Order
//!
//! 1. [`CorePlugin`] - Foundation (state, settings)
//! 2. [`crate::game::GamePlugin`] - Board logic and interaction
//! 3. Rendering and pointer plugins

use bevy::prelude::*;
use std::panic;
use std::sync::{Mutex, OnceLock};

use super::{
    log_state_transitions, settings_persistence::report_settings_system, BoardSettings,
    GameState, WindowConfig,
};

/// Last known state, readable from the panic hook outside the ECS
static PANIC_STATE_TRACKER: OnceLock<Mutex<Option<GameState>>> = OnceLock::new();

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Settings are normally inserted by main before plugins are added
        app.init_resource::<BoardSettings>();
        if !app.world().contains_resource::<WindowConfig>() {
            let config = WindowConfig::from_settings(app.world().resource::<BoardSettings>());
            app.insert_resource(config);
        }

        app.init_state::<GameState>();

        app.register_type::<WindowConfig>()
            .register_type::<BoardSettings>();

        app.add_systems(Startup, report_settings_system);
        app.add_systems(Update, (log_state_transitions, update_panic_state_tracker));
    }

    fn finish(&self, _app: &mut App) {
        setup_panic_hook();
    }
}

/// Chain a hook that prints the game state before the default panic output
///
/// Board lookups fail fast on out-of-range coordinates, so knowing the
/// state at the time of the panic narrows down which pipeline fed them.
fn setup_panic_hook() {
    PANIC_STATE_TRACKER.get_or_init(|| Mutex::new(None));
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let state = PANIC_STATE_TRACKER
            .get()
            .and_then(|tracker| tracker.lock().ok().and_then(|s| *s));
        eprintln!("[PANIC] GameState at panic: {:?}", state);
        default_hook(panic_info);
    }));
}

fn update_panic_state_tracker(game_state: Option<Res<State<GameState>>>) {
    let (Some(tracker), Some(state)) = (PANIC_STATE_TRACKER.get(), game_state) else {
        return;
    };
    if let Ok(mut current) = tracker.lock() {
        *current = Some(*state.get());
    }
}
