//! Core module - State machine, settings and application infrastructure
//!
//! # Architecture Overview
//!
//! - [`GameState`] - `Setup` until the board exists, then `InGame`
//! - [`BoardSettings`] - User-tunable geometry, easing and window settings
//! - [`WindowConfig`] - Window settings derived from [`BoardSettings`]
//! - [`CorePlugin`] - Registers the above plus the panic hook
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use chessboard3d::core::CorePlugin;
//!
//! App::new()
//!     .insert_resource(settings)
//!     .add_plugins(CorePlugin)
//!     // ... other plugins
//! ```

pub mod error;
pub mod error_handling;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod window_config;

pub use plugin::CorePlugin;
pub use resources::*;
pub use states::*;
pub use window_config::WindowConfig;
