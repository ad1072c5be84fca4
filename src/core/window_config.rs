//! Primary window description
//!
//! Built from [`BoardSettings`] in `main` before `DefaultPlugins` opens the
//! window, and kept as a resource so systems can read the requested size.

use super::resources::BoardSettings;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

const TITLE: &str = "Chessboard 3D";

#[derive(Resource, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels, width by height
    pub size: UVec2,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from_settings(&BoardSettings::default())
    }
}

impl WindowConfig {
    pub fn from_settings(settings: &BoardSettings) -> Self {
        Self {
            title: TITLE.to_owned(),
            size: UVec2::new(settings.window_width, settings.window_height),
            resizable: true,
        }
    }

    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.size.x, self.size.y),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_comes_from_settings() {
        let settings = BoardSettings {
            window_width: 800,
            window_height: 600,
            ..Default::default()
        };
        assert_eq!(
            WindowConfig::from_settings(&settings).size,
            UVec2::new(800, 600)
        );
        assert_eq!(WindowConfig::default().size.x, 1366);
    }

    #[test]
    fn test_window_carries_title() {
        let window = WindowConfig::default().to_window();
        assert_eq!(window.title, TITLE);
        assert!(window.resizable);
    }
}
