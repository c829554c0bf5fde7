//! Host-supplied game configuration
//!
//! Read once at world creation. Colors are opaque passthrough data for the
//! host renderer; the simulation only consumes dimensions and jump strength.

use serde::{Deserialize, Serialize};

/// RGB triple, passed through to the renderer untouched
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundConfig {
    pub color: Rgb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub color: Rgb,
    pub width: i32,
    pub height: i32,
    /// Jump launch velocity (negative = up)
    pub jump_strength: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub color: Rgb,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub color: Rgb,
}

/// Viewport size in simulation units (pixels)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Game configuration (mirrors the host's `config.json` layout)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub background: BackgroundConfig,
    pub player: PlayerConfig,
    pub platforms: PlatformConfig,
    pub obstacles: ObstacleConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            background: BackgroundConfig {
                color: [20, 24, 46],
            },
            player: PlayerConfig {
                color: [240, 84, 84],
                width: 40,
                height: 50,
                jump_strength: -15.0,
            },
            platforms: PlatformConfig {
                color: [60, 179, 113],
                width: 200,
                height: 20,
            },
            obstacles: ObstacleConfig {
                color: [255, 165, 0],
            },
            screen: ScreenConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse from the host's JSON config
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Clamp values that would otherwise produce degenerate generation bounds
    ///
    /// Malformed configuration is the host loader's problem; this only keeps
    /// the arithmetic inside the simulation well-behaved.
    pub fn sanitized(mut self) -> Self {
        self.player.width = self.player.width.max(1);
        self.player.height = self.player.height.max(1);
        self.platforms.width = self.platforms.width.max(1);
        self.platforms.height = self.platforms.height.max(1);
        self.screen.width = self.screen.width.max(320);
        self.screen.height = self.screen.height.max(320);
        // Jump strength is a negative velocity-set; an upward (positive) or
        // huge value collapses generation bounds to their clamp floors anyway,
        // but keep it in a sane range so airtime stays finite.
        self.player.jump_strength = self.player.jump_strength.clamp(-40.0, 0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_config_layout() {
        let json = r#"{
            "background": { "color": [10, 10, 30] },
            "player": { "color": [255, 0, 0], "width": 40, "height": 50, "jump_strength": -15 },
            "platforms": { "color": [0, 200, 100], "width": 200, "height": 20 },
            "obstacles": { "color": [255, 165, 0] }
        }"#;
        let cfg = GameConfig::from_json(json).unwrap();
        assert_eq!(cfg.player.width, 40);
        assert_eq!(cfg.player.jump_strength, -15.0);
        // Screen section is optional and defaults to 800x600
        assert_eq!(cfg.screen.width, 800);
        assert_eq!(cfg.screen.height, 600);
    }

    #[test]
    fn test_sanitized_clamps_degenerate_values() {
        let mut cfg = GameConfig::default();
        cfg.player.jump_strength = 5.0;
        cfg.platforms.width = -10;
        let cfg = cfg.sanitized();
        assert_eq!(cfg.player.jump_strength, 0.0);
        assert_eq!(cfg.platforms.width, 1);
    }
}
