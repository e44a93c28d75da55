use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::animation::Easing;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub profile_path: PathBuf,
    pub base_duration_ms: u64,
    pub scatter_extent: f32,
    pub seed: Option<u64>,
    pub easing: Easing,
    pub viewport: ViewportConfig,
    pub camera: CameraConfig,
    pub tour: TourConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub rotate_speed: f32,
}

/// Layout selections replayed by the headless runner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub layouts: Vec<String>,
    pub dwell_ms: u64,
    pub frame_step_ms: u64,
    pub realtime: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.json"),
            profile_path: PathBuf::from("profile.json"),
            base_duration_ms: 2000,
            scatter_extent: 4000.0,
            seed: None,
            easing: Easing::default(),
            viewport: ViewportConfig::default(),
            camera: CameraConfig::default(),
            tour: TourConfig::default(),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 3000.0,
            rotate_speed: 0.5,
        }
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            layouts: ["table", "sphere", "helix", "grid"]
                .into_iter()
                .map(String::from)
                .collect(),
            dwell_ms: 5000,
            frame_step_ms: 16,
            realtime: false,
        }
    }
}

impl AppConfig {
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(source).context("Invalid config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.scatter_extent.is_finite() && self.scatter_extent > 0.0,
            "scatter_extent must be a positive number, got {}",
            self.scatter_extent
        );
        anyhow::ensure!(
            self.camera.distance.is_finite() && self.camera.distance > 0.0,
            "camera.distance must be a positive number, got {}",
            self.camera.distance
        );
        Ok(())
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("In {}", path.display()))
    }
}
