use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxmesh_chunk::{CHUNK_SIDE_I32, Voxel};
use voxmesh_mesh_cpu::{MeshOptions, NormalMode};

/// How the driver populates the chunk before meshing.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Each voxel solid with probability `density`.
    #[default]
    Random,
    /// Solid below `height`, air above.
    Layers,
    /// Every voxel solid.
    Solid,
    /// Noise height map over (x, z).
    Terrain,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NormalsConfig {
    #[default]
    Flat,
    Face,
}

impl From<NormalsConfig> for NormalMode {
    fn from(n: NormalsConfig) -> Self {
        match n {
            NormalsConfig::Flat => NormalMode::Flat,
            NormalsConfig::Face => NormalMode::Face,
        }
    }
}

// Top-level config file. Every key is optional; command-line flags win over the file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MeshConfig {
    #[serde(default)]
    pub fill: Option<FillMode>,
    #[serde(default)]
    pub seed: Option<i32>,
    #[serde(default)]
    pub density: Option<f32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub frequency: Option<f32>,
    #[serde(default)]
    pub normals: Option<NormalsConfig>,
    // Voxel id written for solid cells
    #[serde(default)]
    pub voxel: Option<u32>,
}

impl MeshConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Values set in `over` replace ours.
    pub fn overlay(self, over: MeshConfig) -> MeshConfig {
        MeshConfig {
            fill: over.fill.or(self.fill),
            seed: over.seed.or(self.seed),
            density: over.density.or(self.density),
            height: over.height.or(self.height),
            frequency: over.frequency.or(self.frequency),
            normals: over.normals.or(self.normals),
            voxel: over.voxel.or(self.voxel),
        }
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub fill: FillMode,
    pub seed: i32,
    pub density: f32,
    pub height: i32,
    pub frequency: f32,
    pub normals: NormalsConfig,
    pub voxel: Voxel,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fill: FillMode::Random,
            seed: 1337,
            density: 0.5,
            height: 5,
            frequency: 0.08,
            normals: NormalsConfig::Flat,
            voxel: Voxel(1),
        }
    }
}

impl Settings {
    /// Fills unset values with defaults and validates ranges.
    pub fn resolve(cfg: &MeshConfig) -> Result<Self, Box<dyn Error>> {
        let d = Settings::default();
        let s = Settings {
            fill: cfg.fill.unwrap_or(d.fill),
            seed: cfg.seed.unwrap_or(d.seed),
            density: cfg.density.unwrap_or(d.density),
            height: cfg.height.unwrap_or(d.height),
            frequency: cfg.frequency.unwrap_or(d.frequency),
            normals: cfg.normals.unwrap_or(d.normals),
            voxel: cfg.voxel.map(Voxel::from).unwrap_or(d.voxel),
        };
        if !(0.0..=1.0).contains(&s.density) {
            return Err(format!("density must be within [0, 1], got {}", s.density).into());
        }
        if !(0..=CHUNK_SIDE_I32).contains(&s.height) {
            return Err(format!("height must be within [0, {CHUNK_SIDE_I32}], got {}", s.height).into());
        }
        if !(s.frequency.is_finite() && s.frequency > 0.0) {
            return Err(format!("frequency must be positive, got {}", s.frequency).into());
        }
        if s.voxel.is_air() {
            return Err("voxel id 0 is air and cannot be used for solid cells".into());
        }
        Ok(s)
    }

    pub fn mesh_options(&self) -> MeshOptions {
        MeshOptions {
            normals: self.normals.into(),
        }
    }
}
