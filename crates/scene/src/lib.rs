#![deny(clippy::all, clippy::pedantic)]
//! Skill-set documents.
//!
//! A JSON file listing the technologies to show, optionally with a container
//! size and tuning overrides:
//!
//! ```json
//! {
//!   "container": { "width": 900, "height": 650 },
//!   "config": { "gravity": 0.3 },
//!   "technologies": [
//!     { "name": "Rust", "icon": "/icons/rust.svg" },
//!     { "name": "Go" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use physics::{BallSim, Container, DragConfig, Entity, SimulationConfig};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Ratio between ball diameter and the pair overlap distance.
const COLLISION_DIAMETER_RATIO: f64 = 0.85;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub container: Option<ContainerDef>,
    #[serde(default)]
    pub config: ConfigOverrides,
    #[serde(default)]
    pub drag: DragOverrides,
    #[serde(default)]
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Technology {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ContainerDef {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub ball_diameter: Option<f64>,
    #[serde(default)]
    pub label_height: Option<f64>,
}

/// Fields left out keep their [`SimulationConfig::default`] value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ConfigOverrides {
    pub gravity: Option<f64>,
    pub bounce_coefficient: Option<f64>,
    pub friction: Option<f64>,
    pub settle_velocity_threshold: Option<f64>,
    pub min_collision_distance: Option<f64>,
    pub restitution: Option<f64>,
    pub ceiling_nudge: Option<f64>,
    pub settle_friction: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DragOverrides {
    pub release_gain: Option<f64>,
    pub max_velocity: Option<f64>,
}

impl FromStr for SkillSet {
    type Err = anyhow::Error;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl SkillSet {
    /// Read and parse a skill-set file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading skill set {}", path.display()))?;
        let set: Self = json
            .parse()
            .with_context(|| format!("parsing skill set {}", path.display()))?;
        tracing::debug!(path = %path.display(), technologies = set.technologies.len(), "loaded skill set");
        Ok(set)
    }

    /// One entity per technology, in document order, with unique ids.
    ///
    /// An unnamed technology becomes `tech-{index}`; a repeated name gets
    /// `-{index}` appended.
    #[must_use]
    pub fn entities(&self) -> Vec<Entity> {
        let mut seen = HashSet::new();
        self.technologies
            .iter()
            .enumerate()
            .map(|(index, tech)| {
                let mut id = if tech.name.is_empty() {
                    format!("tech-{index}")
                } else {
                    tech.name.clone()
                };
                while seen.contains(&id) {
                    id = format!("{id}-{index}");
                }
                seen.insert(id.clone());
                Entity {
                    id,
                    icon: tech.icon.clone(),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn container(&self) -> Option<Container> {
        self.container.map(|def| {
            let mut container = Container::new(def.width, def.height);
            if let Some(d) = def.ball_diameter {
                container = container.with_ball_diameter(d);
            }
            if let Some(h) = def.label_height {
                container = container.with_label_height(h);
            }
            container
        })
    }

    /// Defaults with the document's overrides applied.
    ///
    /// A custom ball diameter also scales the collision distance unless that
    /// is overridden explicitly.
    #[must_use]
    pub fn simulation_config(&self) -> SimulationConfig {
        let o = &self.config;
        let defaults = SimulationConfig::default();
        let min_collision_distance = o.min_collision_distance.unwrap_or_else(|| {
            self.container
                .and_then(|c| c.ball_diameter)
                .map_or(defaults.min_collision_distance, |d| d * COLLISION_DIAMETER_RATIO)
        });
        SimulationConfig {
            gravity: o.gravity.unwrap_or(defaults.gravity),
            bounce_coefficient: o.bounce_coefficient.unwrap_or(defaults.bounce_coefficient),
            friction: o.friction.unwrap_or(defaults.friction),
            settle_velocity_threshold: o
                .settle_velocity_threshold
                .unwrap_or(defaults.settle_velocity_threshold),
            min_collision_distance,
            restitution: o.restitution.unwrap_or(defaults.restitution),
            ceiling_nudge: o.ceiling_nudge.unwrap_or(defaults.ceiling_nudge),
            settle_friction: o.settle_friction.unwrap_or(defaults.settle_friction),
        }
    }

    #[must_use]
    pub fn drag_config(&self) -> DragConfig {
        let defaults = DragConfig::default();
        DragConfig {
            release_gain: self.drag.release_gain.unwrap_or(defaults.release_gain),
            max_velocity: self.drag.max_velocity.unwrap_or(defaults.max_velocity),
        }
    }

    /// Build a simulation from the document, laid out if it names a
    /// container.
    ///
    /// # Errors
    ///
    /// Fails if the document's container cannot hold a layout.
    pub fn into_sim(self, seed: Option<u64>) -> Result<BallSim> {
        let config = self.simulation_config();
        let sim = match seed {
            Some(seed) => BallSim::with_seed(config, seed),
            None => BallSim::new(config),
        };
        let mut sim = sim.with_drag_config(self.drag_config());

        if let Some(container) = self.container() {
            if !sim.initialize_in(&self.entities(), container) {
                anyhow::bail!(
                    "container {}x{} is too small to lay out balls",
                    container.width,
                    container.height
                );
            }
        }
        Ok(sim)
    }
}
