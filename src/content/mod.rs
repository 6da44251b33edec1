//! Content domain: data-driven controller configuration.

pub mod data;
pub mod loader;
pub mod validation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::Path;

pub use data::*;
pub use loader::{load_controller_config, parse_controller_config};
pub use validation::validate_config;

/// Location of the controller config, relative to the working directory.
pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerConfig>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load and validate the controller config, keeping defaults on any failure.
fn load_content(mut config: ResMut<ControllerConfig>) {
    let path = Path::new(CONTROLLER_CONFIG_PATH);

    let loaded = match load_controller_config(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default controller config", e);
            return;
        }
    };

    let errors = validate_config(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            error!("Controller config: {}", error);
        }
        warn!(
            "{} invalid field(s) in {}; using default controller config",
            errors.len(),
            CONTROLLER_CONFIG_PATH
        );
        return;
    }

    if loaded.world.gravity() == Vec2::ZERO {
        warn!("Gravity has zero magnitude; jumps will have zero velocity");
    }

    info!(
        "Loaded {}: speed={}, jump_height={}, gravity={:?}, fixed_hz={}",
        CONTROLLER_CONFIG_PATH,
        loaded.tuning.speed,
        loaded.tuning.jump_height,
        loaded.world.gravity,
        loaded.world.fixed_hz
    );

    *config = loaded;
}
