//! Core domain: startup systems for the camera and world settings.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;

/// World units visible per screen pixel.
const CAMERA_SCALE: f32 = 1.0 / 40.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 6.0, 0.0),
    ));
}

/// Push the configured physics rate and gravity into the engine.
pub(crate) fn apply_world_settings(
    config: Res<ControllerConfig>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut gravity: ResMut<Gravity>,
) {
    fixed_time.set_timestep_hz(config.world.fixed_hz);
    gravity.0 = config.world.gravity();

    info!(
        "World settings: fixed_hz={}, gravity={:?}",
        config.world.fixed_hz, gravity.0
    );
}
