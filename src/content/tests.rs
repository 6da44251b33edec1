//! Content domain: tests for config parsing and validation.

use super::{ControllerConfig, parse_controller_config, validate_config};
use crate::movement::{ContactOrder, MovementTuning};

const SHIPPED_CONFIG: &str = include_str!("../../assets/data/controller.ron");

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_parses_and_validates() {
    let config = parse_controller_config("controller.ron", SHIPPED_CONFIG).unwrap();

    assert!(validate_config(&config).is_empty());
    assert_eq!(config, ControllerConfig::default());
}

#[test]
fn test_contact_order_defaults_when_omitted() {
    let config = parse_controller_config(
        "inline",
        r#"(
            schema_version: 1,
            world: (gravity: (0.0, -20.0), fixed_hz: 60.0),
            body: (width: 0.8, height: 1.8),
            tuning: (
                speed: 6.0,
                walk_acceleration: 50.0,
                air_acceleration: 20.0,
                ground_deceleration: 40.0,
                jump_height: 2.5,
            ),
            spawn: (x: 1.0, y: 3.0),
        )"#,
    )
    .unwrap();

    assert_eq!(config.tuning.contact_order, ContactOrder::DeepestFirst);
    assert_eq!(config.world.gravity().y, -20.0);
    assert_eq!(config.spawn.position().x, 1.0);
}

#[test]
fn test_query_order_parses() {
    let text = SHIPPED_CONFIG.replace("DeepestFirst", "QueryOrder");
    let config = parse_controller_config("inline", &text).unwrap();

    assert_eq!(config.tuning.contact_order, ContactOrder::QueryOrder);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_controller_config("broken.ron", "(schema_version: ").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&ControllerConfig::default()).is_empty());
}

#[test]
fn test_negative_tuning_rejected() {
    let mut config = ControllerConfig::default();
    config.tuning.air_acceleration = -1.0;
    config.tuning.speed = f32::NAN;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.field == "air_acceleration"));
    assert!(errors.iter().any(|e| e.field == "speed"));
}

#[test]
fn test_zero_jump_height_rejected() {
    let mut config = ControllerConfig::default();
    config.tuning.jump_height = 0.0;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].section, "tuning");
    assert_eq!(errors[0].field, "jump_height");
}

#[test]
fn test_body_shorter_than_wide_rejected() {
    let mut config = ControllerConfig::default();
    config.body.height = 0.5;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "height");
}

#[test]
fn test_zero_gravity_accepted() {
    let mut config = ControllerConfig::default();
    config.world.gravity = (0.0, 0.0);

    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_bad_world_and_schema_rejected() {
    let mut config = ControllerConfig::default();
    config.schema_version = 7;
    config.world.fixed_hz = 0.0;
    config.world.gravity = (0.0, f32::INFINITY);

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 3);
    assert!(errors[0].to_string().contains("root.schema_version = 7"));
}

#[test]
fn test_tuning_def_converts_to_component() {
    let config = ControllerConfig::default();
    let tuning = MovementTuning::from(&config.tuning);

    assert_eq!(tuning, MovementTuning::default());
}
