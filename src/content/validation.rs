//! Validation of controller config invariants.

use super::data::{ControllerConfig, SCHEMA_VERSION};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: String,
    pub rule: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} violates rule: {}",
            self.section, self.field, self.value, self.rule
        )
    }
}

/// Helper macro for checking a numeric rule
macro_rules! check {
    ($errors:expr, $section:expr, $field:expr, $value:expr, $rule:expr, $ok:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                value: $value.to_string(),
                rule: $rule,
            });
        }
    };
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validate all config invariants.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_config(config: &ControllerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        "root",
        "schema_version",
        config.schema_version,
        "must match the supported schema version",
        config.schema_version == SCHEMA_VERSION
    );

    // Tuning
    let tuning = &config.tuning;
    for (field, value) in [
        ("speed", tuning.speed),
        ("walk_acceleration", tuning.walk_acceleration),
        ("air_acceleration", tuning.air_acceleration),
        ("ground_deceleration", tuning.ground_deceleration),
    ] {
        check!(
            errors,
            "tuning",
            field,
            value,
            "must be finite and non-negative",
            non_negative(value)
        );
    }
    check!(
        errors,
        "tuning",
        "jump_height",
        tuning.jump_height,
        "must be finite and greater than zero",
        tuning.jump_height.is_finite() && tuning.jump_height > 0.0
    );

    // Body
    let body = &config.body;
    check!(
        errors,
        "body",
        "width",
        body.width,
        "must be finite and greater than zero",
        body.width.is_finite() && body.width > 0.0
    );
    check!(
        errors,
        "body",
        "height",
        body.height,
        "must be finite and at least the body width",
        body.height.is_finite() && body.height >= body.width
    );

    // World
    let world = &config.world;
    check!(
        errors,
        "world",
        "fixed_hz",
        world.fixed_hz,
        "must be finite and greater than zero",
        world.fixed_hz.is_finite() && world.fixed_hz > 0.0
    );
    check!(
        errors,
        "world",
        "gravity",
        format!("{:?}", world.gravity),
        "components must be finite",
        world.gravity().is_finite()
    );

    // Spawn
    check!(
        errors,
        "spawn",
        "position",
        format!("({}, {})", config.spawn.x, config.spawn.y),
        "components must be finite",
        config.spawn.position().is_finite()
    );

    errors
}
