//! Movement domain: avian-backed contact queries and controller setup checks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::geometry::{Capsule, Separation, Shape};
use crate::movement::{
    CapsuleBody, Candidate, CharacterController, ContactWorld, ControllerSetupError, Footprint,
};

/// Collision world view for one controller during one physics tick.
pub(crate) struct AvianContacts<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub colliders: &'a Query<'w, 's, (&'static Collider, &'static Position, Has<Sensor>)>,
    pub filter: &'a SpatialQueryFilter,
    pub own_entity: Entity,
    pub own_collider: &'a Collider,
}

impl ContactWorld for AvianContacts<'_, '_, '_> {
    type Shape = Entity;

    fn overlapping(&self, footprint: &Footprint) -> Vec<Candidate<Entity>> {
        self.spatial_query
            .shape_intersections(self.own_collider, footprint.position, 0.0, self.filter)
            .into_iter()
            .map(|entity| Candidate {
                shape: entity,
                is_self: entity == self.own_entity,
                is_trigger: self
                    .colliders
                    .get(entity)
                    .is_ok_and(|(_, _, is_sensor)| is_sensor),
            })
            .collect()
    }

    fn separation(&self, shape: Entity, footprint: &Footprint) -> Separation {
        let Ok((collider, position)) = self
            .colliders
            .get(shape)
            .map(|(collider, position, _)| (collider, position))
        else {
            return Separation::default();
        };

        match world_shape(collider, position.0) {
            Some(other) => footprint.body.at(footprint.position).separation(&other),
            None => {
                warn!("Collider {shape} has no penetration support, ignoring contact");
                Separation::default()
            }
        }
    }
}

/// Converts an avian collider to a world-space shape. Rotation is ignored.
fn world_shape(collider: &Collider, center: Vec2) -> Option<Shape> {
    let shape = collider.shape_scaled();

    if let Some(cuboid) = shape.as_cuboid() {
        return Some(Shape::Box {
            center,
            half_extents: Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y),
        });
    }
    if let Some(ball) = shape.as_ball() {
        return Some(Shape::Circle {
            center,
            radius: ball.radius,
        });
    }
    if let Some(capsule) = shape.as_capsule() {
        return Some(Shape::Capsule(Capsule::new(
            center,
            capsule.radius,
            capsule.half_height(),
        )));
    }

    None
}

/// Reads the capsule dimensions of newly attached controllers.
/// A controller without a capsule collider is a fatal setup error.
pub(crate) fn verify_controller_body(
    mut commands: Commands,
    query: Query<(Entity, Option<&Collider>), Added<CharacterController>>,
) -> Result {
    for (entity, collider) in &query {
        let collider = collider.ok_or(ControllerSetupError::MissingCollider(entity))?;
        let body = CapsuleBody::from_collider(entity, collider)?;

        debug!(
            "Controller {entity}: radius={}, height={}",
            body.radius,
            body.height()
        );
        commands.entity(entity).insert(body);
    }

    Ok(())
}
