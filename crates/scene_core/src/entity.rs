//! Entity types, pooled instances, and handles
//!
//! Defines the closed set of spawnable entity kinds and the instance data a
//! reuse pool owns for each of them.

use crate::foundation::math::{Quat, Vec3};

/// Closed set of spawnable entity kinds
///
/// The set is fixed at configuration time, so per-type tables are plain
/// arrays indexed by the enum discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// Capsule primitive
    Capsule,
    /// Cube primitive
    Cube,
    /// Cylinder primitive
    Cylinder,
    /// Plane primitive
    Plane,
    /// Quad primitive
    Quad,
    /// Sphere primitive
    Sphere,
}

impl EntityType {
    /// Number of entity types
    pub const COUNT: usize = 6;

    /// All entity types in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Capsule,
        Self::Cube,
        Self::Cylinder,
        Self::Plane,
        Self::Quad,
        Self::Sphere,
    ];

    /// Index of this type in per-type tables
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Handle to a pooled instance: the owning type plus its slot index
///
/// Handles are stable for the lifetime of the registry. Releasing an
/// instance and acquiring it again yields the same handle, since slots are
/// deactivated rather than destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceHandle {
    /// Entity type whose pool owns the slot
    pub type_id: EntityType,
    /// Slot index inside that pool's backing list
    pub index: u32,
}

/// A concrete entity slot owned by a reuse pool
///
/// Instances are created once per pool growth event and reused
/// indefinitely; deactivation replaces destruction. While `active` the
/// instance is on loan to the scene, while inactive it belongs exclusively
/// to its pool.
#[derive(Debug, Clone)]
pub struct PooledInstance {
    type_id: EntityType,
    active: bool,
    highlighted: bool,
    /// World-space position
    pub position: Vec3,
    /// World-space rotation
    pub rotation: Quat,
}

impl PooledInstance {
    /// Create a fresh, inactive instance of the given type at the origin
    #[must_use]
    pub fn new(type_id: EntityType) -> Self {
        Self {
            type_id,
            active: false,
            highlighted: false,
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }

    /// Entity type this instance belongs to
    #[must_use]
    pub const fn type_id(&self) -> EntityType {
        self.type_id
    }

    /// Whether this instance is currently on loan to the scene
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this instance is currently marked highlighted
    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

/// Factory seam used on pool growth
///
/// One factory is registered per [`EntityType`]; it stands in for the
/// external prefab of that type and is only invoked when a pool has no
/// inactive instance to hand out.
pub trait EntityFactory {
    /// Construct the backing data for a fresh instance
    fn create(&self) -> PooledInstance;
}

/// Default factory producing a bare primitive of one type
#[derive(Debug, Clone, Copy)]
pub struct ShapeFactory {
    type_id: EntityType,
}

impl ShapeFactory {
    /// Create a factory for the given entity type
    #[must_use]
    pub const fn new(type_id: EntityType) -> Self {
        Self { type_id }
    }
}

impl EntityFactory for ShapeFactory {
    fn create(&self) -> PooledInstance {
        PooledInstance::new(self.type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_indices_are_dense() {
        for (expected, type_id) in EntityType::ALL.iter().enumerate() {
            assert_eq!(type_id.index(), expected);
        }
        assert_eq!(EntityType::ALL.len(), EntityType::COUNT);
    }

    #[test]
    fn test_new_instance_is_inactive_at_origin() {
        let instance = PooledInstance::new(EntityType::Sphere);
        assert_eq!(instance.type_id(), EntityType::Sphere);
        assert!(!instance.is_active());
        assert!(!instance.is_highlighted());
        assert_eq!(instance.position, Vec3::zeros());
        assert_eq!(instance.rotation, Quat::identity());
    }

    #[test]
    fn test_shape_factory_tags_type() {
        let factory = ShapeFactory::new(EntityType::Quad);
        assert_eq!(factory.create().type_id(), EntityType::Quad);
    }
}
