//! Per-type reuse pools and the type-keyed registry
//!
//! Pools recycle inactive instances instead of constructing new ones, so
//! allocation only happens on pool growth and churn stays bounded. The
//! acquire path uses a free list for O(1) handout; the external contract is
//! the same as a first-inactive scan.

use std::collections::VecDeque;

use crate::entity::{EntityFactory, EntityType, InstanceHandle, PooledInstance};
use crate::error::SceneError;
use crate::foundation::math::{Quat, Vec3};

/// Growable pool of instances of one entity type
///
/// Owns the backing list for its type. Every instance is a member of exactly
/// one pool for its entire lifetime; `release` deactivates instead of
/// destroying, and a later `acquire` hands the same slot (and handle) back
/// out.
pub struct ReusePool {
    type_id: EntityType,
    entries: Vec<PooledInstance>,
    free_list: VecDeque<u32>,
    factory: Box<dyn EntityFactory>,
}

impl ReusePool {
    /// Create an empty pool for one entity type
    #[must_use]
    pub fn new(type_id: EntityType, factory: Box<dyn EntityFactory>) -> Self {
        Self {
            type_id,
            entries: Vec::new(),
            free_list: VecDeque::new(),
            factory,
        }
    }

    /// Entity type this pool serves
    #[must_use]
    pub const fn type_id(&self) -> EntityType {
        self.type_id
    }

    /// Pre-grow the pool by `count` inactive instances
    ///
    /// Useful at setup to front-load construction; reuse semantics are
    /// unchanged.
    pub fn warm(&mut self, count: usize) {
        for _ in 0..count {
            let index = u32::try_from(self.entries.len()).unwrap_or(u32::MAX);
            self.entries.push(self.factory.create());
            self.free_list.push_back(index);
        }
        if count > 0 {
            log::info!(
                "pool for {:?} warmed to {} entries",
                self.type_id,
                self.entries.len()
            );
        }
    }

    /// Hand out an inactive instance, growing the pool if none is available
    ///
    /// Never returns an instance currently on loan.
    pub fn acquire(&mut self) -> InstanceHandle {
        let index = if let Some(index) = self.free_list.pop_front() {
            index
        } else {
            let index = u32::try_from(self.entries.len()).unwrap_or(u32::MAX);
            self.entries.push(self.factory.create());
            log::info!(
                "pool for {:?} grew to {} entries",
                self.type_id,
                self.entries.len()
            );
            index
        };

        self.entries[index as usize].set_active(true);
        InstanceHandle {
            type_id: self.type_id,
            index,
        }
    }

    /// Return an instance to the pool by deactivating it
    ///
    /// Idempotent: releasing an already-inactive instance is a no-op. Fails
    /// with [`SceneError::InvalidHandle`] if the handle does not belong to
    /// this pool.
    pub fn release(&mut self, handle: InstanceHandle) -> Result<(), SceneError> {
        if handle.type_id != self.type_id {
            return Err(SceneError::InvalidHandle {
                handle,
                reason: "handle addressed to a different pool",
            });
        }
        if handle.index as usize >= self.entries.len() {
            return Err(SceneError::InvalidHandle {
                handle,
                reason: "slot index out of range for this pool",
            });
        }

        let entry = &mut self.entries[handle.index as usize];
        if !entry.is_active() {
            return Ok(());
        }

        entry.set_active(false);
        entry.set_highlighted(false);
        self.free_list.push_back(handle.index);
        log::debug!("released {:?} back to its pool", handle);
        Ok(())
    }

    /// Look up an instance slot by index
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&PooledInstance> {
        self.entries.get(index as usize)
    }

    /// Mutable lookup of an instance slot by index
    pub fn get_mut(&mut self, index: u32) -> Option<&mut PooledInstance> {
        self.entries.get_mut(index as usize)
    }

    /// Number of instances currently on loan
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.len() - self.free_list.len()
    }

    /// Total number of instances ever constructed for this pool
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for ReusePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReusePool")
            .field("type_id", &self.type_id)
            .field("capacity", &self.entries.len())
            .field("active", &self.active_count())
            .finish_non_exhaustive()
    }
}

/// Registry routing spawn/remove requests to the pool for their type
///
/// One pool per enumerated type, stored in an array indexed by the enum
/// discriminant. Configure before use: every type must be registered before
/// the first spawn/remove call, otherwise [`SceneError::UnknownType`] is
/// returned and setup should abort.
#[derive(Debug)]
pub struct PoolRegistry {
    pools: [Option<ReusePool>; EntityType::COUNT],
}

impl PoolRegistry {
    /// Create a registry with no pools configured
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: std::array::from_fn(|_| None),
        }
    }

    /// Create a registry with a default shape pool for every entity type
    #[must_use]
    pub fn with_default_pools() -> Self {
        use crate::entity::ShapeFactory;

        let mut registry = Self::new();
        for type_id in EntityType::ALL {
            registry.register(type_id, Box::new(ShapeFactory::new(type_id)));
        }
        registry
    }

    /// Register the pool for one entity type, replacing any prior pool
    pub fn register(&mut self, type_id: EntityType, factory: Box<dyn EntityFactory>) {
        self.pools[type_id.index()] = Some(ReusePool::new(type_id, factory));
        log::info!("registered pool for {:?}", type_id);
    }

    /// Pre-grow every registered pool by `count` instances
    pub fn warm_all(&mut self, count: usize) {
        for pool in self.pools.iter_mut().flatten() {
            pool.warm(count);
        }
    }

    /// Spawn an instance of `type_id` at `position`
    ///
    /// Acquires from the type's pool, placing the instance at `position`
    /// with identity rotation.
    pub fn spawn(
        &mut self,
        type_id: EntityType,
        position: Vec3,
    ) -> Result<InstanceHandle, SceneError> {
        let pool = self.pool_mut(type_id)?;
        let handle = pool.acquire();

        // acquire only hands out in-range slots
        if let Some(instance) = pool.get_mut(handle.index) {
            instance.position = position;
            instance.rotation = Quat::identity();
        }
        log::debug!("spawned {:?} at {:?}", handle, position);
        Ok(handle)
    }

    /// Remove an instance from the scene, returning it to its pool
    ///
    /// The caller supplies the type for routing; a handle whose own type
    /// disagrees is rejected as [`SceneError::InvalidHandle`].
    pub fn remove(
        &mut self,
        type_id: EntityType,
        handle: InstanceHandle,
    ) -> Result<(), SceneError> {
        if handle.type_id != type_id {
            return Err(SceneError::InvalidHandle {
                handle,
                reason: "handle type does not match the addressed pool",
            });
        }
        self.pool_mut(type_id)?.release(handle)
    }

    /// Look up the instance behind a handle
    pub fn instance(&self, handle: InstanceHandle) -> Result<&PooledInstance, SceneError> {
        self.pool(handle.type_id)?
            .get(handle.index)
            .ok_or(SceneError::InvalidHandle {
                handle,
                reason: "slot index out of range for this pool",
            })
    }

    /// Mutable lookup of the instance behind a handle
    pub fn instance_mut(
        &mut self,
        handle: InstanceHandle,
    ) -> Result<&mut PooledInstance, SceneError> {
        self.pool_mut(handle.type_id)?
            .get_mut(handle.index)
            .ok_or(SceneError::InvalidHandle {
                handle,
                reason: "slot index out of range for this pool",
            })
    }

    /// Update an instance's world position directly
    ///
    /// The transform-panel edit path; bypasses selection logic entirely.
    pub fn set_position(
        &mut self,
        handle: InstanceHandle,
        position: Vec3,
    ) -> Result<(), SceneError> {
        self.instance_mut(handle)?.position = position;
        Ok(())
    }

    pub(crate) fn set_highlight(
        &mut self,
        handle: InstanceHandle,
        highlighted: bool,
    ) -> Result<(), SceneError> {
        self.instance_mut(handle)?.set_highlighted(highlighted);
        Ok(())
    }

    /// Borrow the pool for one entity type
    pub fn pool(&self, type_id: EntityType) -> Result<&ReusePool, SceneError> {
        self.pools[type_id.index()]
            .as_ref()
            .ok_or(SceneError::UnknownType(type_id))
    }

    /// Mutably borrow the pool for one entity type
    pub fn pool_mut(&mut self, type_id: EntityType) -> Result<&mut ReusePool, SceneError> {
        self.pools[type_id.index()]
            .as_mut()
            .ok_or(SceneError::UnknownType(type_id))
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
