//! # Scene Core
//!
//! The entity lifecycle core of an interactive 3D placement sandbox.
//!
//! ## Features
//!
//! - **Reuse Pools**: Per-type recycling of entity instances with bounded
//!   allocation churn
//! - **Typed Spawning**: A registry routing spawn/remove requests by entity
//!   type
//! - **Single Selection**: A state machine guaranteeing at most one
//!   highlighted entity
//! - **Camera Focus**: A lock that frames the selected entity and yields to
//!   free camera movement
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_core::prelude::*;
//!
//! # fn main() -> Result<(), SceneError> {
//! let mut registry = PoolRegistry::with_default_pools();
//! let handle = registry.spawn(EntityType::Cube, Vec3::new(0.0, 0.0, 0.0))?;
//! registry.remove(EntityType::Cube, handle)?;
//! # Ok(())
//! # }
//! ```
//!
//! All state transitions happen synchronously inside a per-tick driver:
//! resolve input, apply the selection transition, spawn/remove, apply the
//! focus transition, then run the focus release check.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod entity;
pub mod error;
pub mod focus;
pub mod foundation;
pub mod pool;
pub mod selection;

pub use error::SceneError;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SandboxConfig},
        entity::{EntityFactory, EntityType, InstanceHandle, PooledInstance, ShapeFactory},
        error::SceneError,
        focus::{FocusController, FocusState, ViewpointRig},
        foundation::math::{Quat, Vec3},
        pool::{PoolRegistry, ReusePool},
        selection::{NullListener, PickResult, SelectionListener, SelectionState},
    };
}
