//! Error types for the entity lifecycle core

use crate::entity::{EntityType, InstanceHandle};
use thiserror::Error;

/// Errors surfaced by pool and registry operations
///
/// Idempotent no-op calls (re-selecting the current entity, deselecting with
/// no selection, releasing an already-inactive instance) are not errors and
/// succeed trivially.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// No pool registered for the requested entity type
    ///
    /// A configuration error: the registry must be fully populated before
    /// the first spawn/remove call. Abort setup rather than catching this
    /// per call.
    #[error("no pool registered for entity type {0:?}")]
    UnknownType(EntityType),

    /// Handle does not belong to the addressed pool
    ///
    /// Indicates a lifecycle-tracking defect in the caller; the offending
    /// operation is skipped and prior state is left unchanged.
    #[error("invalid handle {handle:?}: {reason}")]
    InvalidHandle {
        /// The offending handle
        handle: InstanceHandle,
        /// Why the handle was rejected
        reason: &'static str,
    },
}
