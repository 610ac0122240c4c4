//! Focus lock state machine
//!
//! Given the current selection, computes a camera placement that frames the
//! entity, then watches each tick for any reason to hand the camera back to
//! free movement.

use crate::entity::InstanceHandle;
use crate::error::SceneError;
use crate::foundation::math::Vec3;
use crate::pool::PoolRegistry;
use crate::selection::SelectionState;

/// Camera seam read and written by the focus controller
///
/// The camera service behind this trait applies its own zoom/pan/rotate
/// deltas each tick; the controller observes those only as "position
/// changed".
pub trait ViewpointRig {
    /// Current world-space camera position
    fn position(&self) -> Vec3;

    /// Move the camera to a new world-space position
    fn set_position(&mut self, position: Vec3);

    /// Orient the camera to look at a world-space point
    fn look_at(&mut self, target: Vec3);
}

/// Focus lock state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusState {
    /// Camera under free external control
    Unlocked,
    /// Camera parked at a committed position framing one entity
    Locked {
        /// The framed entity
        entity: InstanceHandle,
        /// Camera position written when the lock was taken
        committed_position: Vec3,
    },
}

/// Default framing distance between camera and focused entity
pub const DEFAULT_FOCUS_DISTANCE: f32 = 5.0;

/// Norm threshold below which the focus direction is degenerate
const DIRECTION_EPSILON: f32 = 1.0e-6;

/// Decides focus and defocus of the viewpoint across ticks
#[derive(Debug)]
pub struct FocusController {
    state: FocusState,
    focus_distance: f32,
}

impl FocusController {
    /// Create an unlocked controller with the given framing distance
    #[must_use]
    pub const fn new(focus_distance: f32) -> Self {
        Self {
            state: FocusState::Unlocked,
            focus_distance,
        }
    }

    /// Current lock state
    #[must_use]
    pub const fn state(&self) -> FocusState {
        self.state
    }

    /// Whether the camera is currently focus-locked
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self.state, FocusState::Locked { .. })
    }

    /// Framing distance between camera and focused entity
    #[must_use]
    pub const fn focus_distance(&self) -> f32 {
        self.focus_distance
    }

    /// Handle an explicit focus command on the current selection
    ///
    /// Moves the camera to `focus_distance` from the selected entity along
    /// the line from the entity through the prior camera position, orients
    /// it at the entity, and enters the locked state. No-op when nothing is
    /// selected or when already locked on the same entity (a repeated focus
    /// command must not re-trigger camera motion).
    pub fn request_focus(
        &mut self,
        selection: &SelectionState,
        registry: &PoolRegistry,
        rig: &mut dyn ViewpointRig,
    ) -> Result<(), SceneError> {
        let Some(handle) = selection.current() else {
            return Ok(());
        };
        if let FocusState::Locked { entity, .. } = self.state {
            if entity == handle {
                return Ok(());
            }
        }

        let target = registry.instance(handle)?.position;
        let offset = rig.position() - target;
        // Entity and camera coinciding would leave the direction undefined;
        // back away along world forward instead.
        let direction = offset.try_normalize(DIRECTION_EPSILON).unwrap_or_else(Vec3::z);

        let committed = target + direction * self.focus_distance;
        rig.set_position(committed);
        rig.look_at(target);

        log::debug!("focus locked on {:?} at {:?}", handle, committed);
        self.state = FocusState::Locked {
            entity: handle,
            committed_position: committed,
        };
        Ok(())
    }

    /// Per-tick release check
    ///
    /// Runs every tick regardless of whether a focus command fired. Releases
    /// the lock if the selection was cleared, the selection changed, or the
    /// camera moved away from the committed position (any external zoom,
    /// pan, or rotation). The conditions are idempotent and order-free.
    pub fn check_release(&mut self, selection: &SelectionState, rig: &dyn ViewpointRig) {
        let FocusState::Locked {
            entity,
            committed_position,
        } = self.state
        else {
            return;
        };

        // The committed position is compared verbatim, never recomputed, so
        // exact equality is reliable here.
        let release = match selection.current() {
            None => true,
            Some(current) if current != entity => true,
            Some(_) => rig.position() != committed_position,
        };

        if release {
            log::trace!("focus lock released from {:?}", entity);
            self.state = FocusState::Unlocked;
        }
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_DISTANCE)
    }
}
