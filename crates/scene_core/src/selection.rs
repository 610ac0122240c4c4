//! Single-selection state machine
//!
//! Tracks the one currently-selected entity and notifies the presentation
//! layer on every transition. At most one instance is ever marked
//! highlighted.

use crate::entity::InstanceHandle;
use crate::error::SceneError;
use crate::pool::PoolRegistry;

/// Pick outcome supplied by the external ray-intersection service each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickResult {
    /// Entity hit by the ray, when it carries a managed handle
    pub hit: Option<InstanceHandle>,
    /// Pointer was over a UI surface this tick
    ///
    /// Suppresses both select and deselect entirely.
    pub over_ui: bool,
}

impl PickResult {
    /// Pick that hit a managed entity
    #[must_use]
    pub const fn hit(handle: InstanceHandle) -> Self {
        Self {
            hit: Some(handle),
            over_ui: false,
        }
    }

    /// Pick that hit empty space
    #[must_use]
    pub const fn miss() -> Self {
        Self {
            hit: None,
            over_ui: false,
        }
    }

    /// Pick that landed on a UI surface
    #[must_use]
    pub const fn over_ui() -> Self {
        Self {
            hit: None,
            over_ui: true,
        }
    }
}

/// Presentation seam notified on selection transitions
///
/// Drives the highlight visuals and the transform-editing panel.
pub trait SelectionListener {
    /// An entity became the current selection
    fn on_select(&mut self, handle: InstanceHandle);

    /// The current selection was cleared
    fn on_deselect(&mut self);
}

/// Listener that ignores all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl SelectionListener for NullListener {
    fn on_select(&mut self, _handle: InstanceHandle) {}
    fn on_deselect(&mut self) {}
}

/// Tracks the single currently-selected entity
///
/// Two states: idle (no selection) and selected. `is_selected()` is always
/// consistent with `current()`.
#[derive(Debug, Default)]
pub struct SelectionState {
    current: Option<InstanceHandle>,
}

impl SelectionState {
    /// Create an idle selection state
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Handle of the currently-selected entity, if any
    #[must_use]
    pub const fn current(&self) -> Option<InstanceHandle> {
        self.current
    }

    /// Whether any entity is currently selected
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.current.is_some()
    }

    /// Apply one tick's pick result
    ///
    /// A pick over a UI surface fires neither transition. A hit on a managed
    /// entity selects it; a miss deselects.
    pub fn apply_pick(
        &mut self,
        pick: PickResult,
        registry: &mut PoolRegistry,
        listener: &mut dyn SelectionListener,
    ) -> Result<(), SceneError> {
        if pick.over_ui {
            return Ok(());
        }
        match pick.hit {
            Some(handle) => self.select(handle, registry, listener),
            None => {
                self.deselect(registry, listener);
                Ok(())
            }
        }
    }

    /// Select an entity, deselecting any prior selection first
    ///
    /// Re-selecting the current entity is a no-op, suppressing redundant
    /// highlight work.
    pub fn select(
        &mut self,
        handle: InstanceHandle,
        registry: &mut PoolRegistry,
        listener: &mut dyn SelectionListener,
    ) -> Result<(), SceneError> {
        if self.current == Some(handle) {
            return Ok(());
        }

        // Validate before any mutation so a bad handle leaves prior state intact
        registry.instance(handle)?;

        self.deselect(registry, listener);
        registry.set_highlight(handle, true)?;
        self.current = Some(handle);
        log::debug!("selected {:?}", handle);
        listener.on_select(handle);
        Ok(())
    }

    /// Clear the current selection
    ///
    /// No-op when nothing is selected.
    pub fn deselect(&mut self, registry: &mut PoolRegistry, listener: &mut dyn SelectionListener) {
        let Some(handle) = self.current.take() else {
            return;
        };

        if let Err(err) = registry.set_highlight(handle, false) {
            log::warn!("stale selection handle during deselect: {err}");
        }
        log::debug!("deselected {:?}", handle);
        listener.on_deselect();
    }
}
