//! Stand-in for the on-screen transform panel
//!
//! Listens to selection transitions and logs what the real panel would
//! show or hide.

use scene_core::prelude::{InstanceHandle, SelectionListener};

/// Logs transform-panel visibility driven by the selection state machine
#[derive(Debug, Default)]
pub struct PanelListener {
    visible: bool,
}

impl PanelListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl SelectionListener for PanelListener {
    fn on_select(&mut self, handle: InstanceHandle) {
        self.visible = true;
        log::info!("transform panel shown for {:?}", handle);
    }

    fn on_deselect(&mut self) {
        self.visible = false;
        log::info!("transform panel hidden");
    }
}
