//! Full tick-order integration tests
//!
//! Drives the core the way the per-tick driver does: resolve input, apply
//! the selection transition, spawn/remove, apply the focus transition, then
//! run the release check.

use approx::assert_relative_eq;
use scene_core::prelude::*;

#[derive(Debug)]
struct TestRig {
    position: Vec3,
    target: Option<Vec3>,
}

impl ViewpointRig for TestRig {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.target = Some(target);
    }
}

#[derive(Debug, Default)]
struct PanelProbe {
    shown: usize,
    hidden: usize,
}

impl SelectionListener for PanelProbe {
    fn on_select(&mut self, _handle: InstanceHandle) {
        self.shown += 1;
    }

    fn on_deselect(&mut self) {
        self.hidden += 1;
    }
}

#[test]
fn spawn_pick_focus_then_camera_nudge_releases() {
    let mut registry = PoolRegistry::with_default_pools();
    let mut selection = SelectionState::new();
    let mut focus = FocusController::new(5.0);
    let mut panel = PanelProbe::default();
    let mut rig = TestRig {
        position: Vec3::new(10.0, 0.0, 0.0),
        target: None,
    };

    // Tick 1: spawn a cube at the origin, pick it
    let cube = registry.spawn(EntityType::Cube, Vec3::zeros()).unwrap();
    selection
        .apply_pick(PickResult::hit(cube), &mut registry, &mut panel)
        .unwrap();
    focus.check_release(&selection, &rig);
    assert!(selection.is_selected());
    assert_eq!(panel.shown, 1);

    // Tick 2: focus command
    focus.request_focus(&selection, &registry, &mut rig).unwrap();
    focus.check_release(&selection, &rig);
    assert!(focus.is_locked());
    assert_relative_eq!((rig.position - Vec3::zeros()).norm(), 5.0, epsilon = 1.0e-4);
    assert_eq!(rig.target, Some(Vec3::zeros()));

    // Tick 3: no input, lock holds
    focus.check_release(&selection, &rig);
    assert!(focus.is_locked());

    // Tick 4: user pans the camera, lock releases the same tick
    rig.position += Vec3::new(0.0, 0.2, 0.0);
    focus.check_release(&selection, &rig);
    assert!(!focus.is_locked());

    // Selection is untouched by defocus
    assert_eq!(selection.current(), Some(cube));
}

#[test]
fn remove_selected_deselects_then_recycles() {
    let mut registry = PoolRegistry::with_default_pools();
    let mut selection = SelectionState::new();
    let mut focus = FocusController::new(5.0);
    let mut panel = PanelProbe::default();
    let rig = TestRig {
        position: Vec3::new(0.0, 0.0, 8.0),
        target: None,
    };

    let sphere = registry
        .spawn(EntityType::Sphere, Vec3::new(1.0, 0.0, 0.0))
        .unwrap();
    selection
        .apply_pick(PickResult::hit(sphere), &mut registry, &mut panel)
        .unwrap();

    // Remove-selected command: deselect first, then return to the pool, so
    // no inactive instance is ever left selected or highlighted
    let current = selection.current().unwrap();
    selection.deselect(&mut registry, &mut panel);
    registry.remove(current.type_id, current).unwrap();
    focus.check_release(&selection, &rig);

    assert!(!selection.is_selected());
    assert!(!focus.is_locked());
    assert_eq!(panel.hidden, 1);
    let slot = registry.instance(sphere).unwrap();
    assert!(!slot.is_active());
    assert!(!slot.is_highlighted());

    // The recycled slot comes back clean at the new spawn position
    let again = registry
        .spawn(EntityType::Sphere, Vec3::new(7.0, 8.0, 9.0))
        .unwrap();
    assert_eq!(again, sphere);
    assert_eq!(
        registry.instance(again).unwrap().position,
        Vec3::new(7.0, 8.0, 9.0)
    );
    assert!(!registry.instance(again).unwrap().is_highlighted());
}

#[test]
fn removing_focused_entity_releases_next_tick() {
    let mut registry = PoolRegistry::with_default_pools();
    let mut selection = SelectionState::new();
    let mut focus = FocusController::new(5.0);
    let mut rig = TestRig {
        position: Vec3::new(0.0, 10.0, 0.0),
        target: None,
    };

    let cube = registry.spawn(EntityType::Cube, Vec3::zeros()).unwrap();
    selection
        .select(cube, &mut registry, &mut NullListener)
        .unwrap();
    focus.request_focus(&selection, &registry, &mut rig).unwrap();
    assert!(focus.is_locked());

    selection.deselect(&mut registry, &mut NullListener);
    registry.remove(EntityType::Cube, cube).unwrap();

    focus.check_release(&selection, &rig);
    assert_eq!(focus.state(), FocusState::Unlocked);
}

#[test]
fn ui_pick_preserves_selection_and_lock() {
    let mut registry = PoolRegistry::with_default_pools();
    let mut selection = SelectionState::new();
    let mut focus = FocusController::new(5.0);
    let mut rig = TestRig {
        position: Vec3::new(3.0, 0.0, 4.0),
        target: None,
    };

    let quad = registry.spawn(EntityType::Quad, Vec3::zeros()).unwrap();
    selection
        .select(quad, &mut registry, &mut NullListener)
        .unwrap();
    focus.request_focus(&selection, &registry, &mut rig).unwrap();

    // A click routed to a UI surface fires neither transition, so the lock
    // survives the tick
    selection
        .apply_pick(PickResult::over_ui(), &mut registry, &mut NullListener)
        .unwrap();
    focus.check_release(&selection, &rig);
    assert_eq!(selection.current(), Some(quad));
    assert!(focus.is_locked());
}

#[test]
fn position_edit_moves_instance_without_selection_churn() {
    let mut registry = PoolRegistry::with_default_pools();
    let mut selection = SelectionState::new();
    let mut panel = PanelProbe::default();

    let cylinder = registry
        .spawn(EntityType::Cylinder, Vec3::zeros())
        .unwrap();
    selection
        .select(cylinder, &mut registry, &mut panel)
        .unwrap();

    // Panel edit goes straight to the instance
    registry
        .set_position(cylinder, Vec3::new(-1.0, 2.5, 0.0))
        .unwrap();

    assert_eq!(
        registry.instance(cylinder).unwrap().position,
        Vec3::new(-1.0, 2.5, 0.0)
    );
    assert_eq!(selection.current(), Some(cylinder));
    assert_eq!(panel.shown, 1);
    assert_eq!(panel.hidden, 0);
}
