//! Headless placement sandbox
//!
//! Demonstrates the entity lifecycle core with a scripted session: spawn a
//! few shapes, pick one, focus the camera on it, nudge the camera to break
//! the lock, edit a position through the panel path, and remove the
//! selection.
//!
//! Each tick runs the fixed order: resolve input, apply the selection
//! transition, spawn/remove, apply the focus transition, then run the
//! focus release check.

mod camera;
mod panel;

use camera::FreeCameraRig;
use panel::PanelListener;
use scene_core::prelude::*;

/// One tick's resolved user intent
#[derive(Debug, Clone, Copy)]
enum Command {
    /// Spawn a shape at the origin
    Spawn(EntityType),
    /// Remove the currently selected instance
    RemoveSelected,
    /// Focus the camera on the current selection
    Focus,
    /// Panel edit of the selected instance's position
    EditPosition(Vec3),
    /// Free camera pan by mouse deltas
    Pan(f32, f32),
    /// Free camera zoom by scroll magnitude
    Zoom(f32),
    /// Free camera rotate by mouse deltas
    Rotate(f32, f32),
}

struct Sandbox {
    registry: PoolRegistry,
    selection: SelectionState,
    focus: FocusController,
    panel: PanelListener,
    rig: FreeCameraRig,
    tick_count: u64,
}

impl Sandbox {
    fn new(config: &SandboxConfig) -> Self {
        let mut registry = PoolRegistry::with_default_pools();
        registry.warm_all(config.initial_pool_capacity);

        Self {
            registry,
            selection: SelectionState::new(),
            focus: FocusController::new(config.focus_distance),
            panel: PanelListener::new(),
            rig: FreeCameraRig::new(
                Vec3::new(0.0, 2.0, -10.0),
                config.mouse_sensitivity,
                config.pan_speed,
            ),
            tick_count: 0,
        }
    }

    /// Run one tick of the fixed evaluation order
    fn tick(&mut self, pick: Option<PickResult>, command: Option<Command>) {
        self.tick_count += 1;
        log::debug!("tick {}", self.tick_count);

        if let Some(pick) = pick {
            if let Err(err) = self
                .selection
                .apply_pick(pick, &mut self.registry, &mut self.panel)
            {
                log::error!("pick skipped: {err}");
            }
        }

        if let Some(command) = command {
            self.run_command(command);
        }

        self.focus.check_release(&self.selection, &self.rig);
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Spawn(type_id) => match self.registry.spawn(type_id, Vec3::zeros()) {
                Ok(handle) => log::info!("spawned {:?}", handle),
                Err(err) => log::error!("spawn skipped: {err}"),
            },
            Command::RemoveSelected => {
                // Deselect before returning the instance to its pool so no
                // inactive instance stays selected or highlighted
                let Some(handle) = self.selection.current() else {
                    return;
                };
                self.selection.deselect(&mut self.registry, &mut self.panel);
                match self.registry.remove(handle.type_id, handle) {
                    Ok(()) => log::info!("removed {:?}", handle),
                    Err(err) => log::error!("remove skipped: {err}"),
                }
            }
            Command::Focus => {
                if let Err(err) =
                    self.focus
                        .request_focus(&self.selection, &self.registry, &mut self.rig)
                {
                    log::error!("focus skipped: {err}");
                }
            }
            Command::EditPosition(position) => {
                let Some(handle) = self.selection.current() else {
                    return;
                };
                match self.registry.set_position(handle, position) {
                    Ok(()) => log::info!("moved {:?} to {:?}", handle, position),
                    Err(err) => log::error!("position edit skipped: {err}"),
                }
            }
            Command::Pan(x, y) => self.rig.pan(x, y),
            Command::Zoom(scroll) => self.rig.zoom(scroll),
            Command::Rotate(x, y) => self.rig.rotate(x, y),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SandboxConfig::load_from_file("sandbox.toml").unwrap_or_else(|err| {
        log::info!("using default config ({err})");
        SandboxConfig::default()
    });

    let mut sandbox = Sandbox::new(&config);

    // Spawn a cube and a sphere
    sandbox.tick(None, Some(Command::Spawn(EntityType::Cube)));
    sandbox.tick(None, Some(Command::Spawn(EntityType::Sphere)));

    // Pick the cube and focus on it
    let cube = InstanceHandle {
        type_id: EntityType::Cube,
        index: 0,
    };
    sandbox.tick(Some(PickResult::hit(cube)), None);
    sandbox.tick(None, Some(Command::Focus));
    log::info!(
        "focus locked: {}, camera at {:?}",
        sandbox.focus.is_locked(),
        sandbox.rig.position()
    );

    // Panning hands the camera back to free movement the same tick
    sandbox.tick(None, Some(Command::Pan(3.0, 0.0)));
    log::info!("focus locked after pan: {}", sandbox.focus.is_locked());

    // Edit the cube's position through the panel path, then remove it
    sandbox.tick(None, Some(Command::EditPosition(Vec3::new(1.0, 2.0, 3.0))));
    sandbox.tick(None, Some(Command::RemoveSelected));
    log::info!(
        "cube pool active after removal: {}",
        sandbox
            .registry
            .pool(EntityType::Cube)
            .map(ReusePool::active_count)
            .unwrap_or(0)
    );

    // A click over empty space clears what's left
    sandbox.tick(None, Some(Command::Rotate(2.0, -1.0)));
    sandbox.tick(Some(PickResult::miss()), Some(Command::Zoom(1.5)));
    log::info!(
        "session done: selected={}, panel visible={}",
        sandbox.selection.is_selected(),
        sandbox.panel.is_visible()
    );
}
