use crate::api::error::ConfigError;
use crate::api::scenario::{EngineConfig, Scenario};
use crate::core::world::World;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::Renderer;
use crate::systems::render::build_render_buffer;

/// Runs a scenario one tick per host display refresh.
///
/// The host schedules `tick` on its frame callback and keeps re-scheduling
/// while `tick` returns true. `stop` ends the loop cleanly: later ticks do
/// nothing and return false. Ticks and resizes both take `&mut self`, so they
/// can never interleave.
pub struct AnimationDriver<S: Scenario> {
    scenario: S,
    world: World,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: EngineConfig,
    initialized: bool,
    running: bool,
    ticks: u64,
}

impl<S: Scenario> AnimationDriver<S> {
    pub fn new(scenario: S) -> Self {
        let config = scenario.config();
        let world = World::new(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            scenario,
            world,
            input: InputQueue::new(),
            render_buffer,
            config,
            initialized: false,
            running: true,
            ticks: 0,
        }
    }

    /// Hand JSON settings to the scenario. Only valid before `init`.
    pub fn configure(&mut self, json: &str) -> Result<(), ConfigError> {
        if self.initialized {
            return Err(ConfigError::invalid("configure must be called before init"));
        }
        self.scenario.configure(json)?;
        // Settings may change engine config (capacities, camera)
        self.config = self.scenario.config();
        self.world = World::new(&self.config);
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_instances);
        Ok(())
    }

    /// Compose the scene. Call once before the first tick.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("init called twice; ignoring");
            return;
        }
        self.scenario.init(&mut self.world);
        self.world.scene.propagate();
        self.initialized = true;
        log::info!(
            "scene composed: {} nodes, {} lights, {} textures",
            self.world.scene.len(),
            self.world.lights.count(),
            self.world.textures.len()
        );
    }

    /// Queue a pointer/wheel event for the controls on the next tick.
    /// Dropped once the loop has stopped.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.running {
            self.input.push(event);
        }
    }

    /// Run one frame: advance the scenario, update controls, render.
    /// Returns whether the host should schedule another tick.
    pub fn tick(&mut self, renderer: &mut impl Renderer) -> bool {
        if !self.running {
            return false;
        }
        if !self.initialized {
            // Nothing to steer yet
            self.input.drain();
            return true;
        }

        self.scenario.update(&mut self.world);

        let surface = self.world.viewport.surface();
        self.world.controls.handle_input(self.input.iter(), surface);
        self.input.drain();
        self.world.controls.update(&mut self.world.camera);

        self.world.scene.propagate();
        build_render_buffer(self.world.scene.iter(), &self.world.textures, &mut self.render_buffer);
        renderer.draw(&self.world.frame(&self.render_buffer));

        self.ticks += 1;
        true
    }

    /// Handle a host resize immediately: camera projection and render surface.
    pub fn resize(&mut self, width: u32, height: u32, renderer: &mut impl Renderer) {
        if self.world.resize(width, height) {
            renderer.resize(width, height);
        }
    }

    /// Stop the loop. The next tick returns false.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("animation stopped after {} ticks", self.ticks);
        }
        self.running = false;
        self.input.drain();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Events waiting for the next tick.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Completed ticks since init.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scenario(&self) -> &S {
        &self.scenario
    }
}
