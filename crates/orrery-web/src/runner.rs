use orrery_engine::{
    AnimationDriver, ConfigError, FrameData, FrameWriter, InputEvent, ProtocolLayout,
    Renderer, Scenario, TextureId, TextureState,
};

/// Renderer that packs each frame into the shared buffer the host reads.
pub struct SharedFrameBuffer {
    writer: FrameWriter,
}

impl SharedFrameBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        Self {
            writer: FrameWriter::new(layout),
        }
    }

    pub fn writer(&self) -> &FrameWriter {
        &self.writer
    }
}

impl Renderer for SharedFrameBuffer {
    fn backend(&self) -> &'static str {
        "shared-buffer"
    }

    fn draw(&mut self, frame: &FrameData) {
        self.writer.write(frame);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.writer.set_surface(width, height);
    }
}

/// Generic runner that wires the animation driver to the browser.
///
/// Each concrete scenario creates a `thread_local!` WebRunner and exports
/// free functions via `#[wasm_bindgen]` (see `export_scenario!`), because
/// wasm-bindgen cannot export generic structs directly.
pub struct WebRunner<S: Scenario> {
    driver: AnimationDriver<S>,
    output: SharedFrameBuffer,
}

impl<S: Scenario> WebRunner<S> {
    pub fn new(scenario: S) -> Self {
        let driver = AnimationDriver::new(scenario);
        let output = SharedFrameBuffer::new(ProtocolLayout::from_config(driver.config()));
        Self { driver, output }
    }

    /// Apply JSON settings. The shared buffer is rebuilt since capacities may change.
    pub fn configure(&mut self, json: &str) -> Result<(), ConfigError> {
        self.driver.configure(json)?;
        self.output = SharedFrameBuffer::new(ProtocolLayout::from_config(self.driver.config()));
        Ok(())
    }

    /// Adopt the host's surface size, compose the scene and publish the size.
    /// A zero dimension keeps the configured default surface.
    pub fn init(&mut self, width: u32, height: u32) {
        self.driver.resize(width, height, &mut self.output);
        self.driver.init();
        let surface = self.driver.world().viewport.surface();
        self.output.resize(surface.width, surface.height);
    }

    /// One animation frame. Returns whether the host should schedule another.
    pub fn tick(&mut self) -> bool {
        self.driver.tick(&mut self.output)
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.driver.resize(width, height, &mut self.output);
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.driver.push_input(event);
    }

    // ---- Texture loading handshake ----

    pub fn texture_count(&self) -> u32 {
        self.driver.world().textures.len() as u32
    }

    pub fn texture_path(&self, id: u32) -> Option<String> {
        self.driver.world().textures.path(TextureId(id)).map(str::to_owned)
    }

    /// Paths of textures the host has not reported on yet, as (id, path).
    pub fn pending_textures(&self) -> Vec<(u32, String)> {
        let textures = &self.driver.world().textures;
        (0..textures.len() as u32)
            .map(TextureId)
            .filter(|&id| textures.state(id) == Some(TextureState::Pending))
            .filter_map(|id| textures.path(id).map(|p| (id.0, p.to_owned())))
            .collect()
    }

    pub fn texture_loaded(&mut self, id: u32, ok: bool) {
        self.driver.world_mut().textures.mark_loaded(TextureId(id), ok);
    }

    // ---- Shared buffer accessors ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.output.writer().as_ptr()
    }

    pub fn frame_counter(&self) -> u32 {
        self.output.writer().frame_counter()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.output.writer().layout().buffer_total_floats as u32
    }

    pub fn camera_offset(&self) -> u32 {
        self.output.writer().layout().camera_offset as u32
    }

    pub fn instance_data_offset(&self) -> u32 {
        self.output.writer().layout().instance_data_offset as u32
    }

    pub fn light_data_offset(&self) -> u32 {
        self.output.writer().layout().light_data_offset as u32
    }

    pub fn max_instances(&self) -> u32 {
        self.output.writer().layout().max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.output.writer().layout().max_lights as u32
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn driver(&self) -> &AnimationDriver<S> {
        &self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::bridge::protocol::{
        HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT, HEADER_SURFACE_HEIGHT, HEADER_SURFACE_WIDTH,
    };
    use orrery_engine::{spawn_body, BodyDesc, World};

    struct Lone;

    impl Scenario for Lone {
        fn init(&mut self, world: &mut World) {
            let tex = world.textures.load("textures/sun.jpg");
            spawn_body(&mut world.scene, "sun", BodyDesc::sphere(3.0).with_texture(tex).emissive());
        }

        fn update(&mut self, _world: &mut World) {}
    }

    fn header(runner: &WebRunner<Lone>, index: usize) -> f32 {
        runner.output.writer().as_slice()[index]
    }

    #[test]
    fn tick_writes_shared_buffer() {
        let mut runner = WebRunner::new(Lone);
        runner.init(800, 600);
        assert!(runner.tick());
        assert_eq!(runner.frame_counter(), 1);
        assert_eq!(header(&runner, HEADER_FRAME_COUNTER), 1.0);
        assert_eq!(header(&runner, HEADER_INSTANCE_COUNT), 1.0);
    }

    #[test]
    fn init_adopts_host_surface() {
        let mut runner = WebRunner::new(Lone);
        runner.init(1280, 720);
        assert_eq!(header(&runner, HEADER_SURFACE_WIDTH), 1280.0);
        assert_eq!(header(&runner, HEADER_SURFACE_HEIGHT), 720.0);
        let camera = &runner.driver().world().camera;
        assert!((camera.aspect - 1280.0 / 720.0).abs() < 1e-6);

        runner.tick();
        assert_eq!(header(&runner, HEADER_SURFACE_WIDTH), 1280.0);
    }

    #[test]
    fn init_with_zero_size_keeps_default_surface() {
        let mut runner = WebRunner::new(Lone);
        runner.init(0, 0);
        assert_eq!(header(&runner, HEADER_SURFACE_WIDTH), 800.0);
        assert!((runner.driver().world().camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn resize_updates_header() {
        let mut runner = WebRunner::new(Lone);
        runner.init(800, 600);
        assert_eq!(header(&runner, HEADER_SURFACE_WIDTH), 800.0);
        runner.resize(1920, 1080);
        assert_eq!(header(&runner, HEADER_SURFACE_WIDTH), 1920.0);
        assert_eq!(header(&runner, HEADER_SURFACE_HEIGHT), 1080.0);
    }

    #[test]
    fn texture_handshake() {
        let mut runner = WebRunner::new(Lone);
        runner.init(800, 600);
        assert_eq!(runner.texture_count(), 1);
        assert_eq!(runner.pending_textures(), vec![(0, "textures/sun.jpg".to_owned())]);
        runner.texture_loaded(0, false);
        assert!(runner.pending_textures().is_empty());
        assert_eq!(runner.texture_path(0).as_deref(), Some("textures/sun.jpg"));
        assert_eq!(runner.texture_path(5), None);
    }

    #[test]
    fn stop_is_reported_to_host() {
        let mut runner = WebRunner::new(Lone);
        runner.init(800, 600);
        runner.stop();
        assert!(!runner.tick());
        assert!(!runner.is_running());
        assert_eq!(runner.frame_counter(), 0);
    }
}
