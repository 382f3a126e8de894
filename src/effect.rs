use crate::camera::Camera;
use crate::color::{Color, Palette};
use crate::constants::{
    CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, FRAME_INTERVAL_MS, MAX_TICK_FAILURES,
};
use crate::links::LinkBuffers;
use crate::options::NetOptions;
use crate::pointer::{ElementBounds, PointerState};
use crate::points::PointField;
use crate::render::{DotInstance, RenderBackend};
use crate::scheduler::{self, next_delay_ms, Phase, TickGate};
use anyhow::{Context, Result};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The particle-network effect: owns the point field, connection buffers,
/// pointer state, and the frame gate, and drives the rendering port.
///
/// All timing flows through `now_ms` parameters so the whole lifecycle is
/// host-testable; the web wiring supplies wall-clock milliseconds.
pub struct NetEffect<B: RenderBackend> {
    options: NetOptions,
    backend: B,
    palette: Palette,
    phase: Phase,
    camera: Camera,
    field: PointField,
    links: LinkBuffers,
    pointer: PointerState,
    gate: TickGate,
    bounds: ElementBounds,
    pixel_ratio: f32,
    visible: bool,
    post_init: bool,
    tick_failures: u32,
    rng: StdRng,
    dots: Vec<DotInstance>,
}

impl<B: RenderBackend> NetEffect<B> {
    /// Validate options and stage the effect. No resources are acquired and
    /// no points exist until the first visibility signal triggers `init`.
    pub fn new(options: NetOptions, backend: B, now_ms: f64) -> Result<Self> {
        options.validate().context("invalid effect options")?;

        let palette = Palette::new(
            Color::from_hex(options.color),
            Color::from_hex(options.background_color),
            Color::from_hex(options.highlight_color),
        );
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let eye = Vec3::from_array(CAMERA_EYE);
        let camera = Camera {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };

        Ok(Self {
            options,
            backend,
            palette,
            phase: Phase::Initializing,
            camera,
            field: PointField::default(),
            links: LinkBuffers::new(0),
            pointer: PointerState::default(),
            gate: TickGate::new(now_ms, FRAME_INTERVAL_MS),
            bounds: ElementBounds::default(),
            pixel_ratio: 1.0,
            visible: false,
            post_init: false,
            tick_failures: 0,
            rng,
            dots: Vec::new(),
        })
    }

    /// Visibility signal from the intersection observer. The first time the
    /// element becomes visible, the scene is built; afterwards visibility
    /// only toggles Active/Suspended without touching resources.
    pub fn set_visible(&mut self, visible: bool, now_ms: f64) {
        self.visible = visible;
        match self.phase {
            Phase::Initializing if visible => {
                if let Err(e) = self.init(now_ms) {
                    log::error!("[net] init error: {e:?}");
                    self.backend.dispose();
                    self.phase = Phase::Destroyed;
                }
            }
            Phase::Active if !visible => self.phase = Phase::Suspended,
            Phase::Suspended if visible => self.phase = Phase::Active,
            _ => {}
        }
    }

    fn init(&mut self, now_ms: f64) -> Result<()> {
        self.field = PointField::seed(self.options.points, self.options.spacing, &mut self.rng);
        self.links = LinkBuffers::new(self.field.len());
        self.dots = Vec::with_capacity(self.field.len());
        self.backend
            .init(
                &self.options,
                self.bounds.width,
                self.bounds.height,
                self.pixel_ratio,
            )
            .context("render backend init")?;
        self.gate = TickGate::new(now_ms, FRAME_INTERVAL_MS);
        self.phase = Phase::Active;
        self.post_init = true;
        log::info!(
            "[net] initialized: {} points, spacing {}, max distance {}",
            self.field.len(),
            self.options.spacing,
            self.options.max_distance
        );
        Ok(())
    }

    /// One scheduler wake-up. Runs the frame when every gate passes, and
    /// returns the delay in milliseconds until the next wake-up. A failing
    /// frame is logged and skipped; repeated failures destroy the effect
    /// instead of silently ending the reschedule chain.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !self.alive() {
            return next_delay_ms(false, self.post_init);
        }

        let scrolling = scheduler::is_scrolling(now_ms);
        let accepted = self.gate.accept(
            now_ms,
            self.visible,
            scrolling,
            self.post_init,
            self.options.force_animate,
        );
        if accepted {
            match self.step() {
                Ok(()) => self.tick_failures = 0,
                Err(e) => {
                    self.tick_failures += 1;
                    log::error!(
                        "[net] frame error ({}/{MAX_TICK_FAILURES}): {e:?}",
                        self.tick_failures
                    );
                    if self.tick_failures >= MAX_TICK_FAILURES {
                        self.destroy();
                    }
                }
            }
        }
        next_delay_ms(self.visible, self.post_init)
    }

    /// The per-frame pipeline, in fixed order: pointer classification, point
    /// drift, connectivity rebuild, buffer upload, render.
    fn step(&mut self) -> Result<()> {
        let highlight_active = self.pointer.updated;
        if let Some(ray) = self.pointer.active_ray() {
            self.field.classify(ray, self.options.highlight_threshold);
        } else if self.pointer.has_ray() {
            self.field.clear_highlights();
        }

        self.field.drift();

        self.links.rebuild(
            self.field.points(),
            &self.palette,
            self.options.max_distance,
            self.options.blending,
            highlight_active,
        );
        self.pointer.tick_throttle(self.options.pointer_decay_frames);

        self.backend.upload_lines(
            self.links.positions(),
            self.links.colors(),
            self.links.vertex_count(),
        );
        if self.options.show_dots {
            self.dots.clear();
            self.dots.extend(self.field.points().iter().map(|p| DotInstance {
                position: p.position,
                scale: p.scale,
                highlighted: p.highlighted,
            }));
            self.backend.upload_dots(&self.dots);
        }

        self.backend.render(&self.camera)?;
        self.backend
            .set_clear_color(self.palette.background, self.options.background_alpha);
        Ok(())
    }

    /// Pointer movement in page coordinates, already debounced by the
    /// caller. Ignored while off-screen, suppressed, or before init.
    pub fn pointer_moved(&mut self, page_x: f32, page_y: f32) {
        if !self.visible || !self.alive() {
            return;
        }
        self.pointer
            .record_move(page_x, page_y, &self.bounds, &self.camera);
    }

    pub fn set_pointer_suppressed(&mut self, suppressed: bool) {
        self.pointer.set_suppressed(suppressed);
    }

    /// New element bounds and pixel density. `scale` (or `scale_mobile` on
    /// mobile hosts) divides the device pixel ratio, trading sharpness for
    /// fill-rate; minimum element dimensions come from the options.
    pub fn resize(&mut self, bounds: ElementBounds, device_pixel_ratio: f32, mobile: bool) {
        if !self.alive() {
            return;
        }
        let divisor = if mobile {
            self.options.scale_mobile
        } else {
            self.options.scale
        };
        self.bounds = ElementBounds {
            width: bounds.width.max(self.options.min_width),
            height: bounds.height.max(self.options.min_height),
            ..bounds
        };
        self.pixel_ratio = device_pixel_ratio / divisor;
        self.camera.aspect = self.bounds.width / self.bounds.height;
        self.backend
            .resize(self.bounds.width, self.bounds.height, self.pixel_ratio);
    }

    /// Tear down: release the rendering surface. Event deregistration is the
    /// wiring layer's responsibility; it stops rescheduling once destroyed.
    pub fn destroy(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.backend.dispose();
        self.phase = Phase::Destroyed;
        log::info!("[net] destroyed");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn alive(&self) -> bool {
        !matches!(self.phase, Phase::Destroyed)
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn post_init(&self) -> bool {
        self.post_init
    }

    pub fn options(&self) -> &NetOptions {
        &self.options
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    pub fn links(&self) -> &LinkBuffers {
        &self.links
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
