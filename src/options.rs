use anyhow::{bail, Result};

/// How segment colors blend against the page background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Blending {
    #[default]
    Normal,
    Additive,
}

/// Effect configuration, immutable once the effect is constructed.
///
/// `points` is the count along one grid axis; seeding produces
/// `(points + 1)² × 2` points. `scale` / `scale_mobile` divide the device
/// pixel ratio to trade sharpness for fill-rate.
#[derive(Clone, Debug)]
pub struct NetOptions {
    pub points: u32,
    pub spacing: f32,
    pub max_distance: f32,
    pub color: u32,
    pub background_color: u32,
    pub background_alpha: f32,
    pub show_dots: bool,
    pub blending: Blending,
    pub scale: f32,
    pub scale_mobile: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub force_animate: bool,
    /// Pointer-proximity score above which a point is highlighted.
    pub highlight_threshold: f32,
    pub highlight_color: u32,
    /// Frames between pointer-highlight refreshes once movement stops.
    pub pointer_decay_frames: u32,
    /// Fixed RNG seed for reproducible jitter; `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            points: 10,
            spacing: 15.0,
            max_distance: 20.0,
            color: 0xff3f81,
            background_color: 0xffffff,
            background_alpha: 1.0,
            show_dots: true,
            blending: Blending::Normal,
            scale: 1.0,
            scale_mobile: 1.0,
            min_width: 200.0,
            min_height: 200.0,
            force_animate: false,
            highlight_threshold: 1.0,
            highlight_color: 0x800080,
            pointer_decay_frames: 72,
            seed: None,
        }
    }
}

impl NetOptions {
    pub fn validate(&self) -> Result<()> {
        if self.points == 0 {
            bail!("points must be at least 1");
        }
        if !(self.spacing > 0.0) {
            bail!("spacing must be positive, got {}", self.spacing);
        }
        if !(self.max_distance > 0.0) {
            bail!("max_distance must be positive, got {}", self.max_distance);
        }
        if !(self.scale > 0.0) || !(self.scale_mobile > 0.0) {
            bail!("scale factors must be positive");
        }
        if self.pointer_decay_frames == 0 {
            bail!("pointer_decay_frames must be at least 1");
        }
        Ok(())
    }

    /// Total number of seeded points for this configuration.
    pub fn num_points(&self) -> usize {
        let per_axis = self.points as usize + 1;
        per_axis * per_axis * 2
    }
}
