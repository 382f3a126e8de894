use crate::camera::Camera;
use crate::color::Color;
use crate::options::NetOptions;
use glam::Vec3;

/// One sphere instance for the optional point dots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotInstance {
    pub position: Vec3,
    pub scale: f32,
    pub highlighted: bool,
}

/// Rendering capability port.
///
/// The effect core never talks to a graphics API directly; the embedding
/// application supplies scene, surface, and draw-call handling behind this
/// trait. `upload_lines` receives the full preallocated buffers plus the
/// live vertex count; the backend is expected to set a draw range, not
/// resize anything.
pub trait RenderBackend {
    /// Acquire the rendering surface and build the static scene (line-segment
    /// geometry, optional dot meshes, lighting).
    fn init(
        &mut self,
        options: &NetOptions,
        width: f32,
        height: f32,
        pixel_ratio: f32,
    ) -> anyhow::Result<()>;

    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32);

    fn set_clear_color(&mut self, color: Color, alpha: f32);

    /// Replace line geometry. `positions` and `colors` are flat `xyz`
    /// triples; only the first `vertex_count` vertices are live.
    fn upload_lines(&mut self, positions: &[f32], colors: &[f32], vertex_count: usize);

    fn upload_dots(&mut self, dots: &[DotInstance]);

    fn render(&mut self, camera: &Camera) -> anyhow::Result<()>;

    /// Release the surface and any scene resources. Must be safe to call
    /// more than once.
    fn dispose(&mut self);
}
