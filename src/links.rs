use crate::color::{Palette, BLACK};
use crate::options::Blending;
use crate::points::NetPoint;
use crate::util::clamp01;

/// Per-frame connection buffers.
///
/// Positions and colors are flat `xyz` triples preallocated for the worst
/// case (`num_points² × 3` floats, enough for every `i < j` pair) and written
/// in place each frame; only the draw range changes. This keeps the steady
/// state allocation-free, which is part of the contract with the renderer.
pub struct LinkBuffers {
    positions: Vec<f32>,
    colors: Vec<f32>,
    connected: usize,
}

impl LinkBuffers {
    pub fn new(num_points: usize) -> Self {
        let cap = num_points * num_points * 3;
        Self {
            positions: vec![0.0; cap],
            colors: vec![0.0; cap],
            connected: 0,
        }
    }

    /// Recompute the connection set from the current point positions.
    ///
    /// Scans unordered pairs (`i < j`, so self-pairs never appear) and emits
    /// a segment for each pair closer than `max_distance`. Segment color is
    /// the proximity-interpolated palette color, or the highlight color when
    /// the first endpoint is pointer-affected. `highlight_active` selects the
    /// gentler interpolation gain used while the pointer effect is engaged.
    ///
    /// Returns the number of connections emitted.
    pub fn rebuild(
        &mut self,
        points: &[NetPoint],
        palette: &Palette,
        max_distance: f32,
        blending: Blending,
        highlight_active: bool,
    ) -> usize {
        let gain = if highlight_active { 1.0 } else { 2.0 };
        let mut vp = 0;
        let mut cp = 0;
        let mut connected = 0;

        for (i, p) in points.iter().enumerate() {
            for p2 in &points[i + 1..] {
                let dist = p.position.distance(p2.position);
                if dist >= max_distance {
                    continue;
                }

                let color = if p.highlighted {
                    palette.highlight
                } else {
                    let alpha = clamp01((1.0 - dist / max_distance) * gain);
                    match blending {
                        Blending::Additive => BLACK.lerp(palette.diff, alpha),
                        Blending::Normal => palette.background.lerp(palette.foreground, alpha),
                    }
                };

                for pos in [p.position, p2.position] {
                    self.positions[vp] = pos.x;
                    self.positions[vp + 1] = pos.y;
                    self.positions[vp + 2] = pos.z;
                    vp += 3;
                    self.colors[cp] = color.r;
                    self.colors[cp + 1] = color.g;
                    self.colors[cp + 2] = color.b;
                    cp += 3;
                }
                connected += 1;
            }
        }

        self.connected = connected;
        connected
    }

    /// Number of line vertices in use: two per connection.
    pub fn vertex_count(&self) -> usize {
        self.connected * 2
    }

    pub fn connected(&self) -> usize {
        self.connected
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }
}
