use crate::camera::Ray;
use crate::constants::{
    DOT_SCALE_MAX, DOT_SCALE_MIN, DRIFT_STEP, JITTER_XZ, JITTER_Y, RATE_MAX, RATE_MIN, RAY_FALLOFF,
    RAY_REACH, Y_SPREAD_MAX, Y_SPREAD_MIN,
};
use crate::util::{ri, rn};
use glam::Vec3;
use rand::Rng;

/// One drifting point of the network.
#[derive(Clone, Debug)]
pub struct NetPoint {
    pub position: Vec3,
    /// Seed coordinates, kept for reference; never mutated after creation.
    pub origin: Vec3,
    /// Angular drift rate. Exactly zero (possible by chance) disables drift.
    pub rate: f32,
    /// Visual scale under pointer proximity, in `[DOT_SCALE_MIN, DOT_SCALE_MAX]`.
    pub scale: f32,
    pub highlighted: bool,
}

impl NetPoint {
    fn new<R: Rng>(rng: &mut R, x: f32, y: f32, z: f32) -> Self {
        let position = Vec3::new(x, y, z);
        Self {
            position,
            origin: position,
            rate: rn(rng, RATE_MIN, RATE_MAX),
            scale: DOT_SCALE_MIN,
            highlighted: false,
        }
    }
}

/// The point cloud: seeded once per effect initialization, drifted every
/// accepted frame, discarded wholesale on re-initialization.
#[derive(Clone, Debug, Default)]
pub struct PointField {
    points: Vec<NetPoint>,
}

impl PointField {
    /// Seed a brick-like lattice: `(n + 1)²` grid cells, two jittered points
    /// per cell (one biased below the cell plane, one above), with every
    /// other row offset by half the spacing to break up axis-aligned lines.
    pub fn seed<R: Rng>(n: u32, spacing: f32, rng: &mut R) -> Self {
        let n = n as i32;
        let half = n as f32 / 2.0;
        let mut points = Vec::with_capacity(((n + 1) * (n + 1) * 2) as usize);
        for i in 0..=n {
            for j in 0..=n {
                let y = ri(rng, -JITTER_Y, JITTER_Y) as f32;
                let x = (i as f32 - half) * spacing + ri(rng, -JITTER_XZ, JITTER_XZ) as f32;
                let mut z = (j as f32 - half) * spacing + ri(rng, -JITTER_XZ, JITTER_XZ) as f32;
                if i % 2 == 1 {
                    z += spacing * 0.5;
                }

                let below = y - ri(rng, Y_SPREAD_MIN, Y_SPREAD_MAX) as f32;
                let above = y + ri(rng, Y_SPREAD_MIN, Y_SPREAD_MAX) as f32;
                points.push(NetPoint::new(rng, x, below, z));
                let jx = ri(rng, -JITTER_XZ, JITTER_XZ) as f32;
                let jz = ri(rng, -JITTER_XZ, JITTER_XZ) as f32;
                points.push(NetPoint::new(rng, x + jx, above, z + jz));
            }
        }
        Self { points }
    }

    /// Build a field from explicit points, bypassing grid seeding.
    pub fn from_points(points: Vec<NetPoint>) -> Self {
        Self { points }
    }

    /// Advance every point one drift step: `(x, z)` as polar coordinates
    /// around the origin, angle advanced by `DRIFT_STEP * rate` at constant
    /// radius. `y` never changes.
    pub fn drift(&mut self) {
        for p in &mut self.points {
            if p.rate == 0.0 {
                continue;
            }
            let radius = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
            let ang = p.position.z.atan2(p.position.x) + DRIFT_STEP * p.rate;
            p.position.x = radius * ang.cos();
            p.position.z = radius * ang.sin();
        }
    }

    /// Mark points near the pointer ray. `closeness` maps ray distance into
    /// a score where larger is nearer; above `threshold` the point is
    /// highlighted, and the dot scale tracks the score within its clamp.
    pub fn classify(&mut self, ray: &Ray, threshold: f32) {
        for p in &mut self.points {
            let closeness = (RAY_REACH - ray.distance_to_point(p.position)) * RAY_FALLOFF;
            p.highlighted = closeness > threshold;
            p.scale = closeness.clamp(DOT_SCALE_MIN, DOT_SCALE_MAX);
        }
    }

    pub fn clear_highlights(&mut self) {
        for p in &mut self.points {
            p.highlighted = false;
            p.scale = DOT_SCALE_MIN;
        }
    }

    pub fn points(&self) -> &[NetPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
