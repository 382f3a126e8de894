use rand::Rng;

/// Uniform float in `[start, end)`.
#[inline]
pub fn rn<R: Rng>(rng: &mut R, start: f32, end: f32) -> f32 {
    start + rng.gen::<f32>() * (end - start)
}

/// Uniform integer in `[start, end]`, both ends inclusive.
#[inline]
pub fn ri<R: Rng>(rng: &mut R, start: i32, end: i32) -> i32 {
    start + (rng.gen::<f32>() * (end - start + 1) as f32).floor() as i32
}

#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
