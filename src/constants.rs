/// Effect timing and interaction tuning constants.
///
/// These express intended behavior (cadences, thresholds, clamp limits) and
/// keep magic numbers out of the code.
// Frame acceptance budget: 16 notional fps
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 16.0;

// Adaptive reschedule delays (ms)
pub const DELAY_OFFSCREEN_MS: f64 = 1000.0;
pub const DELAY_STEADY_MS: f64 = 24.0;
pub const DELAY_WARMUP_MS: f64 = 0.0;

// Shared scroll-suppression window
pub const SCROLL_WINDOW_MS: f64 = 100.0;

// Pointer-move debounce (ms); longer while the pointer sits over foreground UI
pub const POINTER_DEBOUNCE_MS: i32 = 4;
pub const POINTER_DEBOUNCE_SUPPRESSED_MS: i32 = 32;

// Debounce for window resizes once the effect is initialized (ms)
pub const RESIZE_DEBOUNCE_MS: i32 = 100;

// Element counts as on-screen above this intersection ratio
pub const INTERSECTION_THRESHOLD: f64 = 0.6;

// Consecutive failing frames tolerated before tearing the effect down
pub const MAX_TICK_FAILURES: u32 = 3;

// Per-frame angular drift increment, scaled by each point's rate
pub const DRIFT_STEP: f32 = 0.00025;

// Grid jitter ranges (world units)
pub const JITTER_XZ: i32 = 5;
pub const JITTER_Y: i32 = 3;
pub const Y_SPREAD_MIN: i32 = 5;
pub const Y_SPREAD_MAX: i32 = 15;

// Point drift-rate range
pub const RATE_MIN: f32 = -2.0;
pub const RATE_MAX: f32 = 2.0;

// Pointer-ray proximity mapping: closeness = (REACH - distance) * FALLOFF
pub const RAY_REACH: f32 = 12.0;
pub const RAY_FALLOFF: f32 = 0.25;

// Dot scale clamp under pointer proximity
pub const DOT_SCALE_MIN: f32 = 1.0;
pub const DOT_SCALE_MAX: f32 = 2.0;

// Camera placement shared by rendering and ray queries
pub const CAMERA_FOV_DEG: f32 = 25.0;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 10000.0;
pub const CAMERA_EYE: [f32; 3] = [50.0, 100.0, 150.0];
