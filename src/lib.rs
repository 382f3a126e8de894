//! Ambient 3D particle-network background effect.
//!
//! A field of drifting points connected by distance-thresholded,
//! color-interpolated line segments, with a pointer-driven highlight. The
//! core (point field, connectivity, pointer tracking, frame scheduling) is
//! platform-independent and testable on the host; rendering goes through the
//! [`render::RenderBackend`] port and browser wiring lives in [`web`]
//! (wasm32 only).

pub mod camera;
pub mod color;
pub mod constants;
pub mod effect;
pub mod links;
pub mod options;
pub mod pointer;
pub mod points;
pub mod render;
pub mod scheduler;
pub mod util;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use camera::{Camera, Ray};
pub use color::{Color, Palette};
pub use effect::NetEffect;
pub use links::LinkBuffers;
pub use options::{Blending, NetOptions};
pub use pointer::{normalize_pointer, ElementBounds, PointerState};
pub use points::{NetPoint, PointField};
pub use render::{DotInstance, RenderBackend};
pub use scheduler::Phase;
