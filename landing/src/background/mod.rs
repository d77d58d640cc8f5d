//! Decorative canvas backgrounds.
//!
//! Each effect is a [`Scene`] driven by an [`AnimationLoop`] that starts when
//! its `<canvas>` mounts and stops on unmount. The per-frame maths is kept in
//! plain functions so it can be checked without a browser.

mod animation;
mod color;
mod orbs;
mod ripple;

pub use animation::{AnimationLoop, Scene, drive_canvas};
pub use color::Rgb;
pub use orbs::{FloatingOrbs, ORBS, Orb, Outline, swing};
pub use ripple::{Follower, WaterRipple, displacement, shade, smoothstep, strength};
