//! Water ripple behind the hero: a purple tile field that swells and waves
//! around a pointer which lazily follows the mouse.

use super::animation::{Scene, drive_canvas};
use super::color::Rgb;
use crate::error::LandingError;
use leptos::html;
use leptos::prelude::*;
use std::f64::consts::PI;
use web_sys::CanvasRenderingContext2d;

/// Influence radius in UV units.
pub const RADIUS: f64 = 0.25;
/// Fraction of the remaining distance the pointer covers each frame.
pub const EASING: f64 = 0.1;
/// Tile edge in CSS pixels.
const TILE: f64 = 24.0;

pub const PURPLE: Rgb = Rgb::new(0.627, 0.125, 0.9);
pub const DEEP_PURPLE: Rgb = Rgb::new(0.4, 0.0, 0.8);

/// Hermite interpolation between `edge0` and `edge1`, clamped to 0..1.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Colour weight of a point `dist` away from the pointer.
pub fn strength(dist: f64) -> f64 {
    1.0 - smoothstep(0.0, RADIUS, dist)
}

/// Wave height at `dist` from the pointer, `time` seconds in. Zero outside
/// the radius; the weight falls off linearly, unlike the colour.
pub fn displacement(dist: f64, time: f64) -> f64 {
    if dist >= RADIUS {
        return 0.0;
    }
    let falloff = (RADIUS - dist) / RADIUS;
    (dist * 20.0 - time * 4.0).sin() * 0.1 * falloff
}

/// Tile colour and alpha for a given strength.
pub fn shade(strength: f64) -> (Rgb, f64) {
    (PURPLE.mix(DEEP_PURPLE, strength), 0.3 + strength * 0.2)
}

/// Eased pointer position in UV space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    pub u: f64,
    pub v: f64,
}

impl Default for Follower {
    fn default() -> Self {
        Self { u: 0.5, v: 0.5 }
    }
}

impl Follower {
    pub fn step(&mut self, target_u: f64, target_v: f64) {
        self.u += (target_u - self.u) * EASING;
        self.v += (target_v - self.v) * EASING;
    }
}

#[derive(Debug, Default)]
struct RippleScene {
    width: f64,
    height: f64,
    target: Option<(f64, f64)>,
    pointer: Follower,
}

impl Scene for RippleScene {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn pointer(&mut self, u: f64, v: f64) {
        self.target = Some((u, v));
    }

    fn draw(&mut self, ctx: &CanvasRenderingContext2d, time: f64) -> Result<(), LandingError> {
        let (target_u, target_v) = self.target.unwrap_or((0.5, 0.5));
        self.pointer.step(target_u, target_v);

        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        let cols = (self.width / TILE).ceil() as usize;
        let rows = (self.height / TILE).ceil() as usize;
        for row in 0..rows {
            for col in 0..cols {
                let x = col as f64 * TILE;
                let y = row as f64 * TILE;
                let u = (x + TILE / 2.0) / self.width;
                let v = (y + TILE / 2.0) / self.height;
                let dist = (u - self.pointer.u).hypot(v - self.pointer.v);

                let s = strength(dist);
                let (color, alpha) = shade(s);
                let wave = displacement(dist, time);
                // swell toward the viewer: grow the tile and lift it
                let size = TILE * (1.0 + wave * 2.0);
                let lift = wave * TILE * 3.0;

                ctx.set_fill_style_str(&color.to_css(alpha));
                ctx.fill_rect(
                    x + (TILE - size) / 2.0,
                    y + (TILE - size) / 2.0 - lift,
                    size,
                    size,
                );
            }
        }

        // soft highlight under the pointer
        ctx.begin_path();
        ctx.arc(
            self.pointer.u * self.width,
            self.pointer.v * self.height,
            RADIUS * self.width.min(self.height),
            0.0,
            2.0 * PI,
        )?;
        ctx.set_fill_style_str(&DEEP_PURPLE.to_css(0.08));
        ctx.fill();
        Ok(())
    }
}

#[component]
pub fn WaterRipple() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    drive_canvas(canvas_ref, RippleScene::default, "water-ripple");

    view! {
        <div class="bg-layer" aria-hidden="true">
            <canvas node_ref=canvas_ref class="bg-canvas water-ripple"></canvas>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn smoothstep_clamps_and_is_symmetric() {
        assert!(close(smoothstep(0.0, 1.0, -1.0), 0.0));
        assert!(close(smoothstep(0.0, 1.0, 2.0), 1.0));
        assert!(close(smoothstep(0.0, 1.0, 0.5), 0.5));
        assert!(close(
            smoothstep(0.0, 1.0, 0.25) + smoothstep(0.0, 1.0, 0.75),
            1.0
        ));
    }

    #[test]
    fn strength_is_full_at_pointer_and_zero_at_radius() {
        assert!(close(strength(0.0), 1.0));
        assert!(close(strength(RADIUS), 0.0));
        assert!(close(strength(RADIUS * 3.0), 0.0));
        assert!(strength(RADIUS / 2.0) > 0.0 && strength(RADIUS / 2.0) < 1.0);
    }

    #[test]
    fn displacement_vanishes_outside_radius() {
        assert!(close(displacement(RADIUS, 1.0), 0.0));
        assert!(close(displacement(0.9, 3.3), 0.0));
        assert!(displacement(0.05, 0.0).abs() <= 0.1);
    }

    #[test]
    fn wave_weight_is_linear_in_distance() {
        // time picked so the sine term peaks at 1
        let time = (RADIUS / 2.0 * 20.0 - PI / 2.0) / 4.0;
        assert!(close(displacement(RADIUS / 2.0, time), 0.05));

        let time = (RADIUS / 4.0 * 20.0 - PI / 2.0) / 4.0;
        assert!(close(displacement(RADIUS / 4.0, time), 0.075));
    }

    #[test]
    fn shade_spans_both_purples() {
        let (far, far_alpha) = shade(0.0);
        let (near, near_alpha) = shade(1.0);
        assert_eq!(far, PURPLE);
        assert_eq!(near, DEEP_PURPLE);
        assert!(close(far_alpha, 0.3));
        assert!(close(near_alpha, 0.5));
    }

    #[test]
    fn follower_eases_toward_target() {
        let mut pointer = Follower::default();
        pointer.step(1.0, 0.0);
        assert!(close(pointer.u, 0.55));
        assert!(close(pointer.v, 0.45));

        for _ in 0..200 {
            pointer.step(1.0, 0.0);
        }
        assert!((pointer.u - 1.0).abs() < 1e-6);
        assert!(pointer.v.abs() < 1e-6);
    }
}
