//! Two blurred orbs drifting up and down at the hero's corners.

use super::animation::{Scene, drive_canvas};
use super::color::Rgb;
use super::ripple::smoothstep;
use crate::error::LandingError;
use leptos::html;
use leptos::prelude::*;
use std::f64::consts::PI;
use web_sys::CanvasRenderingContext2d;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Centre as a fraction of the canvas size.
    pub anchor: (f64, f64),
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
    /// Peak vertical offset in pixels (negative = up).
    pub rise: f64,
    /// Peak rotation in degrees.
    pub tilt: f64,
    /// Seconds for one full out-and-back swing.
    pub period: f64,
    /// Seconds before the first swing starts.
    pub delay: f64,
}

pub const ORBS: [Orb; 2] = [
    Orb {
        anchor: (0.08, 0.18),
        radius: 40.0,
        color: Rgb::new(0.914, 0.835, 1.0),
        alpha: 0.3,
        rise: -20.0,
        tilt: 5.0,
        period: 6.0,
        delay: 0.0,
    },
    Orb {
        anchor: (0.9, 0.8),
        radius: 64.0,
        color: Rgb::new(0.847, 0.706, 0.996),
        alpha: 0.2,
        rise: 20.0,
        tilt: -5.0,
        period: 8.0,
        delay: 2.0,
    },
];

/// Progress through a 0 -> 1 -> 0 swing with ease-in-out on each half.
pub fn swing(time: f64, period: f64, delay: f64) -> f64 {
    if time < delay || period <= 0.0 {
        return 0.0;
    }
    let phase = ((time - delay) % period) / period;
    let half = if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
    smoothstep(0.0, 1.0, half)
}

impl Orb {
    /// Vertical offset (px) and rotation (radians) at `time`.
    pub fn pose(&self, time: f64) -> (f64, f64) {
        let s = swing(time, self.period, self.delay);
        (self.rise * s, self.tilt.to_radians() * s)
    }

    /// Ellipse arguments (centre, radii, rotation) on a `width` x `height`
    /// canvas. Orbs are circles, so both radii match.
    pub fn outline(&self, width: f64, height: f64, time: f64) -> Outline {
        let (dy, angle) = self.pose(time);
        Outline {
            x: self.anchor.0 * width,
            y: self.anchor.1 * height + dy,
            radius_x: self.radius,
            radius_y: self.radius,
            angle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub x: f64,
    pub y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    pub angle: f64,
}

#[derive(Debug, Default)]
struct OrbScene {
    width: f64,
    height: f64,
}

impl Scene for OrbScene {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn draw(&mut self, ctx: &CanvasRenderingContext2d, time: f64) -> Result<(), LandingError> {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.save();
        ctx.set_filter("blur(24px)");
        for orb in &ORBS {
            let shape = orb.outline(self.width, self.height, time);
            ctx.begin_path();
            ctx.ellipse(
                shape.x,
                shape.y,
                shape.radius_x,
                shape.radius_y,
                shape.angle,
                0.0,
                2.0 * PI,
            )?;
            ctx.set_fill_style_str(&orb.color.to_css(orb.alpha));
            ctx.fill();
        }
        ctx.restore();
        Ok(())
    }
}

#[component]
pub fn FloatingOrbs() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    drive_canvas(canvas_ref, OrbScene::default, "floating-orbs");

    view! {
        <div class="bg-layer bg-layer-front" aria-hidden="true">
            <canvas node_ref=canvas_ref class="bg-canvas floating-orbs"></canvas>
        </div>
    }
}
