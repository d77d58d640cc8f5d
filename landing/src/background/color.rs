/// Linear RGB colour with channels in 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Blend toward `other`; `k = 0` yields `self`, `k = 1` yields `other`.
    pub fn mix(self, other: Rgb, k: f64) -> Rgb {
        let k = k.clamp(0.0, 1.0);
        Rgb {
            r: self.r * (1.0 - k) + other.r * k,
            g: self.g * (1.0 - k) + other.g * k,
            b: self.b * (1.0 - k) + other.b * k,
        }
    }

    pub fn to_css(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            alpha.clamp(0.0, 1.0)
        )
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
