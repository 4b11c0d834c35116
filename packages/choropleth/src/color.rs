//! Viridis colour scale over a day's [`ValueRange`].

use std::fmt;

use temp_map_choropleth_models::ValueRange;

/// Viridis ramp, low to high.
const VIRIDIS: [Rgb; 10] = [
    Rgb(0x44, 0x01, 0x54),
    Rgb(0x48, 0x28, 0x78),
    Rgb(0x3e, 0x49, 0x89),
    Rgb(0x31, 0x68, 0x8e),
    Rgb(0x26, 0x82, 0x8e),
    Rgb(0x1f, 0x9e, 0x89),
    Rgb(0x35, 0xb7, 0x79),
    Rgb(0x6e, 0xce, 0x58),
    Rgb(0xb5, 0xde, 0x2b),
    Rgb(0xfd, 0xe7, 0x25),
];

/// An sRGB colour. Displays as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Maps temperatures to fill colours.
///
/// Built from an empty range the scale is disabled and every value maps
/// to `None`, which renderers draw as a neutral fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: Option<(f64, f64)>,
}

impl ColorScale {
    /// Builds a Viridis scale over `range`.
    #[must_use]
    pub const fn viridis(range: ValueRange) -> Self {
        Self {
            domain: range.bounds(),
        }
    }

    /// Returns `false` when there is no data to scale.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.domain.is_some()
    }

    /// Returns the fill colour for `value`.
    ///
    /// Values outside the domain are clamped to its ends. A single-value
    /// domain maps to the middle of the ramp.
    #[must_use]
    pub fn color_for(&self, value: Option<f64>) -> Option<Rgb> {
        let (min, max) = self.domain?;
        let value = value.filter(|v| v.is_finite())?;

        let span = max - min;
        let t = if span > 0.0 {
            ((value - min) / span).clamp(0.0, 1.0)
        } else {
            0.5
        };

        Some(sample(t))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn sample(t: f64) -> Rgb {
    let last = VIRIDIS.len() - 1;
    let position = t * last as f64;
    let lower = (position.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let frac = position - lower as f64;

    let lerp = |a: u8, b: u8| {
        (f64::from(b) - f64::from(a))
            .mul_add(frac, f64::from(a))
            .round() as u8
    };

    let (a, b) = (VIRIDIS[lower], VIRIDIS[upper]);
    Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}
