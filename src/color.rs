use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Continuous colour scales
// ---------------------------------------------------------------------------

const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: [[u8; 3]; 10] = [
    [0x0d, 0x08, 0x87],
    [0x46, 0x03, 0x9f],
    [0x72, 0x01, 0xa8],
    [0x9c, 0x17, 0x9e],
    [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b],
    [0xed, 0x79, 0x53],
    [0xfb, 0x9f, 0x3a],
    [0xfd, 0xca, 0x26],
    [0xf0, 0xf9, 0x21],
];

/// Perceptually uniform sequential scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    Viridis,
    Plasma,
}

impl ColorScale {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            ColorScale::Viridis => &VIRIDIS,
            ColorScale::Plasma => &PLASMA,
        }
    }

    /// Colour at `t` in `[0, 1]`; out-of-range values are clamped, NaN maps to
    /// the low end.
    pub fn sample(self, t: f64) -> Color32 {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let position = t as f32 * (stops.len() - 1) as f32;
        let lower = (position.floor() as usize).min(stops.len() - 2);
        let factor = position - lower as f32;

        let a = linear(stops[lower]);
        let b = linear(stops[lower + 1]);
        let mixed: Srgb<u8> = Srgb::from_linear(a.mix(b, factor));
        Color32::from_rgb(mixed.red, mixed.green, mixed.blue)
    }
}

fn linear([r, g, b]: [u8; 3]) -> LinSrgb<f32> {
    Srgb::new(r, g, b).into_linear()
}

/// Whether a column range is wide enough to lay values out along it.
pub fn is_spread(span: f64) -> bool {
    span > 0.0 && span.is_finite()
}

/// Position of `value` inside `[min, max]`. A degenerate range maps to the
/// middle of the scale.
pub fn unit_interval(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !is_spread(span) {
        return 0.5;
    }
    (value - min) / span
}

// ---------------------------------------------------------------------------
// Colour mapping: column of values → Color32
// ---------------------------------------------------------------------------

/// Colour every value of a column by its position between the column's
/// min and max.
pub fn colors_for(values: &[f64], scale: ColorScale) -> Vec<Color32> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    values
        .iter()
        .map(|&v| scale.sample(unit_interval(v, min, max)))
        .collect()
}
