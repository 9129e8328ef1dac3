use lodestone_util::math::wrap_degrees;
use serde::{Deserialize, Serialize};

/// One of the eight compass arrows a tracked target can sit at, relative to
/// the viewer's facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arrow {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

/// Half-open `[min, max)` yaw bands in degrees. The `±180` wrap point is
/// covered by the two `Bottom` entries, so the table partitions the whole
/// wrapped domain and exactly one band matches any normalized yaw.
///
/// Negative yaw maps to the right-hand arrows: turning right from straight
/// ahead passes through `TopRight`, `Right`, `BottomRight`.
const YAW_BANDS: [(f32, f32, Arrow); 9] = [
    (-181.0, -157.5, Arrow::Bottom),
    (-157.5, -112.5, Arrow::BottomRight),
    (-112.5, -67.5, Arrow::Right),
    (-67.5, -22.5, Arrow::TopRight),
    (-22.5, 22.5, Arrow::Top),
    (22.5, 67.5, Arrow::TopLeft),
    (67.5, 112.5, Arrow::Left),
    (112.5, 157.5, Arrow::BottomLeft),
    (157.5, 181.0, Arrow::Bottom),
];

impl Arrow {
    /// Classifies a yaw angle in degrees.
    ///
    /// Total over every `f32`: the input is normalized into `[-180, 180)`
    /// first, and non-finite values are treated as `0.0`.
    pub fn from_yaw(yaw: f32) -> Self {
        let yaw = if yaw.is_finite() { wrap_degrees(yaw) } else { 0.0 };
        YAW_BANDS
            .iter()
            .find(|(min, max, _)| *min <= yaw && yaw < *max)
            .map(|(_, _, arrow)| *arrow)
            .expect("yaw bands cover the whole wrapped domain")
    }

    /// The unicode glyph used to display this arrow.
    pub const fn glyph(&self) -> char {
        match self {
            Self::Top => '\u{2191}',
            Self::TopRight => '\u{2b08}',
            Self::Right => '\u{2192}',
            Self::BottomRight => '\u{2b0a}',
            Self::Bottom => '\u{2193}',
            Self::BottomLeft => '\u{2b0b}',
            Self::Left => '\u{2190}',
            Self::TopLeft => '\u{2b09}',
        }
    }
}
