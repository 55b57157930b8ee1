//! # Orientation Normalizer
//!
//! Elements store a continuous rotation angle, but every printer language
//! encodes rotation as one of four discrete states. This module is the
//! single place that discretization happens; backends never bucket angles
//! themselves. Divergent rounding between backends is the classic source of
//! cross-language inconsistencies, so all of them go through
//! [`Orientation::from_degrees`].
//!
//! ## Bucketing
//!
//! Half-open intervals over a normalized [0, 360) domain:
//!
//! | Angle range | Orientation |
//! |-------------|-------------|
//! | [45, 135) | Rotated90 |
//! | [135, 225) | Inverted180 |
//! | [225, 315) | Rotated270 |
//! | [0, 45) ∪ [315, 360) | Normal |
//!
//! Boundary angles always land in the upper interval: 45° is already
//! `Rotated90`, 44.9° is still `Normal`.

/// One of the four discrete rotation states shared by every backend.
///
/// Derived from the continuous angle on demand, never stored on elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 0° (upright)
    Normal,
    /// 90° clockwise
    Rotated90,
    /// 180° (upside down)
    Inverted180,
    /// 270° clockwise
    Rotated270,
}

impl Orientation {
    /// Bucket a continuous angle in degrees into an orientation.
    ///
    /// The angle is first normalized into [0, 360), so negative angles and
    /// angles above 360° behave like their canonical equivalents.
    ///
    /// ```
    /// use etiqueta::label::Orientation;
    ///
    /// assert_eq!(Orientation::from_degrees(0.0), Orientation::Normal);
    /// assert_eq!(Orientation::from_degrees(45.0), Orientation::Rotated90);
    /// assert_eq!(Orientation::from_degrees(-90.0), Orientation::Rotated270);
    /// ```
    pub fn from_degrees(angle: f64) -> Self {
        let a = angle.rem_euclid(360.0);
        if (45.0..135.0).contains(&a) {
            Orientation::Rotated90
        } else if (135.0..225.0).contains(&a) {
            Orientation::Inverted180
        } else if (225.0..315.0).contains(&a) {
            Orientation::Rotated270
        } else {
            Orientation::Normal
        }
    }

    /// ZPL rotation letter (`^A`, `^BC`, `^BQ`, ... field orientation).
    pub fn zpl_token(self) -> char {
        match self {
            Orientation::Normal => 'N',
            Orientation::Rotated90 => 'R',
            Orientation::Inverted180 => 'I',
            Orientation::Rotated270 => 'B',
        }
    }

    /// Rotation digit used by PPLA, PPLB and EPL (0-3).
    pub fn digit(self) -> u8 {
        match self {
            Orientation::Normal => 0,
            Orientation::Rotated90 => 1,
            Orientation::Inverted180 => 2,
            Orientation::Rotated270 => 3,
        }
    }

    /// Whether a box footprint rotates onto its side at this orientation.
    ///
    /// At 90°/270° the emitted width and height swap, since the printed
    /// rectangle occupies the transposed extent on the label.
    pub fn swaps_box_axes(self) -> bool {
        matches!(self, Orientation::Rotated90 | Orientation::Rotated270)
    }
}
