//! # Label Dimension Estimator
//!
//! After an import there is no label configuration to go with the decoded
//! elements, so the canvas bounds are re-established from the elements
//! themselves: take the furthest x/y any element reaches, convert from the
//! legacy decimillimetre unit to millimetres, and reserve a margin. Floors
//! of 100×50 mm guarantee a usable canvas even for a near-empty decode.

use crate::label::Element;

/// Minimum label size in millimetres, derived from decoded elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDimensions {
    pub width_mm: u32,
    pub height_mm: u32,
}

/// Estimate canvas bounds for a decoded element sequence.
///
/// `width = max(100, ceil(max_x / 10) + 20)` and
/// `height = max(50, ceil(max_y / 10) + 30)`: the `/10` converts legacy
/// decimillimetres to millimetres, the additive constants reserve margin.
///
/// ```
/// use etiqueta::import::{LabelDimensions, estimate};
///
/// assert_eq!(
///     estimate(&[]),
///     LabelDimensions { width_mm: 100, height_mm: 50 }
/// );
/// ```
pub fn estimate(elements: &[Element]) -> LabelDimensions {
    let mut max_x: i64 = 0;
    let mut max_y: i64 = 0;

    for element in elements {
        let (x, y) = element.position();
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    LabelDimensions {
        width_mm: (div_ceil_10(max_x) + 20).max(100) as u32,
        height_mm: (div_ceil_10(max_y) + 30).max(50) as u32,
    }
}

fn div_ceil_10(units: i64) -> i64 {
    (units + 9).div_euclid(10)
}
