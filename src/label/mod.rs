//! # Canonical Label Model
//!
//! Device-independent model of placed label elements. This is the shared
//! vocabulary between the editing surface, the language backends and the
//! legacy PPLA importer: editors build and mutate [`Element`] lists, the
//! compilers only read them, and the importer constructs fresh ones.
//!
//! All types derive `Serialize + Deserialize` so the same structs work for
//! Rust API construction and for plain-JSON project files.
//!
//! ## Coordinates
//!
//! `x`/`y` are device units with the origin at the label's top-left corner.
//! They are stored continuous (the editing surface drags elements around at
//! sub-unit precision) and rounded to the nearest integer device unit at
//! emission time. Rotation is stored as a continuous angle in degrees and is
//! only ever consumed through [`Orientation::from_degrees`].

mod orientation;

pub use orientation::Orientation;

use serde::{Deserialize, Serialize};

fn default_scale() -> f64 {
    1.0
}

/// Metadata that every element struct must provide.
///
/// The display label and editor default live next to each struct definition,
/// so adding a new element type is self-contained — implement this trait and
/// the compiler will guide you to the remaining exhaustive matches in
/// [`Element`].
pub trait ElementMeta: Sized {
    /// Human-readable display label (e.g. "Barcode").
    fn label() -> &'static str;

    /// Starter value for the editing surface.
    ///
    /// Distinct from `Default` — editor defaults carry example content so a
    /// freshly added element is immediately visible on the canvas.
    fn editor_default() -> Self;
}

/// A barcode encoding standard.
///
/// Serialized in lowercase (`"code128"`, `"qrcode"`, ...) to match the
/// project file format. Not every backend supports every symbology; an
/// unsupported combination simply emits nothing for that element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Code128,
    Code39,
    Ean13,
    Ean8,
    QrCode,
}

/// A piece of literal text placed on the label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextElement {
    pub x: f64,
    pub y: f64,
    /// Continuous rotation in degrees; backends see only the bucketed form.
    #[serde(default)]
    pub rotation: f64,
    /// Literal content, may be empty.
    pub content: String,
    /// Base glyph height in device units before vertical scaling.
    pub font_size: u32,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

impl ElementMeta for TextElement {
    fn label() -> &'static str {
        "Text"
    }

    fn editor_default() -> Self {
        TextElement {
            x: 50.0,
            y: 50.0,
            rotation: 0.0,
            content: "TEXTO".to_string(),
            font_size: 25,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// A barcode placed on the label.
///
/// `show_text` controls the human-readable line under the bars. The
/// compilers ignore it (the hardware decides per command variant); it drives
/// the raster preview collaborator in [`crate::render::barcode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeElement {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    pub data: String,
    pub symbology: Symbology,
    #[serde(default)]
    pub show_text: bool,
    /// Bar height in device units before vertical scaling.
    pub height: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

impl ElementMeta for BarcodeElement {
    fn label() -> &'static str {
        "Barcode"
    }

    fn editor_default() -> Self {
        BarcodeElement {
            x: 50.0,
            y: 50.0,
            rotation: 0.0,
            data: "12345678".to_string(),
            symbology: Symbology::Code128,
            show_text: true,
            height: 10.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// A rectangle outline.
///
/// Backends without a native rectangle primitive draw the perimeter as four
/// orthogonal line segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxElement {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_width: u32,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

impl ElementMeta for BoxElement {
    fn label() -> &'static str {
        "Box"
    }

    fn editor_default() -> Self {
        BoxElement {
            x: 50.0,
            y: 50.0,
            rotation: 0.0,
            width: 100.0,
            height: 50.0,
            stroke_width: 2,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// A straight line from `(x, y)` spanning `width` × `height`.
///
/// Produced mostly by the legacy PPLA importer, whose line commands are
/// always axis-aligned. Only ZPL has a true diagonal primitive; the other
/// backends emit the dominant-axis orthogonal segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineElement {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_width: u32,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

impl ElementMeta for LineElement {
    fn label() -> &'static str {
        "Line"
    }

    fn editor_default() -> Self {
        LineElement {
            x: 50.0,
            y: 50.0,
            rotation: 0.0,
            width: 100.0,
            height: 0.0,
            stroke_width: 2,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// A placed label element.
///
/// Closed tagged union over the four drawable kinds. Every backend matches
/// it exhaustively, so adding a new element kind is a compile-time-checked
/// change across all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Text(TextElement),
    Barcode(BarcodeElement),
    Box(BoxElement),
    Line(LineElement),
}

impl Element {
    /// Rounded device-unit position.
    pub fn position(&self) -> (i64, i64) {
        let (x, y) = match self {
            Element::Text(t) => (t.x, t.y),
            Element::Barcode(b) => (b.x, b.y),
            Element::Box(b) => (b.x, b.y),
            Element::Line(l) => (l.x, l.y),
        };
        (x.round() as i64, y.round() as i64)
    }

    /// Discrete orientation bucketed from the stored continuous angle.
    pub fn orientation(&self) -> Orientation {
        let angle = match self {
            Element::Text(t) => t.rotation,
            Element::Barcode(b) => b.rotation,
            Element::Box(b) => b.rotation,
            Element::Line(l) => l.rotation,
        };
        Orientation::from_degrees(angle)
    }

    /// Human-readable display label (from [`ElementMeta::label`]).
    pub fn label(&self) -> &'static str {
        match self {
            Element::Text(_) => TextElement::label(),
            Element::Barcode(_) => BarcodeElement::label(),
            Element::Box(_) => BoxElement::label(),
            Element::Line(_) => LineElement::label(),
        }
    }
}

/// Physical label geometry for the editing surface.
///
/// Only sizes the canvas: the compilers consume elements already expressed
/// in device units and never look at this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LabelConfig {
    pub width_mm: u32,
    pub height_mm: u32,
    /// Device units per millimetre (8 at 203 DPI).
    pub dpi_factor: u32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            width_mm: 100,
            height_mm: 50,
            dpi_factor: 8,
        }
    }
}

/// A saved label project: configuration plus the ordered element list.
///
/// Plain JSON on disk; element order is print order and is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub config: LabelConfig,
    pub elements: Vec<Element>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_json_tags() {
        let el = Element::Text(TextElement::editor_default());
        let json = serde_json::to_string(&el).unwrap();
        assert!(json.contains("\"type\":\"text\""), "{json}");

        let el = Element::Barcode(BarcodeElement::editor_default());
        let json = serde_json::to_string(&el).unwrap();
        assert!(json.contains("\"type\":\"barcode\""), "{json}");
        assert!(json.contains("\"symbology\":\"code128\""), "{json}");
    }

    #[test]
    fn test_scales_default_to_one() {
        let json = r#"{"type":"text","x":10,"y":20,"content":"hi","font_size":12}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        match el {
            Element::Text(t) => {
                assert_eq!(t.scale_x, 1.0);
                assert_eq!(t.scale_y, 1.0);
                assert_eq!(t.rotation, 0.0);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_project_round_trip() {
        let project = Project {
            config: LabelConfig::default(),
            elements: vec![
                Element::Text(TextElement::editor_default()),
                Element::Barcode(BarcodeElement::editor_default()),
                Element::Box(BoxElement::editor_default()),
            ],
        };
        let json = serde_json::to_string_pretty(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back.elements.len(), 3);
        assert_eq!(back.config.width_mm, 100);
        assert_eq!(back.elements[0].label(), "Text");
    }

    #[test]
    fn test_position_rounds_to_nearest_unit() {
        let mut t = TextElement::editor_default();
        t.x = 10.5;
        t.y = 19.4;
        let el = Element::Text(t);
        assert_eq!(el.position(), (11, 19));
    }

    #[test]
    fn test_symbology_names() {
        let s: Symbology = serde_json::from_str("\"qrcode\"").unwrap();
        assert_eq!(s, Symbology::QrCode);
        let s: Symbology = serde_json::from_str("\"ean13\"").unwrap();
        assert_eq!(s, Symbology::Ean13);
        assert_eq!(serde_json::to_string(&Symbology::Code39).unwrap(), "\"code39\"");
    }
}
