//! # EPL Backend
//!
//! Code generator for Eltron EPL2 (Eltron Programming Language), the
//! simplest dialect in the catalogue.
//!
//! ## Program Shape
//!
//! ```text
//! N          clear buffer
//! q800       label width
//! Q400,24    label height and gap
//! ...        one fragment per element, in list order
//! P1         print one label
//! ```
//!
//! EPL has the narrowest feature set here: text always uses printer font 3
//! at 1x1 expansion, only Code 128 and Code 39 barcodes are available, and
//! boxes/lines are drawn with the `LO` (line draw black) primitive. QR and
//! the EAN symbologies fall through and emit nothing.

use super::{Compiler, LanguageInfo};
use crate::label::Element;

const INFO: LanguageInfo = LanguageInfo {
    id: "EPL",
    name: "Eltron EPL",
    description: "Eltron Programming Language",
    manufacturer: "Eltron/Zebra",
    file_extension: "epl",
};

/// Eltron EPL2 code generator.
pub struct Epl;

impl Compiler for Epl {
    fn info(&self) -> &LanguageInfo {
        &INFO
    }

    fn compile(&self, elements: &[Element]) -> String {
        let mut code = String::from("N\nq800\nQ400,24\n");

        for element in elements {
            let (x, y) = element.position();
            let r = element.orientation().digit();

            match element {
                Element::Text(text) => {
                    code.push_str(&format!(
                        "A{x},{y},{r},3,1,1,N,\"{content}\"\n",
                        content = text.content,
                    ));
                }
                Element::Barcode(barcode) => {
                    use crate::label::Symbology::*;
                    let h = (barcode.height * barcode.scale_y).round() as i64;
                    let data = &barcode.data;
                    match barcode.symbology {
                        Code128 => code.push_str(&format!(
                            "B{x},{y},{r},1,2,2,{h},B,\"{data}\"\n"
                        )),
                        Code39 => code.push_str(&format!(
                            "B{x},{y},{r},3,2,2,{h},B,\"{data}\"\n"
                        )),
                        // Not offered by this generator.
                        QrCode | Ean13 | Ean8 => {}
                    }
                }
                Element::Box(boxed) => {
                    let w = (boxed.width * boxed.scale_x).round() as i64;
                    let h = (boxed.height * boxed.scale_y).round() as i64;
                    let b = boxed.stroke_width;
                    code.push_str(&format!("LO{x},{y},{w},{b}\n"));
                    code.push_str(&format!("LO{x},{by},{w},{b}\n", by = y + h));
                    code.push_str(&format!("LO{x},{y},{b},{h}\n"));
                    code.push_str(&format!("LO{rx},{y},{b},{h}\n", rx = x + w));
                }
                Element::Line(line) => {
                    let w = (line.width * line.scale_x).round() as i64;
                    let h = (line.height * line.scale_y).round() as i64;
                    let b = line.stroke_width;
                    if w >= h {
                        code.push_str(&format!("LO{x},{y},{w},{b}\n"));
                    } else {
                        code.push_str(&format!("LO{x},{y},{b},{h}\n"));
                    }
                }
            }
        }

        code.push_str("P1\n");
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{BarcodeElement, BoxElement, ElementMeta, Symbology, TextElement};
    use pretty_assertions::assert_eq;

    const HEADER: &str = "N\nq800\nQ400,24\n";

    #[test]
    fn test_empty_list_is_header_plus_footer() {
        assert_eq!(Epl.compile(&[]), format!("{HEADER}P1\n"));
    }

    #[test]
    fn test_text_fixed_font() {
        let code = Epl.compile(&[Element::Text(TextElement::editor_default())]);
        assert_eq!(code, format!("{HEADER}A50,50,0,3,1,1,N,\"TEXTO\"\nP1\n"));
    }

    #[test]
    fn test_rotation_digit() {
        let mut text = TextElement::editor_default();
        text.rotation = 200.0;
        let code = Epl.compile(&[Element::Text(text)]);
        assert!(code.contains("A50,50,2,3,1,1,N,"), "{code}");
    }

    #[test]
    fn test_code128_and_code39() {
        let mut barcode = BarcodeElement::editor_default();
        barcode.height = 48.0;
        let code = Epl.compile(&[Element::Barcode(barcode.clone())]);
        assert!(code.contains("B50,50,0,1,2,2,48,B,\"12345678\"\n"), "{code}");

        barcode.symbology = Symbology::Code39;
        let code = Epl.compile(&[Element::Barcode(barcode)]);
        assert!(code.contains("B50,50,0,3,2,2,48,B,\"12345678\"\n"), "{code}");
    }

    #[test]
    fn test_qr_and_ean_fall_through() {
        for symbology in [Symbology::QrCode, Symbology::Ean13, Symbology::Ean8] {
            let mut barcode = BarcodeElement::editor_default();
            barcode.symbology = symbology;
            let code = Epl.compile(&[Element::Barcode(barcode)]);
            assert_eq!(code, format!("{HEADER}P1\n"), "{symbology:?}");
        }
    }

    #[test]
    fn test_box_is_four_lo_segments() {
        let code = Epl.compile(&[Element::Box(BoxElement::editor_default())]);
        let expected = format!(
            "{HEADER}LO50,50,100,2\nLO50,100,100,2\nLO50,50,2,50\nLO150,50,2,50\nP1\n"
        );
        assert_eq!(code, expected);
    }

    #[test]
    fn test_no_preview_capability() {
        assert!(Epl.preview_url("N\nP1\n").is_none());
    }
}
