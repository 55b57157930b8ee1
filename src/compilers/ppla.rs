//! # PPLA Backend
//!
//! Code generator for Argox PPLA (Printer Programming Language A), the
//! fixed-width legacy dialect.
//!
//! ## Program Shape
//!
//! ```text
//! n          clear buffer
//! q800       label width
//! Q400,24    label height and gap
//! S4         speed
//! D8         density
//! ...        one fragment per element, in list order
//! P1         print one label
//! ```
//!
//! PPLA has no rectangle primitive: boxes are drawn as four `X`/`Y` line
//! segments around the perimeter. Text heights are in a coarser unit than
//! the canvas (a /10 divisor). Note that the generated text command layout
//! (`A...`) is not the same dialect the legacy importer parses
//! (`1{class}{subclass}...`); generation and parsing evolved separately,
//! see [`crate::import::ppla`].

use super::{Compiler, LanguageInfo};
use crate::label::Element;

const INFO: LanguageInfo = LanguageInfo {
    id: "PPLA",
    name: "Argox PPLA",
    description: "Printer Programming Language A",
    manufacturer: "Argox",
    file_extension: "ppla",
};

/// Argox PPLA code generator.
pub struct Ppla;

impl Compiler for Ppla {
    fn info(&self) -> &LanguageInfo {
        &INFO
    }

    fn compile(&self, elements: &[Element]) -> String {
        let mut code = String::from("n\nq800\nQ400,24\nS4\nD8\n");

        for element in elements {
            let (x, y) = element.position();
            let r = element.orientation().digit();

            match element {
                Element::Text(text) => {
                    // PPLA font heights are a tenth of the canvas unit.
                    let h = (text.font_size as f64 * text.scale_y / 10.0).round() as i64;
                    code.push_str(&format!(
                        "A{r},{x},{y},1,1,{h},{h},N,\"{content}\"\n",
                        content = text.content,
                    ));
                }
                Element::Barcode(barcode) => {
                    use crate::label::Symbology::*;
                    let h = (barcode.height * barcode.scale_y).round() as i64;
                    let data = &barcode.data;
                    match barcode.symbology {
                        QrCode => {
                            let scale = ((barcode.scale_x * 2.0).round() as i64).max(1);
                            code.push_str(&format!(
                                "b{x},{y},Q,s{scale},m2,e2,\"{data}\"\n"
                            ));
                        }
                        Code128 | Ean13 => code.push_str(&format!(
                            "1E{r}{x},{y},0,3,2,0,{h},B,\"{data}\"\n"
                        )),
                        Code39 => code.push_str(&format!(
                            "1{r}{x},{y},0,3,2,0,{h},B,\"{data}\"\n"
                        )),
                        Ean8 => {}
                    }
                }
                Element::Box(boxed) => {
                    let w = (boxed.width * boxed.scale_x).round() as i64;
                    let h = (boxed.height * boxed.scale_y).round() as i64;
                    let b = boxed.stroke_width;
                    // Perimeter as four segments: top, bottom, left, right.
                    code.push_str(&format!("X{x},{y},{b},{w}\n"));
                    code.push_str(&format!("X{x},{by},{b},{w}\n", by = y + h));
                    code.push_str(&format!("Y{x},{y},{b},{h}\n"));
                    code.push_str(&format!("Y{rx},{y},{b},{h}\n", rx = x + w));
                }
                Element::Line(line) => {
                    let w = (line.width * line.scale_x).round() as i64;
                    let h = (line.height * line.scale_y).round() as i64;
                    let b = line.stroke_width;
                    // Axis-aligned segment along the dominant extent.
                    if w >= h {
                        code.push_str(&format!("X{x},{y},{b},{w}\n"));
                    } else {
                        code.push_str(&format!("Y{x},{y},{b},{h}\n"));
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
    use crate::label::{BarcodeElement, BoxElement, ElementMeta, LineElement, Symbology, TextElement};
    use pretty_assertions::assert_eq;

    const HEADER: &str = "n\nq800\nQ400,24\nS4\nD8\n";

    #[test]
    fn test_empty_list_is_header_plus_footer() {
        assert_eq!(Ppla.compile(&[]), format!("{HEADER}P1\n"));
    }

    #[test]
    fn test_code128_barcode_fragment() {
        let elements = vec![Element::Barcode(BarcodeElement {
            x: 50.0,
            y: 50.0,
            rotation: 0.0,
            data: "12345678".to_string(),
            symbology: Symbology::Code128,
            show_text: true,
            height: 10.0,
            scale_x: 1.0,
            scale_y: 1.0,
        })];
        assert_eq!(
            Ppla.compile(&elements),
            format!("{HEADER}1E050,50,0,3,2,0,10,B,\"12345678\"\nP1\n")
        );
    }

    #[test]
    fn test_code39_drops_the_e_discriminator() {
        let mut barcode = BarcodeElement::editor_default();
        barcode.symbology = Symbology::Code39;
        let code = Ppla.compile(&[Element::Barcode(barcode)]);
        // Code 39 lines start `1{rot}`, not `1E{rot}`.
        assert!(code.contains("\n1050,50,0,3,2,0,10,B,\"12345678\"\n"), "{code}");
    }

    #[test]
    fn test_text_height_divided_by_ten() {
        let code = Ppla.compile(&[Element::Text(TextElement {
            x: 10.0,
            y: 20.0,
            rotation: 0.0,
            content: "OLA".to_string(),
            font_size: 25,
            scale_x: 1.0,
            scale_y: 1.0,
        })]);
        // round(25 / 10) = 3 (round half away from zero)
        assert!(code.contains("A0,10,20,1,1,3,3,N,\"OLA\"\n"), "{code}");
    }

    #[test]
    fn test_qr_scale_floor_is_one() {
        let mut barcode = BarcodeElement::editor_default();
        barcode.symbology = Symbology::QrCode;
        barcode.scale_x = 0.1;
        let code = Ppla.compile(&[Element::Barcode(barcode)]);
        assert!(code.contains("b50,50,Q,s1,m2,e2,\"12345678\"\n"), "{code}");
    }

    #[test]
    fn test_box_is_four_segments() {
        let code = Ppla.compile(&[Element::Box(BoxElement::editor_default())]);
        let expected = format!(
            "{HEADER}X50,50,2,100\nX50,100,2,100\nY50,50,2,50\nY150,50,2,50\nP1\n"
        );
        assert_eq!(code, expected);
    }

    #[test]
    fn test_line_follows_dominant_axis() {
        let mut line = LineElement::editor_default();
        line.width = 80.0;
        line.height = 0.0;
        let code = Ppla.compile(&[Element::Line(line)]);
        assert!(code.contains("X50,50,2,80\n"), "{code}");

        let mut line = LineElement::editor_default();
        line.width = 0.0;
        line.height = 60.0;
        let code = Ppla.compile(&[Element::Line(line)]);
        assert!(code.contains("Y50,50,2,60\n"), "{code}");
    }

    #[test]
    fn test_no_preview_capability() {
        assert!(Ppla.preview_url("n\nP1\n").is_none());
    }
}
