//! # ZPL Backend
//!
//! Code generator for Zebra ZPL II (Zebra Programming Language).
//!
//! ## Program Shape
//!
//! ```text
//! ^XA            start format
//! ^MNY           continuous media, web sensing
//! ...            one fragment per element, in list order
//! ^XZ            end format
//! ```
//!
//! Every fragment starts with a `^FO x,y` field origin. Rotation is the
//! ZPL letter form of the shared orientation bucket (N/R/I/B).
//!
//! ZPL is the only backend here with a rendering service: previews go
//! through the Labelary HTTP API with the program percent-encoded into the
//! request path.

use super::{Compiler, LanguageInfo};
use crate::label::Element;

/// Labelary rendering endpoint: 8 dots/mm, 4x6" label, first page.
const LABELARY_ENDPOINT: &str = "http://api.labelary.com/v1/printers/8dpmm/labels/4x6/0";

const INFO: LanguageInfo = LanguageInfo {
    id: "ZPL",
    name: "Zebra ZPL",
    description: "Zebra Programming Language",
    manufacturer: "Zebra Technologies",
    file_extension: "zpl",
};

/// Zebra ZPL II code generator.
pub struct Zpl;

impl Compiler for Zpl {
    fn info(&self) -> &LanguageInfo {
        &INFO
    }

    fn compile(&self, elements: &[Element]) -> String {
        let mut code = String::from("^XA\n^MNY\n");

        for element in elements {
            let (x, y) = element.position();
            let o = element.orientation();

            match element {
                Element::Text(text) => {
                    let h = (text.font_size as f64 * text.scale_y).round() as i64;
                    code.push_str(&format!(
                        "^FO{x},{y}^A0{o},{h},{h}^FD{content}^FS\n",
                        o = o.zpl_token(),
                        content = text.content,
                    ));
                }
                Element::Barcode(barcode) => {
                    use crate::label::Symbology::*;
                    let h = (barcode.height * barcode.scale_y).round() as i64;
                    let data = &barcode.data;
                    let o = o.zpl_token();
                    match barcode.symbology {
                        QrCode => {
                            // Magnification factor instead of a height.
                            let scale = ((barcode.scale_x * 3.0).round() as i64).max(2);
                            code.push_str(&format!(
                                "^FO{x},{y}^BQ{o},2,{scale}^FDQA,{data}^FS\n"
                            ));
                        }
                        Code128 => code.push_str(&format!(
                            "^FO{x},{y}^BY2^BC{o},{h},Y,N,N^FD{data}^FS\n"
                        )),
                        Ean13 => code.push_str(&format!(
                            "^FO{x},{y}^BY2^BE{o},{h},Y,N^FD{data}^FS\n"
                        )),
                        Code39 => code.push_str(&format!(
                            "^FO{x},{y}^BY2^B3{o},N,{h},Y,N^FD{data}^FS\n"
                        )),
                        // No EAN-8 command variant in this generator.
                        Ean8 => {}
                    }
                }
                Element::Box(boxed) => {
                    let w = (boxed.width * boxed.scale_x).round() as i64;
                    let h = (boxed.height * boxed.scale_y).round() as i64;
                    let b = boxed.stroke_width;
                    // The printed footprint rotates with the element.
                    if o.swaps_box_axes() {
                        code.push_str(&format!("^FO{x},{y}^GB{h},{w},{b}^FS\n"));
                    } else {
                        code.push_str(&format!("^FO{x},{y}^GB{w},{h},{b}^FS\n"));
                    }
                }
                Element::Line(line) => {
                    let w = (line.width * line.scale_x).round() as i64;
                    let h = (line.height * line.scale_y).round() as i64;
                    let b = line.stroke_width;
                    code.push_str(&format!("^FO{x},{y}^GD{w},{h},{b}^FS\n"));
                }
            }
        }

        code.push_str("^XZ");
        code
    }

    fn preview_url(&self, code: &str) -> Option<String> {
        let mut url = reqwest::Url::parse(LABELARY_ENDPOINT).ok()?;
        url.path_segments_mut().ok()?.push(code);
        Some(url.into())
    }
}
