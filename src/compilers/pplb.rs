//! # PPLB Backend
//!
//! Code generator for Argox PPLB (Printer Programming Language B), the
//! newer Argox dialect. Every command line is prefixed with the `<STX>`
//! marker, kept literal in the emitted text the way label editors exchange
//! PPLB programs (the spooler substitutes the real 0x02 byte).
//!
//! ## Program Shape
//!
//! ```text
//! <STX>n        clear buffer
//! <STX>m        metric mode
//! <STX>M0800    label width
//! <STX>L0400    label height
//! <STX>D0       normal density
//! ...           one fragment per element, in list order
//! <STX>E        execute
//! ```
//!
//! Coordinates are written as `V{y}H{x}` fields rather than a comma pair.
//! Like PPLA there is no rectangle primitive; boxes become four `1X`/`1Y`
//! segments.

use super::{Compiler, LanguageInfo};
use crate::label::Element;

/// Literal start-of-text marker prefixed to every command line.
const STX: &str = "<STX>";

const INFO: LanguageInfo = LanguageInfo {
    id: "PPLB",
    name: "Argox PPLB",
    description: "Printer Programming Language B (Advanced)",
    manufacturer: "Argox",
    file_extension: "pplb",
};

/// Argox PPLB code generator.
pub struct Pplb;

impl Compiler for Pplb {
    fn info(&self) -> &LanguageInfo {
        &INFO
    }

    fn compile(&self, elements: &[Element]) -> String {
        let mut code = format!("{STX}n\n{STX}m\n{STX}M0800\n{STX}L0400\n{STX}D0\n");

        for element in elements {
            let (x, y) = element.position();
            let r = element.orientation().digit();

            match element {
                Element::Text(text) => {
                    let h = (text.font_size as f64 * text.scale_y / 10.0).round() as i64;
                    code.push_str(&format!(
                        "{STX}1911A{r}V{y}H{x}M{h}L{h}S{content}\n",
                        content = text.content,
                    ));
                }
                Element::Barcode(barcode) => {
                    use crate::label::Symbology::*;
                    let h = (barcode.height * barcode.scale_y).round() as i64;
                    let data = &barcode.data;
                    match barcode.symbology {
                        // QR ignores rotation in this dialect.
                        QrCode => code.push_str(&format!(
                            "{STX}1bV{y}H{x}o0M2,{data}\n"
                        )),
                        Code128 => code.push_str(&format!(
                            "{STX}1E{r}V{y}H{x}P3W2Bf{h}d2,{data}\n"
                        )),
                        Code39 => code.push_str(&format!(
                            "{STX}1{r}V{y}H{x}P3W2B0{h}d2,{data}\n"
                        )),
                        Ean13 => code.push_str(&format!(
                            "{STX}1E{r}V{y}H{x}P3W2Be{h}d2,{data}\n"
                        )),
                        Ean8 => {}
                    }
                }
                Element::Box(boxed) => {
                    let w = (boxed.width * boxed.scale_x).round() as i64;
                    let h = (boxed.height * boxed.scale_y).round() as i64;
                    let b = boxed.stroke_width;
                    code.push_str(&format!("{STX}1XH{x}V{y}T{b}L{w}\n"));
                    code.push_str(&format!("{STX}1XH{x}V{by}T{b}L{w}\n", by = y + h));
                    code.push_str(&format!("{STX}1YH{x}V{y}T{b}L{h}\n"));
                    code.push_str(&format!("{STX}1YH{rx}V{y}T{b}L{h}\n", rx = x + w));
                }
                Element::Line(line) => {
                    let w = (line.width * line.scale_x).round() as i64;
                    let h = (line.height * line.scale_y).round() as i64;
                    let b = line.stroke_width;
                    if w >= h {
                        code.push_str(&format!("{STX}1XH{x}V{y}T{b}L{w}\n"));
                    } else {
                        code.push_str(&format!("{STX}1YH{x}V{y}T{b}L{h}\n"));
                    }
                }
            }
        }

        code.push_str(&format!("{STX}E\n"));
        code
    }
}
