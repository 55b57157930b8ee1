//! Barcode rasterization for on-canvas previews.
//!
//! 1D symbologies encode through the barcoders crate into a bar/space
//! pattern, QR codes through the qrcode crate into a module matrix. The
//! human-readable line under 1D bars is drawn with the Spleen 12x24 bitmap
//! font.
//!
//! Output is a grayscale [`image::GrayImage`]: 0 = bar (black),
//! 255 = space (white).

use barcoders::sym::code128::Code128;
use barcoders::sym::code39::Code39;
use barcoders::sym::ean13::EAN13;
use barcoders::sym::ean8::EAN8;
use image::{GrayImage, Luma};
use spleen_font::{FONT_12X24, PSF2Font};

use crate::error::EtiquetaError;
use crate::label::{BarcodeElement, Symbology};

const BLACK: Luma<u8> = Luma([0]);

/// Glyph cell of the Spleen 12x24 font used for the HRI line.
const CHAR_W: u32 = 12;
const CHAR_H: u32 = 24;
/// Gap between the bars and the HRI line.
const TEXT_GAP: u32 = 4;

/// Encode data as a Code 39 bar pattern.
/// Returns a Vec<bool> where true = bar (black), false = space (white).
pub fn encode_code39(data: &str) -> Result<Vec<bool>, EtiquetaError> {
    let barcode = Code39::new(data).map_err(|e| EtiquetaError::Barcode(e.to_string()))?;
    Ok(barcode.encode().iter().map(|&m| m == 1).collect())
}

/// Encode data as a Code 128 bar pattern.
///
/// Code 128 requires a character-set prefix; Set B covers the widest range
/// of printable characters, matching what the label printers default to.
pub fn encode_code128(data: &str) -> Result<Vec<bool>, EtiquetaError> {
    let prefixed = format!("\u{0181}{data}");
    let barcode = Code128::new(&prefixed).map_err(|e| EtiquetaError::Barcode(e.to_string()))?;
    Ok(barcode.encode().iter().map(|&m| m == 1).collect())
}

/// Encode data as an EAN-13 bar pattern.
pub fn encode_ean13(data: &str) -> Result<Vec<bool>, EtiquetaError> {
    let barcode = EAN13::new(data).map_err(|e| EtiquetaError::Barcode(e.to_string()))?;
    Ok(barcode.encode().iter().map(|&m| m == 1).collect())
}

/// Encode data as an EAN-8 bar pattern.
pub fn encode_ean8(data: &str) -> Result<Vec<bool>, EtiquetaError> {
    let barcode = EAN8::new(data).map_err(|e| EtiquetaError::Barcode(e.to_string()))?;
    Ok(barcode.encode().iter().map(|&m| m == 1).collect())
}

/// Render a barcode element to a grayscale preview image.
///
/// Fails with [`EtiquetaError::Barcode`] when the data is invalid for the
/// symbology (wrong check digit, characters outside the set, ...). The
/// editing surface treats a failure as "keep the previous image".
pub fn render(element: &BarcodeElement) -> Result<GrayImage, EtiquetaError> {
    match element.symbology {
        Symbology::QrCode => render_qr(element),
        Symbology::Code128 => render_1d(element, encode_code128(&element.data)?),
        Symbology::Code39 => render_1d(element, encode_code39(&element.data)?),
        Symbology::Ean13 => render_1d(element, encode_ean13(&element.data)?),
        Symbology::Ean8 => render_1d(element, encode_ean8(&element.data)?),
    }
}

fn render_1d(element: &BarcodeElement, bars: Vec<bool>) -> Result<GrayImage, EtiquetaError> {
    if bars.is_empty() {
        return Err(EtiquetaError::Barcode("empty bar pattern".to_string()));
    }

    let module = ((element.scale_x * 2.0).round() as i64).max(1) as u32;
    let bar_height = ((element.height * element.scale_y).round() as i64).max(1) as u32;
    let width = bars.len() as u32 * module;
    let text_band = if element.show_text { TEXT_GAP + CHAR_H } else { 0 };

    let mut image = GrayImage::from_pixel(width, bar_height + text_band, Luma([255]));

    for (i, &bar) in bars.iter().enumerate() {
        if !bar {
            continue;
        }
        for dx in 0..module {
            let x = i as u32 * module + dx;
            for y in 0..bar_height {
                image.put_pixel(x, y, BLACK);
            }
        }
    }

    if element.show_text {
        draw_text(&mut image, &element.data, bar_height + TEXT_GAP);
    }

    Ok(image)
}

fn render_qr(element: &BarcodeElement) -> Result<GrayImage, EtiquetaError> {
    let code =
        qrcode::QrCode::new(&element.data).map_err(|e| EtiquetaError::Barcode(e.to_string()))?;

    let module = ((element.scale_x * 3.0).round() as i64).max(1) as u32;
    let modules = code.width() as u32;
    // Two-module quiet zone on every side.
    let quiet = 2;
    let size = (modules + 2 * quiet) * module;

    let mut image = GrayImage::from_pixel(size, size, Luma([255]));
    let colors = code.to_colors();

    for (index, color) in colors.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let mx = (index as u32 % modules + quiet) * module;
        let my = (index as u32 / modules + quiet) * module;
        for dx in 0..module {
            for dy in 0..module {
                image.put_pixel(mx + dx, my + dy, BLACK);
            }
        }
    }

    Ok(image)
}

/// Draw a centered human-readable line with the Spleen 12x24 font.
fn draw_text(image: &mut GrayImage, text: &str, top: u32) {
    // Embedded PSF2 data, parse cannot fail.
    let mut font = PSF2Font::new(FONT_12X24).unwrap();

    let text_width = text.chars().count() as u32 * CHAR_W;
    let start_x = image.width().saturating_sub(text_width) / 2;

    for (i, ch) in text.chars().enumerate() {
        let origin_x = start_x + i as u32 * CHAR_W;
        if origin_x + CHAR_W > image.width() {
            break;
        }
        let utf8 = ch.to_string();
        let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) else {
            continue;
        };
        for (row_y, row) in glyph.enumerate() {
            for (col_x, on) in row.enumerate() {
                let x = origin_x + col_x as u32;
                let y = top + row_y as u32;
                if on && x < image.width() && y < image.height() {
                    image.put_pixel(x, y, BLACK);
                }
            }
        }
    }
}
