//! # PPLA Line Decoder
//!
//! Parses the legacy fixed-width PPLA command format, line by line, into
//! decoded commands. Fields live at constant character offsets (zero-padded
//! base-10 integers), not behind delimiters, so this module is mostly
//! offset arithmetic over the line's characters.
//!
//! ## Line Layouts
//!
//! Drawable lines start with the language discriminator `1`. The second
//! character selects the command:
//!
//! | Second char | Command | Layout (0-indexed offsets) |
//! |-------------|---------|----------------------------|
//! | `E` | barcode | [2] rot, [3] symbology, [4] wide, [5] narrow, [6,9) height, [9,13) y, [13,17) x, rest data |
//! | `2` | text | after char 3: [0] rot, [1] font, [2] h-mult, [3] v-mult, [4,7) subtype, [7,11) y, [11,15) x, rest text |
//! | `3` | line | after char 3, prefix `1100`/`X11000`: [7,11) y, [11,15) x, [16,19) width, [19,22) height |
//! | `4` | box | after char 3: [0,4) y, [4,8) x, [9,12) width, [12,15) height, [15,18)/[18,21) thickness |
//!
//! Anything else — headers (`Q400,24`, `D8`, ...), counters, truncated
//! lines, fields that are not all digits — is skipped with a diagnostic.
//! Decoding never fails; an all-garbage input simply decodes to nothing.

use crate::label::{
    BarcodeElement, BoxElement, Element, LineElement, Symbology, TextElement,
};

/// Single-letter header/control commands that are never drawable elements.
const CONTROL_COMMANDS: [char; 11] = ['M', 'E', 'K', 'L', 'C', 'H', 'Q', 'N', 'S', 'D', 'P'];

/// Why a line was skipped during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Shorter than two characters after trimming.
    TooShort,
    /// Header/control command (`M`, `Q`, `P1`, ...), not a drawable.
    ControlCommand,
    /// First character is not the PPLA language discriminator `1`.
    NotPpla,
    /// Recognized command, but shorter than its minimum length.
    Truncated,
    /// Line command without the constant `1100`/`X11000` prefix.
    BadPrefix,
    /// A fixed-width numeric field failed to parse.
    BadField,
    /// Command class digit with no layout assigned.
    UnknownClass,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipReason::TooShort => "line too short",
            SkipReason::ControlCommand => "header/control command",
            SkipReason::NotPpla => "not a PPLA drawable command",
            SkipReason::Truncated => "command truncated",
            SkipReason::BadPrefix => "missing line-command prefix",
            SkipReason::BadField => "unparseable fixed-width field",
            SkipReason::UnknownClass => "unknown command class",
        };
        f.write_str(s)
    }
}

/// Skip diagnostic: which input line, and why.
///
/// Returned alongside the decoded commands — logged at most, never thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip {
    /// Zero-based index into the input's lines.
    pub line: usize,
    pub reason: SkipReason,
}

/// Decoded text command (classes 121/131/141/161).
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// Full subtype tag, e.g. `"121"`.
    pub sub_type: String,
    pub orientation: u8,
    /// Raw font code character.
    pub font: char,
    pub h_multiplier: u8,
    pub v_multiplier: u8,
    pub font_subtype: u16,
    pub x: i64,
    pub y: i64,
    /// Literal text; may itself contain digits.
    pub text: String,
}

/// Decoded barcode command (`1E...`).
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeCommand {
    pub orientation: u8,
    /// Raw symbology code character from the line.
    pub code: char,
    pub symbology: Symbology,
    pub wide_bar: u8,
    pub narrow_bar: u8,
    pub height: i64,
    pub x: i64,
    pub y: i64,
    pub data: String,
}

/// Decoded line command (class 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCommand {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Decoded box command (class 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxCommand {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub h_thickness: i64,
    pub v_thickness: i64,
}

/// A successfully decoded PPLA drawable command.
#[derive(Debug, Clone, PartialEq)]
pub enum PplaCommand {
    Text(TextCommand),
    Barcode(BarcodeCommand),
    Line(LineCommand),
    Box(BoxCommand),
}

impl PplaCommand {
    /// Legacy coordinates of this command (decimillimetres).
    pub fn position(&self) -> (i64, i64) {
        match self {
            PplaCommand::Text(c) => (c.x, c.y),
            PplaCommand::Barcode(c) => (c.x, c.y),
            PplaCommand::Line(c) => (c.x, c.y),
            PplaCommand::Box(c) => (c.x, c.y),
        }
    }

    /// Convert into a canonical [`Element`] for canvas rehydration.
    ///
    /// Orientation digits become right-angle rotations (digits above 3 wrap
    /// around). Multipliers of zero are lifted to 1 so the element stays
    /// visible on the canvas.
    pub fn to_element(&self) -> Element {
        match self {
            PplaCommand::Text(c) => Element::Text(TextElement {
                x: c.x as f64,
                y: c.y as f64,
                rotation: rotation_degrees(c.orientation),
                content: c.text.clone(),
                font_size: u32::from(c.font_subtype).max(1),
                scale_x: f64::from(c.h_multiplier.max(1)),
                scale_y: f64::from(c.v_multiplier.max(1)),
            }),
            PplaCommand::Barcode(c) => Element::Barcode(BarcodeElement {
                x: c.x as f64,
                y: c.y as f64,
                rotation: rotation_degrees(c.orientation),
                data: c.data.clone(),
                symbology: c.symbology,
                // Lowercase 'a' is the no-text Code 128 variant.
                show_text: c.code != 'a',
                height: c.height as f64,
                scale_x: 1.0,
                scale_y: 1.0,
            }),
            PplaCommand::Line(c) => Element::Line(LineElement {
                x: c.x as f64,
                y: c.y as f64,
                rotation: 0.0,
                width: c.width as f64,
                height: c.height as f64,
                stroke_width: 1,
                scale_x: 1.0,
                scale_y: 1.0,
            }),
            PplaCommand::Box(c) => Element::Box(BoxElement {
                x: c.x as f64,
                y: c.y as f64,
                rotation: 0.0,
                width: c.width as f64,
                height: c.height as f64,
                stroke_width: u32::try_from(c.h_thickness.max(1)).unwrap_or(1),
                scale_x: 1.0,
                scale_y: 1.0,
            }),
        }
    }
}

fn rotation_degrees(orientation: u8) -> f64 {
    f64::from(orientation % 4) * 90.0
}

/// Result of decoding a PPLA program.
#[derive(Debug, Clone, Default)]
pub struct Decode {
    /// Drawable commands, in input order.
    pub commands: Vec<PplaCommand>,
    /// Diagnostics for every non-blank line that decoded to nothing.
    pub skipped: Vec<Skip>,
}

impl Decode {
    /// Convert every decoded command into a canonical element.
    pub fn elements(&self) -> Vec<Element> {
        self.commands.iter().map(PplaCommand::to_element).collect()
    }
}

/// Decode raw PPLA text, line by line, in order.
///
/// Never fails: unrecognized or malformed lines end up in
/// [`Decode::skipped`] and the rest of the batch continues.
///
/// ```
/// use etiqueta::import::ppla;
///
/// let decode = ppla::decode("m\nK1504\n121100004100075101Texto exemplo\nQ\n");
/// assert_eq!(decode.commands.len(), 1);
/// ```
pub fn decode(text: &str) -> Decode {
    let mut decode = Decode::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(command) => decode.commands.push(command),
            Err(reason) => decode.skipped.push(Skip { line: index, reason }),
        }
    }

    decode
}

/// Decode one trimmed, non-empty line.
fn decode_line(line: &str) -> Result<PplaCommand, SkipReason> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < 2 {
        return Err(SkipReason::TooShort);
    }

    let first = chars[0].to_ascii_uppercase();
    if CONTROL_COMMANDS.contains(&first) && chars.len() < 5 {
        return Err(SkipReason::ControlCommand);
    }

    // Language family discriminator: everything drawable starts with `1`.
    if chars[0] != '1' {
        return Err(SkipReason::NotPpla);
    }

    if chars[1].eq_ignore_ascii_case(&'E') {
        return decode_barcode(&chars);
    }

    match chars[1].to_digit(10) {
        Some(2) => decode_text(&chars),
        Some(3) => decode_ruler(&chars),
        Some(4) => decode_box(&chars),
        _ => Err(SkipReason::UnknownClass),
    }
}

fn decode_barcode(chars: &[char]) -> Result<PplaCommand, SkipReason> {
    if chars.len() < 17 {
        return Err(SkipReason::Truncated);
    }

    let code = chars[3];
    Ok(PplaCommand::Barcode(BarcodeCommand {
        orientation: digit(chars, 2)?,
        code,
        symbology: map_symbology(code),
        wide_bar: digit(chars, 4)?,
        narrow_bar: digit(chars, 5)?,
        height: field(chars, 6, 9)?,
        y: field(chars, 9, 13)?,
        x: field(chars, 13, 17)?,
        data: chars[17..].iter().collect(),
    }))
}

fn decode_text(chars: &[char]) -> Result<PplaCommand, SkipReason> {
    if chars.len() < 16 {
        return Err(SkipReason::Truncated);
    }

    // Sub-class digit completes the 121/131/141/161 tag.
    let sub_class = digit(chars, 2)?;
    let data = &chars[3..];
    Ok(PplaCommand::Text(TextCommand {
        sub_type: format!("12{sub_class}"),
        orientation: digit(data, 0)?,
        font: data[1],
        h_multiplier: digit(data, 2)?,
        v_multiplier: digit(data, 3)?,
        font_subtype: field(data, 4, 7)? as u16,
        y: field(data, 7, 11)?,
        x: field(data, 11, 15)?,
        text: data[15..].iter().collect(),
    }))
}

fn decode_ruler(chars: &[char]) -> Result<PplaCommand, SkipReason> {
    if chars.len() < 20 {
        return Err(SkipReason::Truncated);
    }

    let data = &chars[3..];
    let prefix: String = data.iter().take(6).collect();
    if !prefix.starts_with("1100") && !prefix.starts_with("X11000") {
        return Err(SkipReason::BadPrefix);
    }

    Ok(PplaCommand::Line(LineCommand {
        y: field(data, 7, 11)?,
        x: field(data, 11, 15)?,
        width: field(data, 16, 19)?,
        height: field(data, 19, 22)?,
    }))
}

fn decode_box(chars: &[char]) -> Result<PplaCommand, SkipReason> {
    if chars.len() < 20 {
        return Err(SkipReason::Truncated);
    }

    let data = &chars[3..];
    Ok(PplaCommand::Box(BoxCommand {
        y: field(data, 0, 4)?,
        x: field(data, 4, 8)?,
        width: field(data, 9, 12)?,
        height: field(data, 12, 15)?,
        h_thickness: field(data, 15, 18)?,
        v_thickness: field(data, 18, 21)?,
    }))
}

/// Map a PPLA symbology code character to a canonical symbology.
/// Unknown codes default to Code 128, the most common in the wild.
fn map_symbology(code: char) -> Symbology {
    match code {
        '0' => Symbology::Code39,
        '3' => Symbology::Ean13,
        '4' => Symbology::Ean8,
        'Q' => Symbology::QrCode,
        // '1', '2', 'E' (extended), 'A' (with text), 'a' (without text)
        // and anything unrecognized.
        _ => Symbology::Code128,
    }
}

/// Single decimal digit at a character offset.
fn digit(chars: &[char], at: usize) -> Result<u8, SkipReason> {
    chars
        .get(at)
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
        .ok_or(SkipReason::BadField)
}

/// Fixed-width, zero-padded decimal field over `[start, end)`.
///
/// The whole span must be present and all digits; a short or mixed span
/// fails, which discards the line.
fn field(chars: &[char], start: usize, end: usize) -> Result<i64, SkipReason> {
    if end > chars.len() {
        return Err(SkipReason::BadField);
    }
    let span = &chars[start..end];
    if !span.iter().all(|c| c.is_ascii_digit()) {
        return Err(SkipReason::BadField);
    }
    span.iter()
        .collect::<String>()
        .parse()
        .map_err(|_| SkipReason::BadField)
}
