//! CSV container
//!
//! ```text
//! 0x000..0x400  CHP region (only the first `chp_len` bytes are meaningful)
//! 0x400..0x408  pin directions, wire order (0 none, 1 in, 2 out)
//! 0x408..0x40A  chp_len, little-endian u16
//! 0x40A..0x535  help text: title(18) NUL, 8 x line(34) NUL
//! ```

use bytes::Bytes;
use tracing::debug;

use crate::address::{AddressSpace, PinTable};
use crate::chip::{Circuit, PIN_COUNT, PinDirection};
use crate::decoder::ChipDecoder;
use crate::error::{FormatError, Result};

/// Total size of a CSV container
pub const CSV_SIZE: usize = 1333;
/// Buffers at least this long are treated as CSV when sniffing
pub const SNIFF_THRESHOLD: usize = 1024;
/// Size of the CHP region at the start of a CSV container
pub const CHP_REGION: usize = 0x400;
pub const DIRECTIONS_OFFSET: usize = 0x400;
pub const CHP_LENGTH_OFFSET: usize = 0x408;
pub const HELP_OFFSET: usize = 0x40A;
/// Title width in characters, before trailing spaces are stripped
pub const HELP_TITLE_WIDTH: usize = 18;
/// Body line width in characters
pub const HELP_LINE_WIDTH: usize = 34;
/// Body lines after the title
pub const HELP_BODY_LINES: usize = 8;
/// NUL-separated fields: title, body lines, and the empty tail after the last NUL
pub const HELP_FIELDS: usize = HELP_BODY_LINES + 2;

/// Container format of an input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatHint {
    /// Choose by length: CSV from [`SNIFF_THRESHOLD`] bytes up, CHP below
    #[default]
    Auto,
    Chp,
    Csv,
}

impl FormatHint {
    /// Resolve `Auto` against a buffer length
    pub fn resolve(self, len: usize) -> Self {
        match self {
            Self::Auto if len >= SNIFF_THRESHOLD => Self::Csv,
            Self::Auto => Self::Chp,
            other => other,
        }
    }
}

/// Options for a top-level decode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub format: FormatHint,
    /// Name for the top-level chip (default `chip1`)
    pub name: Option<String>,
}

impl DecodeOptions {
    pub fn with_format(mut self, format: FormatHint) -> Self {
        self.format = format;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn decoder(&self) -> ChipDecoder {
        match &self.name {
            Some(name) => ChipDecoder::with_root_name(name.clone()),
            None => ChipDecoder::new(),
        }
    }
}

/// Decode a buffer with default options (format sniffed by length)
pub fn decode(bytes: &[u8]) -> Result<Circuit> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decode a buffer as CHP or CSV
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Circuit> {
    let buf = Bytes::copy_from_slice(bytes);
    match options.format.resolve(buf.len()) {
        FormatHint::Csv => decode_csv(&buf, options),
        _ => decode_chp(&buf, options),
    }
}

fn decode_chp(buf: &Bytes, options: &DecodeOptions) -> Result<Circuit> {
    let mut table = PinTable::new();
    let chip = {
        let mut space = AddressSpace::new(&mut table);
        options.decoder().decode_chp(buf, &mut space)?
    };
    Ok(Circuit {
        pins: table.into_arena(),
        chip,
    })
}

fn decode_csv(buf: &Bytes, options: &DecodeOptions) -> Result<Circuit> {
    if buf.len() != CSV_SIZE {
        return Err(FormatError::CsvLength {
            expected: CSV_SIZE,
            found: buf.len(),
        });
    }

    let directions = parse_directions(&buf[DIRECTIONS_OFFSET..DIRECTIONS_OFFSET + PIN_COUNT])?;

    let chp_len =
        u16::from_le_bytes([buf[CHP_LENGTH_OFFSET], buf[CHP_LENGTH_OFFSET + 1]]) as usize;
    if chp_len > CHP_REGION {
        return Err(FormatError::ChpLengthOutOfRange {
            length: chp_len,
            limit: CHP_REGION,
        });
    }

    let help = parse_help(&buf[HELP_OFFSET..])?;

    let mut circuit = decode_chp(&buf.slice(..chp_len), options)?;

    // Some shipped files declare more bytes than the bytecode uses
    if circuit.chip.consumed() < chp_len {
        debug!(
            declared = chp_len,
            consumed = circuit.chip.consumed(),
            "bytecode ends before declared CHP length"
        );
    }

    circuit.chip.directions = Some(directions);
    circuit.chip.help = Some(help);
    Ok(circuit)
}

fn parse_directions(codes: &[u8]) -> Result<[PinDirection; PIN_COUNT]> {
    let mut directions = [PinDirection::None; PIN_COUNT];
    for (index, &value) in codes.iter().enumerate().take(PIN_COUNT) {
        directions[index] = PinDirection::from_code(value)
            .ok_or(FormatError::InvalidPinDirection { index, value })?;
    }
    Ok(directions)
}

/// Split the help block into title + body lines, trailing spaces stripped
fn parse_help(text: &[u8]) -> Result<Vec<String>> {
    let fields: Vec<&[u8]> = text.split(|&b| b == 0).collect();
    if fields.len() != HELP_FIELDS {
        return Err(FormatError::HelpTextFields {
            expected: HELP_FIELDS,
            found: fields.len(),
        });
    }

    fields[..HELP_FIELDS - 1]
        .iter()
        .enumerate()
        .map(|(line, field)| {
            let expected = if line == 0 {
                HELP_TITLE_WIDTH
            } else {
                HELP_LINE_WIDTH
            };
            if field.len() != expected {
                return Err(FormatError::HelpTextLine {
                    line,
                    expected,
                    found: field.len(),
                });
            }
            // Single-byte charset: every byte is one character
            let line: String = field.iter().map(|&b| b as char).collect();
            Ok(line.trim_end_matches(' ').to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help_block() -> Vec<u8> {
        let mut text = Vec::new();
        text.extend(format!("{:<18}", "COUNTER").bytes());
        text.push(0);
        for i in 0..HELP_BODY_LINES {
            text.extend(format!("{:<34}", format!("line {}", i)).bytes());
            text.push(0);
        }
        text
    }

    #[test]
    fn test_layout_adds_up() {
        assert_eq!(HELP_OFFSET + help_block().len(), CSV_SIZE);
    }

    #[test]
    fn test_format_sniffing() {
        assert_eq!(FormatHint::Auto.resolve(10), FormatHint::Chp);
        assert_eq!(FormatHint::Auto.resolve(1023), FormatHint::Chp);
        assert_eq!(FormatHint::Auto.resolve(1024), FormatHint::Csv);
        assert_eq!(FormatHint::Chp.resolve(CSV_SIZE), FormatHint::Chp);
        assert_eq!(FormatHint::Csv.resolve(10), FormatHint::Csv);
    }

    #[test]
    fn test_parse_help() {
        let lines = parse_help(&help_block()).unwrap();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "COUNTER");
        assert_eq!(lines[8], "line 7");
    }

    #[test]
    fn test_help_field_count() {
        let mut text = help_block();
        text.push(0);
        let err = parse_help(&text).unwrap_err();
        assert_eq!(err, FormatError::HelpTextFields { expected: 10, found: 11 });
    }

    #[test]
    fn test_help_line_width() {
        let mut text = help_block();
        // Shift the first NUL one byte left: title 17, line 1 gets 35
        text.swap(17, 18);
        let err = parse_help(&text).unwrap_err();
        assert_eq!(
            err,
            FormatError::HelpTextLine { line: 0, expected: 18, found: 17 }
        );
    }

    #[test]
    fn test_help_body_line_width() {
        let mut text = help_block();
        // Line 3's NUL moves one byte right: line 3 gets 35, line 4 gets 33
        let nul = HELP_TITLE_WIDTH + 1 + 2 * (HELP_LINE_WIDTH + 1) + HELP_LINE_WIDTH;
        assert_eq!(text[nul], 0);
        text.swap(nul, nul + 1);
        let err = parse_help(&text).unwrap_err();
        assert_eq!(
            err,
            FormatError::HelpTextLine { line: 3, expected: 34, found: 35 }
        );

        let mut text = help_block();
        let nul = HELP_TITLE_WIDTH + 1 + 7 * (HELP_LINE_WIDTH + 1) + HELP_LINE_WIDTH;
        text.swap(nul, nul - 1);
        let err = parse_help(&text).unwrap_err();
        assert_eq!(
            err,
            FormatError::HelpTextLine { line: 8, expected: 34, found: 33 }
        );
    }

    #[test]
    fn test_parse_directions() {
        let dirs = parse_directions(&[1, 1, 0, 0, 2, 2, 0, 0]).unwrap();
        assert_eq!(dirs[0], PinDirection::In);
        assert_eq!(dirs[4], PinDirection::Out);

        let err = parse_directions(&[0, 0, 0, 3, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(err, FormatError::InvalidPinDirection { index: 3, value: 3 });
    }

    #[test]
    fn test_options_builder() {
        let opts = DecodeOptions::default()
            .with_format(FormatHint::Csv)
            .with_name("top");
        assert_eq!(opts.format, FormatHint::Csv);
        assert_eq!(opts.name.as_deref(), Some("top"));
    }
}
