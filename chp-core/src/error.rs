//! Error types for the chip decoder
//!
//! Every violation of the CHP/CSV layout is reported through [`FormatError`].
//! There is no recovery: the first error aborts the whole decode.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormatError>;

/// A malformed or unsupported chip file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Buffer sniffed (or requested) as CSV but not exactly the container size
    #[error("CSV container must be {expected} bytes, found {found}")]
    CsvLength { expected: usize, found: usize },

    /// Pin-direction code outside {0, 1, 2}
    #[error("invalid pin direction {value} at pin index {index}")]
    InvalidPinDirection { index: usize, value: u8 },

    /// Declared CHP length does not fit in the CHP region
    #[error("CHP length 0x{length:04X} exceeds the 0x{limit:04X}-byte CHP region")]
    ChpLengthOutOfRange { length: usize, limit: usize },

    /// Help text does not split into the expected number of NUL-terminated fields
    #[error("help text must have {expected} NUL-separated fields, found {found}")]
    HelpTextFields { expected: usize, found: usize },

    /// A help text line has the wrong width
    #[error("help text line {line} must be {expected} characters, found {found}")]
    HelpTextLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A pin address points outside the buffer
    #[error("address 0x{address:04X} out of range (limit 0x{limit:04X})")]
    AddressOutOfRange { address: usize, limit: usize },

    /// A pin byte is neither 0 nor 1
    #[error("invalid pin state 0x{value:02X} at 0x{address:04X}")]
    InvalidPinState { address: usize, value: u8 },

    /// Opcode byte not in the bytecode table
    #[error("unknown bytecode 0x{opcode:02X} at 0x{offset:04X}")]
    UnknownOpcode { opcode: u8, offset: usize },

    /// Nested chips go deeper than the decoder accepts
    #[error("chip nesting depth {depth} at 0x{offset:04X} exceeds the limit")]
    NestingTooDeep { depth: usize, offset: usize },

    /// Bytecode ended in the middle of an instruction
    #[error("unexpected end of bytecode at 0x{offset:04X}")]
    UnexpectedEof { offset: usize },
}
