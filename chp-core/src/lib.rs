//! # CHP - chip netlist decoder
//!
//! Decodes the bytecode the game stores for player-built chips (gates,
//! flip-flops, nested chips and the trailing propagation lists) into a tree
//! of [`Chip`]s whose parts share [`Pin`]s through one [`PinArena`].
//!
//! ## Formats
//!
//! - **CHP**: 8 pin bytes followed by bytecode, no header
//! - **CSV**: fixed 1333-byte container wrapping a CHP region, pin
//!   directions, the declared CHP length and a 9-line help card
//!
//! ## Pipeline
//!
//! ```text
//! bytes
//!     ↓ FormatHint (length sniffing)
//! CSV container  →  directions, help, chp_len
//!     ↓
//! CHP decoder (recursive for nested chips, one shared PinTable)
//!     ↓
//! Circuit { pins: PinArena, chip: Chip }
//! ```
//!
//! ## Example
//!
//! ```
//! use chp_core::{ChipBuilder, Part, decode};
//!
//! let mut chip = ChipBuilder::new([0, 0, 0, 0, 0, 0, 0, 0]);
//! chip.and(1, 1, &[0x0004]).end(&[]);
//!
//! let circuit = decode(&chip.build()).unwrap();
//! assert!(matches!(circuit.chip.parts[0], Part::And(_)));
//! ```

pub mod address;
pub mod builder;
pub mod chip;
pub mod container;
pub mod decoder;
pub mod error;
pub mod opcode;
pub mod part;
pub mod pin;
pub mod reader;

pub use address::{AddressSpace, PinTable};
pub use builder::{ChipBuilder, csv_container};
pub use chip::{Chip, ChipStats, Circuit, PIN_COUNT, PinDirection, WIRE_ORDER, physical_pin};
pub use container::{CSV_SIZE, DecodeOptions, FormatHint, SNIFF_THRESHOLD, decode, decode_with};
pub use decoder::{ChipDecoder, MAX_NESTING_DEPTH};
pub use error::{FormatError, Result};
pub use opcode::Opcode;
pub use part::{FlipFlop, Gate, Node, NotGate, Part};
pub use pin::{Pin, PinArena, PinId};
pub use reader::ByteReader;
