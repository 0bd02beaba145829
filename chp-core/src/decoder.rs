//! CHP bytecode decoder
//!
//! Layout of one chip, offsets relative to the chip start:
//!
//! ```text
//! [0..8)   pin state bytes, wire order (1 2 3 4 8 7 6 5)
//! [8..)    bytecode:
//!   01 a b LIST           AND
//!   02 a b LIST           OR
//!   03 a b LIST           XOR
//!   04 a LIST             NOT
//!   05 a b q0 q1 LIST LIST  flip-flop
//!   06 <chip>             nested chip, same layout, own End
//!   07 LIST* FF           propagation lists, then end of chip
//! LIST = (hi lo)* FF      big-endian addresses relative to the chip start
//! ```
//!
//! Gate operands (`a`, `b`, `q0`, `q1`) are positional: the operand byte is
//! itself the pin, and its offset is the pin address that other parts'
//! address lists point at.

use bytes::Bytes;
use tracing::{debug, trace};

use crate::address::AddressSpace;
use crate::chip::{Chip, PIN_COUNT, WIRE_ORDER};
use crate::error::{FormatError, Result};
use crate::opcode::{LIST_END, Opcode};
use crate::part::{FlipFlop, Gate, Node, NotGate, Part};
use crate::pin::PinId;
use crate::reader::ByteReader;

/// Deepest chip nesting accepted below the root.
///
/// A nested level costs at least 11 bytes, so no CHP region of a CSV
/// container (0x400 bytes) can reach this. Raw CHP input has no length
/// limit and is cut off here instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent decoder for CHP bytecode.
///
/// Holds the chip name generator; one decoder is used per top-level decode so
/// nested chips are numbered in the order they appear.
#[derive(Debug)]
pub struct ChipDecoder {
    next_chip: usize,
    root_name: Option<String>,
    depth: usize,
}

impl ChipDecoder {
    pub fn new() -> Self {
        Self {
            next_chip: 1,
            root_name: None,
            depth: 0,
        }
    }

    /// Use `name` for the first chip decoded instead of `chip1`
    pub fn with_root_name(name: impl Into<String>) -> Self {
        Self {
            next_chip: 1,
            root_name: Some(name.into()),
            depth: 0,
        }
    }

    fn next_name(&mut self) -> String {
        let number = self.next_chip;
        self.next_chip += 1;
        self.root_name
            .take()
            .unwrap_or_else(|| format!("chip{}", number))
    }

    /// Decode one chip starting at the beginning of `buf`.
    ///
    /// `space` must be based at the absolute offset of `buf[0]`. The returned
    /// chip's `data` is the prefix of `buf` it consumed.
    pub fn decode_chp(&mut self, buf: &Bytes, space: &mut AddressSpace<'_>) -> Result<Chip> {
        let name = self.next_name();
        debug!(chip = %name, base = space.base(), "decoding chip");

        let mut pins = [PinId(0); PIN_COUNT];
        for (position, number) in WIRE_ORDER.iter().enumerate() {
            let hint = format!("{}_pin{}", name, number);
            pins[position] = space.lookup_pin(buf, position, Some(&hint))?;
        }

        let mut reader = ByteReader::at(buf, PIN_COUNT, space.base());
        let mut parts = Vec::new();

        loop {
            let at = reader.position();
            let byte = reader.read_u8()?;
            let opcode = Opcode::from_byte(byte).ok_or(FormatError::UnknownOpcode {
                opcode: byte,
                offset: space.base() + at,
            })?;
            trace!(chip = %name, offset = space.base() + at, op = opcode.mnemonic(), "opcode");

            let index = parts.len();
            let hint = |suffix: &str| format!("{}_{}{}_{}", name, opcode.tag(), index, suffix);

            match opcode {
                Opcode::And => parts.push(Part::And(gate(&mut reader, buf, space, &hint)?)),
                Opcode::Or => parts.push(Part::Or(gate(&mut reader, buf, space, &hint)?)),
                Opcode::Xor => parts.push(Part::Xor(gate(&mut reader, buf, space, &hint)?)),
                Opcode::Not => {
                    let input = inline_pin(&mut reader, buf, space, &hint("in0"))?;
                    let outputs = address_list(&mut reader, buf, space)?;
                    parts.push(Part::Not(NotGate { input, outputs }));
                }
                Opcode::FlipFlop => {
                    let in0 = inline_pin(&mut reader, buf, space, &hint("in0"))?;
                    let in1 = inline_pin(&mut reader, buf, space, &hint("in1"))?;
                    let q0 = inline_pin(&mut reader, buf, space, &hint("q0"))?;
                    let q1 = inline_pin(&mut reader, buf, space, &hint("q1"))?;
                    let out0 = address_list(&mut reader, buf, space)?;
                    let out1 = address_list(&mut reader, buf, space)?;
                    parts.push(Part::FlipFlop(FlipFlop {
                        inputs: [in0, in1],
                        state: [q0, q1],
                        outputs: [out0, out1],
                    }));
                }
                Opcode::Chip => {
                    if self.depth >= MAX_NESTING_DEPTH {
                        return Err(FormatError::NestingTooDeep {
                            depth: self.depth + 1,
                            offset: space.base() + at,
                        });
                    }
                    let start = reader.position();
                    self.depth += 1;
                    let nested = {
                        let mut view = space.offset_view(start);
                        self.decode_chp(&buf.slice(start..), &mut view)
                    };
                    self.depth -= 1;
                    let nested = nested?;
                    reader.skip(nested.consumed())?;
                    parts.push(Part::Chip(Box::new(nested)));
                }
                Opcode::End => {
                    loop {
                        let mut list = address_list(&mut reader, buf, space)?;
                        if list.is_empty() {
                            break;
                        }
                        let source = list.remove(0);
                        parts.push(Part::Node(Node {
                            source,
                            destinations: list,
                        }));
                    }
                    break;
                }
            }
        }

        let consumed = reader.position();
        debug!(chip = %name, consumed, parts = parts.len(), "chip decoded");

        Ok(Chip {
            name,
            pins,
            directions: None,
            parts,
            help: None,
            data: buf.slice(..consumed),
        })
    }
}

impl Default for ChipDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Two positional inputs and one output list
fn gate(
    reader: &mut ByteReader<'_>,
    buf: &[u8],
    space: &mut AddressSpace<'_>,
    hint: impl Fn(&str) -> String,
) -> Result<Gate> {
    let a = inline_pin(reader, buf, space, &hint("in0"))?;
    let b = inline_pin(reader, buf, space, &hint("in1"))?;
    let outputs = address_list(reader, buf, space)?;
    Ok(Gate {
        inputs: [a, b],
        outputs,
    })
}

/// Positional operand: the byte under the cursor is the pin
fn inline_pin(
    reader: &mut ByteReader<'_>,
    buf: &[u8],
    space: &mut AddressSpace<'_>,
    name: &str,
) -> Result<PinId> {
    let offset = reader.position();
    reader.read_u8()?;
    space.lookup_pin(buf, offset, Some(name))
}

/// `FF`-terminated list of big-endian addresses
fn address_list(
    reader: &mut ByteReader<'_>,
    buf: &[u8],
    space: &mut AddressSpace<'_>,
) -> Result<Vec<PinId>> {
    let mut pins = Vec::new();
    loop {
        if reader.peek_u8()? == LIST_END {
            reader.read_u8()?;
            return Ok(pins);
        }
        let address = reader.read_u16_be()? as usize;
        pins.push(space.lookup_pin(buf, address, None)?);
    }
}
