//! Bytecode builder
//!
//! Assembles CHP bytecode and CSV containers. Addresses passed to the output
//! lists are relative to the start of the chip being built; the inline
//! operands of the instruction starting at `position()` live at
//! `position() + 1`, `position() + 2`, ...

use crate::chip::{PIN_COUNT, PinDirection};
use crate::container::{
    CHP_LENGTH_OFFSET, CHP_REGION, CSV_SIZE, DIRECTIONS_OFFSET, HELP_BODY_LINES, HELP_LINE_WIDTH,
    HELP_OFFSET, HELP_TITLE_WIDTH,
};
use crate::opcode::{LIST_END, Opcode};

/// Builder for one chip's bytecode
#[derive(Debug, Clone)]
pub struct ChipBuilder {
    bytes: Vec<u8>,
}

impl ChipBuilder {
    /// Start a chip with its 8 pin states in wire order
    pub fn new(pins: [u8; PIN_COUNT]) -> Self {
        Self {
            bytes: pins.to_vec(),
        }
    }

    /// Offset of the next instruction
    pub fn position(&self) -> u16 {
        self.bytes.len() as u16
    }

    pub fn and(&mut self, a: u8, b: u8, outputs: &[u16]) -> &mut Self {
        self.gate(Opcode::And, a, b, outputs)
    }

    pub fn or(&mut self, a: u8, b: u8, outputs: &[u16]) -> &mut Self {
        self.gate(Opcode::Or, a, b, outputs)
    }

    pub fn xor(&mut self, a: u8, b: u8, outputs: &[u16]) -> &mut Self {
        self.gate(Opcode::Xor, a, b, outputs)
    }

    fn gate(&mut self, opcode: Opcode, a: u8, b: u8, outputs: &[u16]) -> &mut Self {
        self.bytes.extend([opcode as u8, a, b]);
        self.list(outputs)
    }

    pub fn not(&mut self, a: u8, outputs: &[u16]) -> &mut Self {
        self.bytes.extend([Opcode::Not as u8, a]);
        self.list(outputs)
    }

    pub fn flip_flop(
        &mut self,
        inputs: [u8; 2],
        state: [u8; 2],
        out0: &[u16],
        out1: &[u16],
    ) -> &mut Self {
        self.bytes.push(Opcode::FlipFlop as u8);
        self.bytes.extend(inputs);
        self.bytes.extend(state);
        self.list(out0).list(out1)
    }

    /// Embed a complete chip (as returned by [`ChipBuilder::build`])
    pub fn nested(&mut self, chip: &[u8]) -> &mut Self {
        self.bytes.push(Opcode::Chip as u8);
        self.bytes.extend_from_slice(chip);
        self
    }

    /// Propagation lists (source first) and the end-of-chip marker
    pub fn end(&mut self, lists: &[&[u16]]) -> &mut Self {
        self.bytes.push(Opcode::End as u8);
        for list in lists {
            self.list(list);
        }
        self.bytes.push(LIST_END);
        self
    }

    /// Append raw bytes
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    fn list(&mut self, addresses: &[u16]) -> &mut Self {
        for address in addresses {
            self.bytes.extend(address.to_be_bytes());
        }
        self.bytes.push(LIST_END);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Wrap CHP bytes in a CSV container.
///
/// `help[0]` is the title, the next eight entries are body lines; missing
/// lines are blank and long ones are cut to width. CHP bytes beyond the
/// region are dropped.
pub fn csv_container(chp: &[u8], directions: [PinDirection; PIN_COUNT], help: &[&str]) -> Vec<u8> {
    let mut out = vec![0u8; CSV_SIZE];
    let chp_len = chp.len().min(CHP_REGION);
    out[..chp_len].copy_from_slice(&chp[..chp_len]);

    for (i, dir) in directions.iter().enumerate() {
        out[DIRECTIONS_OFFSET + i] = dir.code();
    }
    out[CHP_LENGTH_OFFSET..CHP_LENGTH_OFFSET + 2].copy_from_slice(&(chp_len as u16).to_le_bytes());

    let mut cursor = HELP_OFFSET;
    for line in 0..=HELP_BODY_LINES {
        let width = if line == 0 {
            HELP_TITLE_WIDTH
        } else {
            HELP_LINE_WIDTH
        };
        let text = help.get(line).copied().unwrap_or("");
        let padded = format!("{:<width$.width$}", text, width = width);
        out[cursor..cursor + width].copy_from_slice(&padded.as_bytes()[..width]);
        cursor += width + 1;
    }
    out
}
