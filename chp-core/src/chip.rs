//! Chips and decoded circuits

use bytes::Bytes;
use serde::{Serialize, Serializer};

use crate::part::Part;
use crate::pin::{Pin, PinArena, PinId};

/// Number of pins on every chip
pub const PIN_COUNT: usize = 8;

/// Physical pin number for each wire position.
///
/// Positions 0-3 are pins 1-4; positions 4-7 run back down the other side
/// of the package (8, 7, 6, 5).
pub const WIRE_ORDER: [u8; PIN_COUNT] = [1, 2, 3, 4, 8, 7, 6, 5];

/// Physical pin number at a wire position
pub fn physical_pin(position: usize) -> Option<u8> {
    WIRE_ORDER.get(position).copied()
}

/// Pin direction from the CSV container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    None,
    In,
    Out,
}

impl PinDirection {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::In),
            2 => Some(Self::Out),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::In => 1,
            Self::Out => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// One chip: its pins, its parts in evaluation order, and the bytes it spans
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chip {
    pub name: String,
    /// Pins in wire order (see [`WIRE_ORDER`])
    pub pins: [PinId; PIN_COUNT],
    /// Only present for chips read from a CSV container
    pub directions: Option<[PinDirection; PIN_COUNT]>,
    pub parts: Vec<Part>,
    /// Title followed by the body lines, trailing spaces stripped
    pub help: Option<Vec<String>>,
    /// Exact bytes consumed by this chip, ending with the final list terminator
    #[serde(serialize_with = "serialize_hex")]
    pub data: Bytes,
}

impl Chip {
    /// Bytes consumed, i.e. how far a parent decoder advances past this chip
    pub fn consumed(&self) -> usize {
        self.data.len()
    }

    /// Pin by physical number (1-8)
    pub fn physical(&self, number: u8) -> Option<PinId> {
        WIRE_ORDER
            .iter()
            .position(|&n| n == number)
            .map(|pos| self.pins[pos])
    }

    /// Direction of the pin at a wire position, if directions are known
    pub fn direction(&self, position: usize) -> Option<PinDirection> {
        self.directions.and_then(|dirs| dirs.get(position).copied())
    }

    /// Nested chips, direct children only
    pub fn children(&self) -> impl Iterator<Item = &Chip> {
        self.parts.iter().filter_map(Part::as_chip)
    }

    /// Part counts for this chip and everything nested inside it
    pub fn stats(&self) -> ChipStats {
        let mut stats = ChipStats::default();
        stats.collect(self);
        stats
    }
}

/// Part counts over a chip tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChipStats {
    pub and: usize,
    pub or: usize,
    pub xor: usize,
    pub not: usize,
    pub flip_flops: usize,
    pub nodes: usize,
    /// Chips including the root
    pub chips: usize,
    pub bytes: usize,
}

impl ChipStats {
    fn collect(&mut self, chip: &Chip) {
        self.chips += 1;
        if self.chips == 1 {
            self.bytes = chip.consumed();
        }
        for part in &chip.parts {
            match part {
                Part::And(_) => self.and += 1,
                Part::Or(_) => self.or += 1,
                Part::Xor(_) => self.xor += 1,
                Part::Not(_) => self.not += 1,
                Part::FlipFlop(_) => self.flip_flops += 1,
                Part::Node(_) => self.nodes += 1,
                Part::Chip(nested) => self.collect(nested),
            }
        }
    }

    pub fn gates(&self) -> usize {
        self.and + self.or + self.xor + self.not
    }
}

/// Result of a decode: the chip tree plus the pins it refers to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circuit {
    pub pins: PinArena,
    pub chip: Chip,
}

impl Circuit {
    pub fn pin(&self, id: PinId) -> &Pin {
        &self.pins[id]
    }

    pub fn pin_mut(&mut self, id: PinId) -> &mut Pin {
        &mut self.pins[id]
    }
}

fn serialize_hex<S: Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_order() {
        assert_eq!(physical_pin(0), Some(1));
        assert_eq!(physical_pin(3), Some(4));
        assert_eq!(physical_pin(4), Some(8));
        assert_eq!(physical_pin(7), Some(5));
        assert_eq!(physical_pin(8), None);
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!(PinDirection::from_code(0), Some(PinDirection::None));
        assert_eq!(PinDirection::from_code(2), Some(PinDirection::Out));
        assert_eq!(PinDirection::from_code(3), None);
        assert_eq!(PinDirection::In.code(), 1);
        assert_eq!(PinDirection::Out.label(), "out");
    }

    #[test]
    fn test_physical_lookup() {
        let chip = Chip {
            name: "chip1".into(),
            pins: [0, 1, 2, 3, 4, 5, 6, 7].map(PinId),
            directions: None,
            parts: Vec::new(),
            help: None,
            data: Bytes::from_static(&[0; 10]),
        };
        assert_eq!(chip.physical(1), Some(PinId(0)));
        assert_eq!(chip.physical(8), Some(PinId(4)));
        assert_eq!(chip.physical(5), Some(PinId(7)));
        assert_eq!(chip.physical(9), None);
        assert_eq!(chip.direction(0), None);
        assert_eq!(chip.stats().chips, 1);
        assert_eq!(chip.stats().bytes, 10);
    }
}
