//! Chip bytecode opcodes

/// Terminates an address list (never a top-level opcode)
pub const LIST_END: u8 = 0xFF;

/// Opcodes of the chip bytecode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// 2-input AND gate
    And = 0x01,
    /// 2-input OR gate
    Or = 0x02,
    /// 2-input XOR gate
    Xor = 0x03,
    /// Inverter
    Not = 0x04,
    /// RS flip-flop with two outputs
    FlipFlop = 0x05,
    /// Nested chip, terminated by its own `End`
    Chip = 0x06,
    /// Propagation lists, then end of chip
    End = 0x07,
}

impl Opcode {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Self::And),
            0x02 => Some(Self::Or),
            0x03 => Some(Self::Xor),
            0x04 => Some(Self::Not),
            0x05 => Some(Self::FlipFlop),
            0x06 => Some(Self::Chip),
            0x07 => Some(Self::End),
            _ => None,
        }
    }

    /// Listing mnemonic
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::FlipFlop => "FF",
            Self::Chip => "CHIP",
            Self::End => "END",
        }
    }

    /// Lower-case tag used in generated pin names (`chip1_and0_in1`)
    pub fn tag(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::FlipFlop => "ff",
            Self::Chip => "chip",
            Self::End => "node",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_roundtrip() {
        for byte in 0x01..=0x07u8 {
            let op = Opcode::from_byte(byte).unwrap();
            assert_eq!(op as u8, byte);
        }
    }

    #[test]
    fn test_unknown_bytes() {
        assert_eq!(Opcode::from_byte(0x00), None);
        assert_eq!(Opcode::from_byte(0x08), None);
        assert_eq!(Opcode::from_byte(0x09), None);
        assert_eq!(Opcode::from_byte(LIST_END), None);
    }

    #[test]
    fn test_mnemonics() {
        assert_eq!(Opcode::And.mnemonic(), "AND");
        assert_eq!(Opcode::FlipFlop.mnemonic(), "FF");
        assert_eq!(Opcode::Xor.tag(), "xor");
    }
}
