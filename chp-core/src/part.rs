//! Decoded circuit parts
//!
//! Parts keep the bytecode order of their chip; that order is the order in
//! which the game evaluates them each tick.

use serde::Serialize;

use crate::chip::Chip;
use crate::opcode::Opcode;
use crate::pin::PinId;

/// Two-input gate (AND, OR, XOR)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gate {
    pub inputs: [PinId; 2],
    /// Fan-out targets
    pub outputs: Vec<PinId>,
}

/// Inverter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotGate {
    pub input: PinId,
    pub outputs: Vec<PinId>,
}

/// Flip-flop with one output list per half
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlipFlop {
    pub inputs: [PinId; 2],
    /// Internal state bits, shown as `FF<s0><s1>`
    pub state: [PinId; 2],
    pub outputs: [Vec<PinId>; 2],
}

/// Propagation entry from the chip's trailing `End` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub source: PinId,
    pub destinations: Vec<PinId>,
}

/// Any decoded circuit element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Part {
    And(Gate),
    Or(Gate),
    Xor(Gate),
    Not(NotGate),
    FlipFlop(FlipFlop),
    Node(Node),
    Chip(Box<Chip>),
}

impl Part {
    /// Operation name used in listings
    pub fn mnemonic(&self) -> &str {
        match self {
            Self::And(_) => Opcode::And.mnemonic(),
            Self::Or(_) => Opcode::Or.mnemonic(),
            Self::Xor(_) => Opcode::Xor.mnemonic(),
            Self::Not(_) => Opcode::Not.mnemonic(),
            Self::FlipFlop(_) => Opcode::FlipFlop.mnemonic(),
            Self::Node(_) => "Node",
            Self::Chip(chip) => &chip.name,
        }
    }

    /// Input-side pins (gate inputs, flip-flop inputs, node source)
    pub fn inputs(&self) -> Vec<PinId> {
        match self {
            Self::And(g) | Self::Or(g) | Self::Xor(g) => g.inputs.to_vec(),
            Self::Not(n) => vec![n.input],
            Self::FlipFlop(ff) => ff.inputs.to_vec(),
            Self::Node(node) => vec![node.source],
            Self::Chip(_) => Vec::new(),
        }
    }

    /// Output-side pins in listing order
    pub fn outputs(&self) -> Vec<PinId> {
        match self {
            Self::And(g) | Self::Or(g) | Self::Xor(g) => g.outputs.clone(),
            Self::Not(n) => n.outputs.clone(),
            Self::FlipFlop(ff) => ff.outputs.concat(),
            Self::Node(node) => node.destinations.clone(),
            Self::Chip(_) => Vec::new(),
        }
    }

    pub fn as_chip(&self) -> Option<&Chip> {
        match self {
            Self::Chip(chip) => Some(chip),
            _ => None,
        }
    }
}
