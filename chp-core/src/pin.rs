//! Pins and the pin arena
//!
//! A pin is one electrical node with a 1-bit state. Pins are stored once in a
//! [`PinArena`] and referenced from parts by [`PinId`], so two parts that
//! touch the same address share the same pin.

use serde::Serialize;
use std::fmt;

use crate::error::{FormatError, Result};

/// Index of a pin inside a [`PinArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PinId(pub u32);

impl PinId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single electrical node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pin {
    /// Absolute byte offset the pin was read from
    pub address: usize,
    /// Logic level at decode time
    pub state: bool,
    /// Display name, back-filled by the part that owns the pin
    pub name: Option<String>,
}

impl Pin {
    /// Build a pin from its state byte, which must be 0 or 1
    pub fn from_byte(address: usize, value: u8, name: Option<String>) -> Result<Self> {
        let state = match value {
            0 => false,
            1 => true,
            _ => return Err(FormatError::InvalidPinState { address, value }),
        };
        Ok(Self { address, state, name })
    }

    /// State as 0 or 1
    pub fn bit(&self) -> u8 {
        self.state as u8
    }

    /// Set the name unless one is already assigned
    pub fn name_if_unset(&mut self, name: &str) {
        if self.name.is_none() {
            self.name = Some(name.to_string());
        }
    }
}

impl fmt::Display for Pin {
    /// `name<state>`, or `@ADDR<state>` for pins no part has claimed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}<{}>", name, self.bit()),
            None => write!(f, "@{:04X}<{}>", self.address, self.bit()),
        }
    }
}

/// Flat storage for every pin created during one decode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PinArena {
    pins: Vec<Pin>,
}

impl PinArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pin: Pin) -> PinId {
        let id = PinId(self.pins.len() as u32);
        self.pins.push(pin);
        id
    }

    pub fn get(&self, id: PinId) -> Option<&Pin> {
        self.pins.get(id.index())
    }

    pub fn get_mut(&mut self, id: PinId) -> Option<&mut Pin> {
        self.pins.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PinId, &Pin)> {
        self.pins
            .iter()
            .enumerate()
            .map(|(i, pin)| (PinId(i as u32), pin))
    }
}

impl std::ops::Index<PinId> for PinArena {
    type Output = Pin;

    fn index(&self, id: PinId) -> &Pin {
        &self.pins[id.index()]
    }
}

impl std::ops::IndexMut<PinId> for PinArena {
    fn index_mut(&mut self, id: PinId) -> &mut Pin {
        &mut self.pins[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_from_byte() {
        let pin = Pin::from_byte(3, 1, None).unwrap();
        assert!(pin.state);
        assert_eq!(pin.bit(), 1);

        let err = Pin::from_byte(7, 2, None).unwrap_err();
        assert_eq!(err, FormatError::InvalidPinState { address: 7, value: 2 });
    }

    #[test]
    fn test_pin_display() {
        let named = Pin::from_byte(2, 0, Some("chip1_pin3".into())).unwrap();
        assert_eq!(named.to_string(), "chip1_pin3<0>");

        let bare = Pin::from_byte(0x1A, 1, None).unwrap();
        assert_eq!(bare.to_string(), "@001A<1>");
    }

    #[test]
    fn test_name_if_unset_keeps_first_name() {
        let mut pin = Pin::from_byte(0, 0, None).unwrap();
        pin.name_if_unset("first");
        pin.name_if_unset("second");
        assert_eq!(pin.name.as_deref(), Some("first"));
    }

    #[test]
    fn test_arena_ids_are_sequential() {
        let mut arena = PinArena::new();
        let a = arena.push(Pin::from_byte(0, 0, None).unwrap());
        let b = arena.push(Pin::from_byte(1, 1, None).unwrap());
        assert_eq!(a, PinId(0));
        assert_eq!(b, PinId(1));
        assert_eq!(arena.len(), 2);
        assert!(arena[b].state);
    }
}
