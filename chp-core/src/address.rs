//! Address space: absolute byte offset -> pin
//!
//! One [`PinTable`] exists per top-level decode. Nested chips get an
//! [`AddressSpace`] view with a larger base over the same table, so an
//! address reached from two chips resolves to the same [`PinId`].

use std::collections::HashMap;

use crate::error::{FormatError, Result};
use crate::pin::{Pin, PinArena, PinId};

/// Shared mapping from absolute offset to pin
#[derive(Debug, Default)]
pub struct PinTable {
    arena: PinArena,
    by_address: HashMap<usize, PinId>,
}

impl PinTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin already mapped at an absolute address
    pub fn resolve(&self, address: usize) -> Option<PinId> {
        self.by_address.get(&address).copied()
    }

    pub fn arena(&self) -> &PinArena {
        &self.arena
    }

    pub fn into_arena(self) -> PinArena {
        self.arena
    }
}

/// A view over a [`PinTable`] whose offsets are relative to `base`
#[derive(Debug)]
pub struct AddressSpace<'t> {
    base: usize,
    table: &'t mut PinTable,
}

impl<'t> AddressSpace<'t> {
    /// Root view (base 0)
    pub fn new(table: &'t mut PinTable) -> Self {
        Self { base: 0, table }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// View for a nested region starting `delta` bytes into this one
    pub fn offset_view(&mut self, delta: usize) -> AddressSpace<'_> {
        AddressSpace {
            base: self.base + delta,
            table: &mut *self.table,
        }
    }

    /// Resolve `offset` (relative to this view) to a pin.
    ///
    /// An already-mapped address returns its pin, taking `name_hint` if the
    /// pin is still unnamed. Otherwise the state byte is read from `buffer`
    /// (which starts at this view's base) and a new pin is created.
    pub fn lookup_pin(
        &mut self,
        buffer: &[u8],
        offset: usize,
        name_hint: Option<&str>,
    ) -> Result<PinId> {
        let address = self.base + offset;

        if let Some(id) = self.table.resolve(address) {
            if let Some(name) = name_hint {
                self.table.arena[id].name_if_unset(name);
            }
            return Ok(id);
        }

        let value = *buffer.get(offset).ok_or(FormatError::AddressOutOfRange {
            address,
            limit: self.base + buffer.len(),
        })?;
        let pin = Pin::from_byte(address, value, name_hint.map(str::to_string))?;
        let id = self.table.arena.push(pin);
        self.table.by_address.insert(address, id);
        Ok(id)
    }

    pub fn pin(&self, id: PinId) -> &Pin {
        &self.table.arena[id]
    }
}
