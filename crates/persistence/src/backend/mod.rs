// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot backends: where the single serialized draft actually lives.

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::PersistenceError;

/// A single named persistent slot holding one serialized draft.
///
/// The analog of one localStorage key: read the whole value, overwrite the
/// whole value, or delete it. The draft store is the slot's only writer.
pub trait DraftSlot {
    /// Reads the stored value, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Overwrites the slot with a new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn write(&mut self, value: &str) -> Result<(), PersistenceError>;

    /// Deletes the slot. Deleting an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be modified.
    fn delete(&mut self) -> Result<(), PersistenceError>;
}
