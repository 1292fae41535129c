// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::DraftSlot;
use crate::error::PersistenceError;

/// An in-memory draft slot, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Creates a slot pre-seeded with a stored value.
    #[must_use]
    pub const fn seeded(value: String) -> Self {
        Self { value: Some(value) }
    }
}

impl DraftSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), PersistenceError> {
        self.value = Some(value.to_string());
        Ok(())
    }

    fn delete(&mut self) -> Result<(), PersistenceError> {
        self.value = None;
        Ok(())
    }
}
