// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::DraftSlot;
use crate::error::PersistenceError;
use crate::form_state::FormState;
use grievance_domain::FormData;
use tracing::{debug, warn};

/// The outcome of reading the draft slot.
///
/// Corrupt drafts are tagged separately from absent ones so the caller can
/// decide to delete the unreadable slot, but both are treated as "no draft"
/// toward the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftLoad {
    /// A well-formed draft was stored.
    Loaded(FormState),
    /// The slot is empty.
    Absent,
    /// The slot holds something that does not parse as a draft, or the
    /// backing storage could not be read.
    Corrupt,
}

/// Persists, retrieves, and clears the single draft snapshot.
///
/// The store is the slot's only writer; it serializes copies of the wizard's
/// state and has no mutation rights over the live form.
#[derive(Debug)]
pub struct DraftStore<S: DraftSlot> {
    slot: S,
}

impl<S: DraftSlot> DraftStore<S> {
    /// Creates a store over the given slot backend.
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// The underlying slot, for direct inspection.
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Saves a snapshot of `(step, data)` to the slot.
    ///
    /// A snapshot of the empty initial form at step 0 is not worth keeping:
    /// instead of persisting a no-op draft, any existing draft is deleted.
    /// Saving is idempotent: identical arguments produce an identical
    /// stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the slot write fails.
    pub fn save(&mut self, step: u8, data: &FormData) -> Result<(), PersistenceError> {
        if step == 0 && data.is_initial() {
            debug!("draft is the empty initial form; deleting instead of saving");
            return self.slot.delete();
        }

        let state: FormState = FormState::new(step, data.clone());
        let serialized: String = serde_json::to_string(&state)
            .map_err(|err| PersistenceError::Serialization(err.to_string()))?;
        self.slot.write(&serialized)?;
        debug!(step, "draft saved");
        Ok(())
    }

    /// Reads the slot and deserializes the draft.
    ///
    /// Malformed JSON, schema drift, and out-of-range steps are logged and
    /// reported as [`DraftLoad::Corrupt`], never raised to the user.
    #[must_use]
    pub fn load(&self) -> DraftLoad {
        let raw: String = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return DraftLoad::Absent,
            Err(err) => {
                warn!(%err, "failed to read draft slot");
                return DraftLoad::Corrupt;
            }
        };

        match serde_json::from_str::<FormState>(&raw) {
            Ok(state) if state.current_step <= 3 => DraftLoad::Loaded(state),
            Ok(state) => {
                warn!(step = state.current_step, "draft step out of range");
                DraftLoad::Corrupt
            }
            Err(err) => {
                warn!(%err, "failed to parse draft");
                DraftLoad::Corrupt
            }
        }
    }

    /// Deletes the slot unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot delete fails.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.slot.delete()?;
        debug!("draft cleared");
        Ok(())
    }
}
