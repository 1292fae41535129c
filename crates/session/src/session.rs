// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::error::SessionError;
use crate::location::{location_query, step_from_query};
use crate::notice::Notice;
use crate::upload::{IncomingFile, UploadRejection, encode_all, screen};
use grievance_domain::{DocumentFile, Field, FileKind, FormErrors, FormUpdate, MAX_FILES};
use grievance_form::{Command, CoreError, Step, SubmitOutcome, TransitionResult, WizardState, apply};
use grievance_gateway::{SubmissionGateway, SubmitResult};
use grievance_persistence::{DraftLoad, DraftSlot, DraftStore, FormState};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Whether a found draft still awaits the user's restore-or-discard choice.
#[derive(Debug)]
enum DraftGate {
    /// A draft was found on startup and no decision has been made yet.
    /// The form rejects every other interaction until it is resolved.
    Pending(FormState),
    /// No draft, or the decision has been made.
    Resolved,
}

/// One form-filling session: the wizard state machine wired to its draft
/// store, submission gateway, and clock.
///
/// The session owns the [`WizardState`] exclusively and is the single place
/// where commands, persistence, and gateway traffic meet. Renderers read
/// state through [`Session::state`] and feed intent through the command
/// methods.
#[derive(Debug)]
pub struct Session<S: DraftSlot, G: SubmissionGateway, C: Clock> {
    state: WizardState,
    gate: DraftGate,
    store: DraftStore<S>,
    gateway: G,
    clock: C,
    location: String,
    notice: Option<Notice>,
    dirty: bool,
}

impl<S: DraftSlot, G: SubmissionGateway, C: Clock> Session<S, G, C> {
    /// Opens a session over the given draft slot, gateway, and clock.
    ///
    /// The initial step comes from `initial_query` (`step=N`); anything
    /// missing, malformed, or out of range lands on step 0. The draft slot
    /// is read once: a stale empty draft is deleted silently, a corrupt one
    /// is deleted and logged, and a real draft parks the session behind the
    /// restore-or-discard gate.
    pub fn new(slot: S, gateway: G, clock: C, initial_query: Option<&str>) -> Self {
        let step: Step = step_from_query(initial_query);
        let mut store: DraftStore<S> = DraftStore::new(slot);

        let gate: DraftGate = match store.load() {
            DraftLoad::Loaded(draft) if draft.is_stale_empty() => {
                debug!("deleting stale empty draft");
                if let Err(err) = store.clear() {
                    warn!(%err, "failed to delete stale empty draft");
                }
                DraftGate::Resolved
            }
            DraftLoad::Loaded(draft) => {
                info!(step = draft.current_step, "saved draft found");
                DraftGate::Pending(draft)
            }
            DraftLoad::Absent => DraftGate::Resolved,
            DraftLoad::Corrupt => {
                if let Err(err) = store.clear() {
                    warn!(%err, "failed to delete corrupt draft");
                }
                DraftGate::Resolved
            }
        };

        Self {
            location: location_query(step),
            state: WizardState {
                step,
                ..WizardState::new()
            },
            gate,
            store,
            gateway,
            clock,
            notice: None,
            dirty: false,
        }
    }

    /// The current wizard state, for rendering.
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// The published location query for the displayed step.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The draft awaiting a restore-or-discard decision, if any.
    #[must_use]
    pub const fn pending_draft(&self) -> Option<&FormState> {
        match &self.gate {
            DraftGate::Pending(draft) => Some(draft),
            DraftGate::Resolved => None,
        }
    }

    /// Takes the pending notification, leaving none behind.
    pub const fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// The draft store, for direct inspection.
    #[must_use]
    pub const fn store(&self) -> &DraftStore<S> {
        &self.store
    }

    /// Resumes the session from the found draft: its data and its saved step.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoDraftDecisionPending`] if no draft decision
    /// is awaited.
    pub fn restore_draft(&mut self) -> Result<(), SessionError> {
        let DraftGate::Pending(draft) = std::mem::replace(&mut self.gate, DraftGate::Resolved)
        else {
            return Err(SessionError::NoDraftDecisionPending);
        };

        let step: Step = Step::from_index(draft.current_step).unwrap_or(Step::Personal);
        self.state = WizardState::resumed(step, draft.data);
        self.location = location_query(step);
        self.dirty = false;
        info!(%step, "draft restored");
        Ok(())
    }

    /// Discards the found draft and starts from the empty form at step 0.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoDraftDecisionPending`] if no draft decision
    /// is awaited.
    pub fn discard_and_start_new(&mut self) -> Result<(), SessionError> {
        if self.pending_draft().is_none() {
            return Err(SessionError::NoDraftDecisionPending);
        }

        self.gate = DraftGate::Resolved;
        if let Err(err) = self.store.clear() {
            warn!(%err, "failed to delete discarded draft");
        }
        self.state = WizardState::new();
        self.location = location_query(Step::Personal);
        self.dirty = false;
        info!("draft discarded");
        Ok(())
    }

    /// Merges a partial edit into the form.
    ///
    /// # Errors
    ///
    /// Returns an error if a draft decision is pending or a submission is in
    /// flight.
    pub fn edit(&mut self, update: FormUpdate) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.dispatch(Command::Edit { update })?;
        self.dirty = true;
        Ok(())
    }

    /// Tries to advance to the next step, running the current step's rules.
    ///
    /// A validation failure is not an error: the step stays put and the
    /// messages land in [`WizardState::errors`].
    ///
    /// # Errors
    ///
    /// Returns an error if a draft decision is pending, a submission is in
    /// flight, or the session is already at the review step.
    pub fn next(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        if self.dispatch(Command::Next)? {
            self.dirty = true;
        }
        Ok(())
    }

    /// Goes back one step; a no-op at step 0.
    ///
    /// # Errors
    ///
    /// Returns an error if a draft decision is pending or a submission is in
    /// flight.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        if self.dispatch(Command::Back)? {
            self.dirty = true;
        }
        Ok(())
    }

    /// Jumps from the review step to a section being edited.
    ///
    /// # Errors
    ///
    /// Returns an error if a draft decision is pending, a submission is in
    /// flight, or the session is not at the review step.
    pub fn jump_to(&mut self, target: Step) -> Result<(), SessionError> {
        self.ensure_active()?;
        if self.dispatch(Command::JumpTo { target })? {
            self.dirty = true;
        }
        Ok(())
    }

    /// Screens, encodes, and attaches a batch of picked files.
    ///
    /// The whole batch is rejected if it would push the total over the file
    /// limit; otherwise each file is screened for size and format, survivors
    /// are base64-encoded concurrently, and the form gains them in one
    /// atomic edit. Returns the per-file rejections, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a draft decision is pending or a submission is in
    /// flight.
    pub async fn attach_files(
        &mut self,
        files: Vec<IncomingFile>,
    ) -> Result<Vec<UploadRejection>, SessionError> {
        self.ensure_active()?;
        if self.state.submitting {
            return Err(SessionError::Rejected(CoreError::SubmissionInFlight));
        }

        if self.state.data.files.len() + files.len() > MAX_FILES {
            return Ok(files
                .into_iter()
                .map(|file| UploadRejection {
                    name: file.name,
                    reason: "Maximum 5 files allowed in total.".to_string(),
                })
                .collect());
        }

        let mut rejections: Vec<UploadRejection> = Vec::new();
        let mut screened: Vec<(IncomingFile, FileKind)> = Vec::new();
        for file in files {
            match screen(&file) {
                Ok(kind) => screened.push((file, kind)),
                Err(rejection) => rejections.push(rejection),
            }
        }

        let mut attached: Vec<DocumentFile> = self.state.data.files.clone();
        for outcome in encode_all(screened).await {
            match outcome {
                Ok(document) => attached.push(document),
                Err(rejection) => rejections.push(rejection),
            }
        }

        if attached.len() > self.state.data.files.len() {
            self.dispatch(Command::Edit {
                update: FormUpdate {
                    files: Some(attached),
                    ..FormUpdate::default()
                },
            })?;
            self.dirty = true;
        }
        Ok(rejections)
    }

    /// Detaches the file at `index`; out-of-range indexes are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a draft decision is pending or a submission is in
    /// flight.
    pub fn remove_file(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_active()?;
        if index >= self.state.data.files.len() {
            return Ok(());
        }

        let mut files: Vec<DocumentFile> = self.state.data.files.clone();
        files.remove(index);
        self.dispatch(Command::Edit {
            update: FormUpdate {
                files: Some(files),
                ..FormUpdate::default()
            },
        })?;
        self.dirty = true;
        Ok(())
    }

    /// Saves a draft if anything changed since the last save.
    ///
    /// Meant to be driven on a debounce timer. Skipped while a draft
    /// decision is pending, while submitting, and on the review step. Save
    /// failures are logged and swallowed; the form keeps working.
    pub fn autosave_tick(&mut self) {
        if self.pending_draft().is_some()
            || self.state.submitting
            || self.state.step == Step::Review
            || !self.dirty
        {
            return;
        }
        self.persist();
    }

    /// Saves a draft immediately, regardless of the dirty flag.
    ///
    /// Skipped while a draft decision is pending or a submission is in
    /// flight.
    pub fn save_draft(&mut self) {
        if self.pending_draft().is_some() || self.state.submitting {
            return;
        }
        self.persist();
    }

    /// Runs the full submission: combined validation, the gateway call, and
    /// the outcome transition.
    ///
    /// A combined-validation failure is not an error: the messages land in
    /// [`WizardState::errors`] and no gateway call is made. On acceptance
    /// the draft is deleted, the form resets to the empty step 0, and a
    /// success notice with the reference id is raised. On rejection or
    /// transport failure the form stays at review with an error notice.
    ///
    /// # Errors
    ///
    /// Returns an error if a draft decision is pending, a submission is
    /// already in flight, or the session is not at the review step.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.dispatch(Command::BeginSubmit)?;
        if !self.state.submitting {
            debug!(errors = self.state.errors.len(), "submission blocked by validation");
            return Ok(());
        }

        match self.gateway.submit(&self.state.data).await {
            Ok(reply) if reply.success => {
                let message: String = success_message(&reply);
                self.dispatch(Command::CompleteSubmit {
                    outcome: SubmitOutcome::Accepted,
                })?;
                if let Err(err) = self.store.clear() {
                    warn!(%err, "failed to delete draft after acceptance");
                }
                self.dirty = false;
                self.notice = Some(Notice::Success(message));
                info!(reference_id = ?reply.reference_id, "submission accepted");
            }
            Ok(reply) => {
                let errors: FormErrors = fold_field_errors(reply.errors.unwrap_or_default());
                self.dispatch(Command::CompleteSubmit {
                    outcome: SubmitOutcome::Rejected { errors },
                })?;
                self.notice = Some(Notice::Error(reply.message));
            }
            Err(err) => {
                warn!(%err, "submission transport failure");
                self.dispatch(Command::CompleteSubmit {
                    outcome: SubmitOutcome::Rejected {
                        errors: FormErrors::new(),
                    },
                })?;
                self.notice = Some(Notice::Error(
                    "Submission failed. Please try again.".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.pending_draft().is_some() {
            return Err(SessionError::DraftDecisionPending);
        }
        Ok(())
    }

    /// Applies a command and republishes the location if the step changed.
    /// Returns whether the step changed.
    fn dispatch(&mut self, command: Command) -> Result<bool, CoreError> {
        let TransitionResult {
            new_state,
            step_changed,
        } = apply(&self.state, command, self.clock.today())?;
        self.state = new_state;
        if step_changed {
            self.location = location_query(self.state.step);
            debug!(location = %self.location, "location updated");
        }
        Ok(step_changed)
    }

    fn persist(&mut self) {
        match self.store.save(self.state.step.index(), &self.state.data) {
            Ok(()) => self.dirty = false,
            Err(err) => warn!(%err, "failed to save draft"),
        }
    }
}

/// Folds the gateway's per-field message lists into the single-message map
/// the renderer draws: first message per field, unknown field names dropped.
fn fold_field_errors(raw: BTreeMap<String, Vec<String>>) -> FormErrors {
    let mut errors: FormErrors = FormErrors::new();
    for (name, messages) in raw {
        let Ok(field) = Field::from_str(&name) else {
            warn!(field = %name, "ignoring unknown field in gateway reply");
            continue;
        };
        if let Some(first) = messages.first() {
            errors.set(field, first.clone());
        }
    }
    errors
}

fn success_message(reply: &SubmitResult) -> String {
    reply.reference_id.as_ref().map_or_else(
        || reply.message.clone(),
        |id| format!("{} Reference ID: {id}", reply.message),
    )
}
