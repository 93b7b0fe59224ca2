//! Form controller: owns the profile being edited and the submission state.
//!
//! State machine:
//! `Idle --submit--> Loading --ok--> ShowingResult --reset--> Idle`
//! `Loading --err--> ShowingError --submit--> Loading`
//!
//! A submission made while another is outstanding is ignored; the busy flag is
//! the only guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::app::AssessmentRequester;
use crate::domain::{Assessment, AssessmentError, Preset, ProfileField, ProfileInput};
use crate::ports::TextGenerator;

/// Observable controller state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    ShowingResult(Assessment),
    ShowingError(AssessmentError),
}

/// What happened to a call to [`FormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission ran to completion; the new state is attached.
    Resolved(FormState),
    /// Another submission was outstanding, nothing was sent.
    Ignored,
}

#[derive(Debug, Default)]
struct Inner {
    profile: ProfileInput,
    state: FormState,
}

pub struct FormController<G: TextGenerator> {
    requester: AssessmentRequester<G>,
    inner: Mutex<Inner>,
    busy: AtomicBool,
}

impl<G: TextGenerator> FormController<G> {
    /// Create a controller with an empty profile in the `Idle` state.
    pub fn new(requester: AssessmentRequester<G>) -> Self {
        Self { requester, inner: Mutex::new(Inner::default()), busy: AtomicBool::new(false) }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Writes are single assignments, so poisoned data is still a valid state.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_field(&self, field: ProfileField, value: impl Into<String>) {
        self.lock().profile.set(field, value);
    }

    /// Replace the whole profile with the preset's values.
    pub fn load_preset(&self, preset: &Preset) {
        self.lock().profile = preset.profile();
    }

    pub fn profile(&self) -> ProfileInput {
        self.lock().profile.clone()
    }

    pub fn state(&self) -> FormState {
        self.lock().state.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Submit the current profile.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without calling the generator when a
    /// submission is already outstanding.
    pub fn submit(&self) -> SubmitOutcome {
        if self.busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
            tracing::debug!("submission ignored, another one is outstanding");
            return SubmitOutcome::Ignored;
        }

        let snapshot = {
            let mut inner = self.lock();
            inner.state = FormState::Loading;
            inner.profile.clone()
        };

        let state = match self.requester.request(&snapshot) {
            Ok(assessment) => FormState::ShowingResult(assessment),
            Err(err) => FormState::ShowingError(err),
        };

        self.lock().state = state.clone();
        self.busy.store(false, Ordering::Release);
        SubmitOutcome::Resolved(state)
    }

    /// Discard the shown result or error and return to `Idle`.
    ///
    /// The profile is kept. Does nothing while a submission is outstanding.
    pub fn reset(&self) {
        if self.is_busy() {
            return;
        }
        let mut inner = self.lock();
        if matches!(inner.state, FormState::ShowingResult(_) | FormState::ShowingError(_)) {
            inner.state = FormState::Idle;
        }
    }
}
