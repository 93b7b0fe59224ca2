use crate::ports::{GenerationFailure, GenerationRequest, TextGenerator};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Records every request and answers with a canned result.
///
/// A gated fake blocks inside `generate` until the test releases it, which keeps
/// a submission outstanding for as long as the test needs.
#[derive(Clone)]
pub struct FakeTextGenerator {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub response: Result<String, GenerationFailure>,
    gate: Option<Gate>,
}

#[derive(Clone)]
struct Gate {
    entered: Sender<()>,
    release: Arc<Mutex<Receiver<()>>>,
}

/// Test-side handle for a gated fake.
pub struct GateHandle {
    entered: Receiver<()>,
    release: Sender<()>,
}

impl GateHandle {
    /// Block until the generator has been entered.
    pub fn wait_entered(&self) {
        self.entered.recv().unwrap();
    }

    /// Let one blocked call return.
    pub fn release(&self) {
        self.release.send(()).unwrap();
    }
}

impl FakeTextGenerator {
    pub fn responding(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Ok(text.into()), gate: None }
    }

    pub fn failing(failure: GenerationFailure) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Err(failure), gate: None }
    }

    pub fn gated(text: impl Into<String>) -> (Self, GateHandle) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let fake = Self {
            gate: Some(Gate { entered: entered_tx, release: Arc::new(Mutex::new(release_rx)) }),
            ..Self::responding(text)
        };
        (fake, GateHandle { entered: entered_rx, release: release_tx })
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl TextGenerator for FakeTextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.entered.send(()).unwrap();
            gate.release.lock().unwrap().recv().unwrap();
        }
        self.response.clone()
    }
}
