pub mod api;
pub mod cli;
pub mod config;
mod form_controller;
mod requester;

pub use form_controller::{FormController, FormState, SubmitOutcome};
pub use requester::AssessmentRequester;
