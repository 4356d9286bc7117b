//! Submission state machine and input capture for one pipeline page.
//!
//! The controller is a pure `(state, event) → state` core: views feed it
//! submit attempts and request completions and read back the phase to render.
//! Each outgoing request carries a monotonically increasing sequence number;
//! a completion whose number is no longer the latest issued one is discarded
//! without touching state, so a fast second submission can never be
//! overwritten by a slow first response landing late.

use crate::core::error::{RequestError, ValidationError};
use crate::core::result::AnalysisResult;

/// An uploaded file captured from the picker, name preserved so the backend
/// can branch on the `.txt`/`.csv` extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Exactly one input source reaches the network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPayload {
    Text(String),
    File(FilePayload),
}

/// Captured form state. Mutual exclusivity is enforced here, at capture time:
/// typing text drops any attached file and attaching a file clears the text,
/// so an ambiguous submission can never be constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    text: String,
    file: Option<FilePayload>,
    picker_generation: u64,
}

impl SubmissionInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.name.as_str())
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Remount key for the file picker element. A reused DOM node keeps its
    /// old value after the captured file is dropped, and re-selecting the
    /// same file then fires no change event; keying the element on this
    /// counter forces a fresh, empty node whenever the file goes away.
    pub fn picker_generation(&self) -> u64 {
        self.picker_generation
    }

    pub fn set_text(&mut self, text: String) {
        if !text.trim().is_empty() {
            self.drop_file();
        }
        self.text = text;
    }

    pub fn attach_file(&mut self, file: FilePayload) {
        self.text.clear();
        self.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.drop_file();
    }

    /// Scoped reset run on every terminal transition, success or failure, so
    /// the form is ready for the next submission. Always refreshes the
    /// picker, matching the element-level clear the form previously did.
    pub fn reset(&mut self) {
        self.text.clear();
        self.file = None;
        self.picker_generation += 1;
    }

    fn drop_file(&mut self) {
        if self.file.take().is_some() {
            self.picker_generation += 1;
        }
    }

    /// The file wins if both sources are somehow present; both empty is a
    /// local validation failure and never reaches the network.
    pub fn payload(&self) -> Result<RequestPayload, ValidationError> {
        if let Some(file) = &self.file {
            return Ok(RequestPayload::File(file.clone()));
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError);
        }
        Ok(RequestPayload::Text(self.text.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PipelinePhase {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Error(String),
}

/// What a completion did to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The response belonged to a superseded request; nothing changed.
    Stale,
    /// Latest request failed; phase moved to `Error`.
    Failed,
    /// Latest request succeeded; phase moved to `Success`. Carries a copy of
    /// the result for the caller's store write.
    Succeeded(AnalysisResult),
}

#[derive(Debug, Default)]
pub struct PipelineController {
    latest_seq: u64,
    phase: PipelinePhase,
}

impl PipelineController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &PipelinePhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PipelinePhase::Loading
    }

    /// Validates the captured input and, if it holds exactly one source,
    /// issues a new sequence number and moves to `Loading`. Validation
    /// failures leave the phase and the sequence counter untouched.
    pub fn begin_submit(
        &mut self,
        input: &SubmissionInput,
    ) -> Result<(u64, RequestPayload), ValidationError> {
        let payload = input.payload()?;
        self.latest_seq += 1;
        self.phase = PipelinePhase::Loading;
        Ok((self.latest_seq, payload))
    }

    /// Lands a request completion. Completions for anything but the latest
    /// issued sequence number are discarded outright.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<AnalysisResult, RequestError>,
    ) -> Completion {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale completion");
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                self.phase = PipelinePhase::Success(result.clone());
                Completion::Succeeded(result)
            }
            Err(err) => {
                self.phase = PipelinePhase::Error(err.to_string());
                Completion::Failed
            }
        }
    }
}
