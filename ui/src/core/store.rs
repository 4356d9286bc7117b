//! Process-wide holder of the latest successful result per comparable
//! pipeline. Written only from a controller's success path; read by the
//! comparison view and the exporter at arbitrary later times. All access is
//! single-threaded and cooperative, so no locking is involved.

use std::collections::BTreeMap;

use crate::core::result::AnalysisResult;
use crate::pipelines;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    slots: BTreeMap<&'static str, AnalysisResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest successful result for a comparable pipeline. Writes
    /// for unknown or non-comparable pipelines are dropped. Failed requests
    /// never reach this call, so an earlier success is never erased.
    pub fn set(&mut self, pipeline_id: &str, result: AnalysisResult) {
        match pipelines::by_id(pipeline_id) {
            Some(config) if config.comparable => {
                self.slots.insert(config.id, result);
            }
            _ => {
                tracing::warn!(pipeline_id, "dropping store write for non-comparable pipeline");
            }
        }
    }

    pub fn get(&self, pipeline_id: &str) -> Option<&AnalysisResult> {
        self.slots.get(pipeline_id)
    }

    /// True once every comparable slot holds a result.
    pub fn has_all_comparable(&self) -> bool {
        pipelines::COMPARABLE
            .iter()
            .all(|config| self.slots.contains_key(config.id))
    }
}
