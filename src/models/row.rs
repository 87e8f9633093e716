use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::{CandidateStatus, ScheduledInterview};

/// One flattened table row: a candidate denormalized with its parent job's
/// title. Ephemeral: rows are rebuilt from the store on every read and must
/// never be cached across a mutation, because `candidate_index` is only valid
/// for the snapshot it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRow {
    /// Composite display key, `"{job_id}-{candidate_index}"`.
    pub row_key: String,
    pub job_id: String,
    pub job_title: String,
    pub candidate_id: Uuid,
    /// Position within the owning job's sequence at flatten time.
    pub candidate_index: usize,
    pub name: String,
    pub skill: String,
    pub status: CandidateStatus,
    pub photo: Option<String>,
    pub mock_interviews: u32,
    pub job_interviews: u32,
    pub scheduled_interview: Option<ScheduledInterview>,
}

/// Addressing unit for mutations: the owning job plus the candidate's stable
/// id. Indices are recomputed from the live store at mutation time, so a ref
/// taken before an unrelated delete still resolves to the same person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRef {
    pub job_id: String,
    pub candidate_id: Uuid,
}

impl From<&CandidateRow> for CandidateRef {
    fn from(row: &CandidateRow) -> Self {
        Self {
            job_id: row.job_id.clone(),
            candidate_id: row.candidate_id,
        }
    }
}
