use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identity, assigned at ingestion. Mutations address candidates
    /// by this id, never by their position in the job's sequence.
    pub id: Uuid,
    pub name: String,
    pub skill: String,
    pub status: CandidateStatus,
    pub photo: Option<String>,
    pub mock_interviews: u32,
    pub job_interviews: u32,
    pub scheduled_interview: Option<ScheduledInterview>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Approved,
    Pending,
    Rejected,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 3] = [
        CandidateStatus::Approved,
        CandidateStatus::Pending,
        CandidateStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Approved => "approved",
            CandidateStatus::Pending => "pending",
            CandidateStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approved" => Ok(CandidateStatus::Approved),
            "pending" => Ok(CandidateStatus::Pending),
            "rejected" => Ok(CandidateStatus::Rejected),
            other => Err(format!("Unknown candidate status: {}", other)),
        }
    }
}

/// Detail payload behind the "Scheduled Interview" drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledInterview {
    pub when: DateTime<Utc>,
    pub location: String,
    pub notes: Option<String>,
}
