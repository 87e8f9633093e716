use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;

/// A posted opportunity owning an ordered sequence of candidates.
///
/// The candidate sequence is owned exclusively by its job; nothing else in
/// the store references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub candidates: Vec<Candidate>,
}

impl Job {
    pub fn new(id: impl Into<String>, title: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            candidates,
        }
    }
}
