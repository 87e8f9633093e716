use crate::store::JobStore;

/// One line of the job-opportunities listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub candidate_count: usize,
}

pub fn summaries(store: &JobStore) -> Vec<JobSummary> {
    store
        .read()
        .iter()
        .map(|job| JobSummary {
            id: job.id.clone(),
            title: job.title.clone(),
            candidate_count: job.candidates.len(),
        })
        .collect()
}
