use crate::models::candidate::CandidateStatus;
use crate::services::candidate_service::status_counts;
use crate::store::JobStore;

/// Headline numbers for the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub total_candidates: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

pub fn stats(store: &JobStore) -> DashboardStats {
    let jobs = store.read();
    let counts = status_counts(jobs);
    let count = |status| counts.get(&status).copied().unwrap_or(0);

    DashboardStats {
        total_jobs: jobs.len(),
        total_candidates: jobs.iter().map(|j| j.candidates.len()).sum(),
        approved: count(CandidateStatus::Approved),
        pending: count(CandidateStatus::Pending),
        rejected: count(CandidateStatus::Rejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_jobs;

    #[test]
    fn stats_add_up() {
        let store = JobStore::new(seed_jobs());
        let stats = stats(&store);

        assert_eq!(stats.total_jobs, 3);
        assert_eq!(
            stats.total_candidates,
            stats.approved + stats.pending + stats.rejected
        );
    }
}
