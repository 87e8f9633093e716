use tracing::debug;

use crate::models::job::Job;

/// The single writable holder of all job data for the session.
///
/// Owned by the application root and handed to screens by reference, never a
/// process-wide static, so tests can run isolated instances side by side.
/// Mutation happens only by whole-sequence replacement through [`write`];
/// everything a screen displays is a projection re-derived from [`read`].
/// Single-threaded and synchronous: no locking, last write wins. No
/// validation happens here; callers supply well-formed job sequences.
///
/// [`write`]: JobStore::write
/// [`read`]: JobStore::read
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn read(&self) -> &[Job] {
        &self.jobs
    }

    /// Owned copy for the pure CRUD functions to transform.
    pub fn snapshot(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    pub fn write(&mut self, jobs: Vec<Job>) {
        debug!(jobs = jobs.len(), "replacing job store contents");
        self.jobs = jobs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_replaces_the_whole_sequence() {
        let mut store = JobStore::new(vec![Job::new("j1", "Engineer", vec![])]);
        assert_eq!(store.read().len(), 1);

        store.write(vec![
            Job::new("j2", "Analyst", vec![]),
            Job::new("j3", "Designer", vec![]),
        ]);

        assert_eq!(store.read().len(), 2);
        assert_eq!(store.read()[0].id, "j2");
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let mut store = JobStore::new(vec![Job::new("j1", "Engineer", vec![])]);
        let snapshot = store.snapshot();
        store.write(vec![]);
        assert_eq!(snapshot.len(), 1);
        assert!(store.read().is_empty());
    }
}
