use crate::error::Result;
use crate::models::candidate::CandidateStatus;
use crate::models::row::CandidateRef;
use crate::services::candidate_service::resolve;
use crate::store::JobStore;
use crate::utils::time::display_slot;

/// Everything the profile page renders for one candidate, looked up fresh
/// from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub skill: String,
    pub status: CandidateStatus,
    pub photo: Option<String>,
    pub job_title: String,
    pub mock_interviews: u32,
    pub job_interviews: u32,
    pub scheduled_interview: Option<String>,
}

pub fn profile(store: &JobStore, target: &CandidateRef) -> Result<ProfileView> {
    let jobs = store.read();
    let (job_index, candidate_index) = resolve(jobs, target)?;
    let job = &jobs[job_index];
    let candidate = &job.candidates[candidate_index];

    Ok(ProfileView {
        name: candidate.name.clone(),
        skill: candidate.skill.clone(),
        status: candidate.status,
        photo: candidate.photo.clone(),
        job_title: job.title.clone(),
        mock_interviews: candidate.mock_interviews,
        job_interviews: candidate.job_interviews,
        scheduled_interview: candidate
            .scheduled_interview
            .as_ref()
            .map(|s| format!("{} at {}", display_slot(s.when), s.location)),
    })
}
