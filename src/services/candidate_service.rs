//! Pure CRUD controller over the job sequence. Every function takes the
//! current sequence and returns a new one; committing the result to the store
//! is the caller's job. Targets are addressed by `(job_id, candidate_id)` and
//! the live index is recomputed here, so refs taken before an unrelated
//! mutation still land on the right person.

use std::collections::HashMap;

use crate::dto::candidate_dto::CandidatePatch;
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::job::Job;
use crate::models::row::{CandidateRef, CandidateRow};
use crate::utils::time::display_slot;

/// Recomputes the live `(job_index, candidate_index)` of a target.
pub fn resolve(jobs: &[Job], target: &CandidateRef) -> Result<(usize, usize)> {
    let job_index = jobs
        .iter()
        .position(|job| job.id == target.job_id)
        .ok_or_else(|| Error::NotFound(format!("Job not found: {}", target.job_id)))?;
    let candidate_index = jobs[job_index]
        .candidates
        .iter()
        .position(|c| c.id == target.candidate_id)
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
    Ok((job_index, candidate_index))
}

/// Returns the sequence with the target dropped from its job, plus the
/// removed candidate's name for the success notification. Only the affected
/// job is rebuilt; every other job is carried over unchanged, and the
/// relative order of the survivors is preserved.
pub fn delete_candidate(jobs: &[Job], target: &CandidateRef) -> Result<(Vec<Job>, String)> {
    let (job_index, candidate_index) = resolve(jobs, target)?;
    let name = jobs[job_index].candidates[candidate_index].name.clone();

    let updated = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            if i != job_index {
                return job.clone();
            }
            Job {
                id: job.id.clone(),
                title: job.title.clone(),
                candidates: job
                    .candidates
                    .iter()
                    .filter(|c| c.id != target.candidate_id)
                    .cloned()
                    .collect(),
            }
        })
        .collect();

    tracing::info!(job_id = %target.job_id, candidate = %name, "deleted candidate");
    Ok((updated, name))
}

/// Merges the patch into the target candidate field by field; unspecified
/// fields stay untouched. No validation happens here; required-field checks
/// run upstream on the form DTO before a patch is ever built.
pub fn edit_candidate(
    jobs: &[Job],
    target: &CandidateRef,
    patch: &CandidatePatch,
) -> Result<Vec<Job>> {
    let (job_index, candidate_index) = resolve(jobs, target)?;

    let updated = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            if i != job_index {
                return job.clone();
            }
            let mut candidates = job.candidates.clone();
            apply_patch(&mut candidates[candidate_index], patch);
            Job {
                id: job.id.clone(),
                title: job.title.clone(),
                candidates,
            }
        })
        .collect();

    tracing::info!(job_id = %target.job_id, candidate_id = %target.candidate_id, "updated candidate");
    Ok(updated)
}

fn apply_patch(candidate: &mut Candidate, patch: &CandidatePatch) {
    if let Some(name) = &patch.name {
        candidate.name = name.clone();
    }
    if let Some(skill) = &patch.skill {
        candidate.skill = skill.clone();
    }
    if let Some(status) = patch.status {
        candidate.status = status;
    }
    if let Some(photo) = &patch.photo {
        candidate.photo = Some(photo.clone());
    }
}

/// Which drill-down the user clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Scheduled,
    Mock,
    Job,
}

impl DetailKind {
    pub fn label(&self) -> &'static str {
        match self {
            DetailKind::Scheduled => "Scheduled Interview",
            DetailKind::Mock => "Mock Interviews Attended",
            DetailKind::Job => "Job Interviews Attended",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub label: &'static str,
    /// Empty when the candidate has no scheduled interview.
    pub value: String,
}

/// Pure read behind the detail modal. An absent scheduled interview renders
/// as an empty value, not an error.
pub fn detail(row: &CandidateRow, kind: DetailKind) -> DetailView {
    let value = match kind {
        DetailKind::Scheduled => row
            .scheduled_interview
            .as_ref()
            .map(|s| {
                let mut text = format!("{} at {}", display_slot(s.when), s.location);
                if let Some(notes) = &s.notes {
                    text.push_str(" - ");
                    text.push_str(notes);
                }
                text
            })
            .unwrap_or_default(),
        DetailKind::Mock => row.mock_interviews.to_string(),
        DetailKind::Job => row.job_interviews.to_string(),
    };

    DetailView {
        name: row.name.clone(),
        label: kind.label(),
        value,
    }
}

/// Per-status totals for the dashboard cards.
pub fn status_counts(jobs: &[Job]) -> HashMap<CandidateStatus, usize> {
    let mut counts = HashMap::new();
    for job in jobs {
        for candidate in &job.candidates {
            *counts.entry(candidate.status).or_insert(0) += 1;
        }
    }
    counts
}
