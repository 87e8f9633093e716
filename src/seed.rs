use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateStatus, ScheduledInterview};
use crate::models::job::Job;

/// Seed-file shape: candidates arrive without ids, matching the original
/// client-side fixture data. Ingestion assigns every candidate a stable id.
#[derive(Debug, Deserialize)]
struct SeedJob {
    id: String,
    title: String,
    candidates: Vec<SeedCandidate>,
}

#[derive(Debug, Deserialize)]
struct SeedCandidate {
    name: String,
    skill: String,
    status: CandidateStatus,
    #[serde(default)]
    photo: Option<String>,
    #[serde(default)]
    mock_interviews: u32,
    #[serde(default)]
    job_interviews: u32,
    #[serde(default)]
    scheduled_interview: Option<ScheduledInterview>,
}

fn ingest(seed: Vec<SeedJob>) -> Vec<Job> {
    seed.into_iter()
        .map(|job| Job {
            id: job.id,
            title: job.title,
            candidates: job
                .candidates
                .into_iter()
                .map(|c| Candidate {
                    id: Uuid::new_v4(),
                    name: c.name,
                    skill: c.skill,
                    status: c.status,
                    photo: c.photo,
                    mock_interviews: c.mock_interviews,
                    job_interviews: c.job_interviews,
                    scheduled_interview: c.scheduled_interview,
                })
                .collect(),
        })
        .collect()
}

/// Loads jobs from a JSON seed file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Job>> {
    let raw = fs::read_to_string(path.as_ref())?;
    let seed: Vec<SeedJob> = serde_json::from_str(&raw)?;
    let jobs = ingest(seed);
    info!(
        path = %path.as_ref().display(),
        jobs = jobs.len(),
        "loaded seed file"
    );
    Ok(jobs)
}

/// Built-in demo data, used when no `SEED_FILE` is configured.
pub fn seed_jobs() -> Vec<Job> {
    let interview_slot = |y, mo, d, h| {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
    };

    let candidate = |name: &str,
                     skill: &str,
                     status: CandidateStatus,
                     photo: Option<&str>,
                     mock: u32,
                     job: u32,
                     scheduled: Option<ScheduledInterview>| Candidate {
        id: Uuid::new_v4(),
        name: name.to_string(),
        skill: skill.to_string(),
        status,
        photo: photo.map(str::to_string),
        mock_interviews: mock,
        job_interviews: job,
        scheduled_interview: scheduled,
    };

    vec![
        Job::new(
            "j1",
            "Frontend Engineer",
            vec![
                candidate(
                    "Alice Brown",
                    "React",
                    CandidateStatus::Pending,
                    Some("https://i.pravatar.cc/150?img=1"),
                    2,
                    1,
                    Some(ScheduledInterview {
                        when: interview_slot(2026, 9, 14, 10),
                        location: "Zoom".to_string(),
                        notes: Some("Second round with the hiring manager".to_string()),
                    }),
                ),
                candidate(
                    "Bilal Ahmed",
                    "TypeScript",
                    CandidateStatus::Approved,
                    Some("https://i.pravatar.cc/150?img=2"),
                    1,
                    3,
                    None,
                ),
                candidate(
                    "Carla Diaz",
                    "CSS",
                    CandidateStatus::Rejected,
                    None,
                    0,
                    1,
                    None,
                ),
            ],
        ),
        Job::new(
            "j2",
            "Backend Engineer",
            vec![
                candidate(
                    "Dmitri Volkov",
                    "Go",
                    CandidateStatus::Pending,
                    Some("https://i.pravatar.cc/150?img=4"),
                    3,
                    0,
                    Some(ScheduledInterview {
                        when: interview_slot(2026, 9, 16, 14),
                        location: "Office, room 2B".to_string(),
                        notes: None,
                    }),
                ),
                candidate(
                    "Emma Wilson",
                    "PostgreSQL",
                    CandidateStatus::Approved,
                    None,
                    1,
                    2,
                    None,
                ),
            ],
        ),
        Job::new(
            "j3",
            "Data Analyst",
            vec![candidate(
                "Farid Karimov",
                "SQL",
                CandidateStatus::Pending,
                None,
                0,
                0,
                None,
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_seed_assigns_unique_candidate_ids() {
        let jobs = seed_jobs();
        let ids: HashSet<Uuid> = jobs
            .iter()
            .flat_map(|j| j.candidates.iter().map(|c| c.id))
            .collect();
        let total: usize = jobs.iter().map(|j| j.candidates.len()).sum();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn seed_file_candidates_get_ids_at_ingestion() {
        let raw = r#"[
            {
                "id": "j1",
                "title": "Engineer",
                "candidates": [
                    {"name": "Alice", "skill": "Go", "status": "pending"}
                ]
            }
        ]"#;
        let path = std::env::temp_dir().join("dashboard_seed_test.json");
        fs::write(&path, raw).unwrap();

        let jobs = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].candidates[0].name, "Alice");
        assert_eq!(jobs[0].candidates[0].status, CandidateStatus::Pending);
        assert!(!jobs[0].candidates[0].id.is_nil());
        assert_eq!(jobs[0].candidates[0].mock_interviews, 0);
    }
}
