use crate::models::candidate::CandidateStatus;
use crate::models::job::Job;
use crate::models::row::CandidateRow;

/// Flattens every job's candidate sequence into table rows, in job order and
/// then within-job order. `candidate_index` is the position in the current
/// sequence, so the output is only valid until the next store write.
pub fn project(jobs: &[Job]) -> Vec<CandidateRow> {
    jobs.iter()
        .flat_map(|job| {
            job.candidates.iter().enumerate().map(|(index, candidate)| CandidateRow {
                row_key: format!("{}-{}", job.id, index),
                job_id: job.id.clone(),
                job_title: job.title.clone(),
                candidate_id: candidate.id,
                candidate_index: index,
                name: candidate.name.clone(),
                skill: candidate.skill.clone(),
                status: candidate.status,
                photo: candidate.photo.clone(),
                mock_interviews: candidate.mock_interviews,
                job_interviews: candidate.job_interviews,
                scheduled_interview: candidate.scheduled_interview.clone(),
            })
        })
        .collect()
}

/// Case-insensitive substring search over name OR skill. An empty term is the
/// identity; no other field is searched.
pub fn filter(rows: Vec<CandidateRow>, term: &str) -> Vec<CandidateRow> {
    if term.is_empty() {
        return rows;
    }
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            row.name.to_lowercase().contains(&needle)
                || row.skill.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The status column's per-value filter.
pub fn filter_by_status(rows: Vec<CandidateRow>, status: CandidateStatus) -> Vec<CandidateRow> {
    rows.into_iter().filter(|row| row.status == status).collect()
}

/// Display-level alphabetical sort by name. Case-insensitive lexicographic;
/// stands in for the table widget's locale-aware comparator.
pub fn sort_by_name(rows: &mut [CandidateRow]) {
    rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

/// One table page (zero-based). Out-of-range pages are empty; a `page_size`
/// of zero shows everything.
pub fn paginate(rows: &[CandidateRow], page: usize, page_size: usize) -> &[CandidateRow] {
    if page_size == 0 {
        return rows;
    }
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Number of pages needed to show every row.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 || total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{Candidate, CandidateStatus};
    use uuid::Uuid;

    fn candidate(name: &str, skill: &str, status: CandidateStatus) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            skill: skill.to_string(),
            status,
            photo: None,
            mock_interviews: 0,
            job_interviews: 0,
            scheduled_interview: None,
        }
    }

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new(
                "j1",
                "Frontend Engineer",
                vec![
                    candidate("Alice", "React", CandidateStatus::Pending),
                    candidate("bob", "Rust", CandidateStatus::Approved),
                ],
            ),
            Job::new(
                "j2",
                "Backend Engineer",
                vec![candidate("Carol", "Go", CandidateStatus::Rejected)],
            ),
        ]
    }

    #[test]
    fn project_flattens_in_store_order() {
        let jobs = sample_jobs();
        let rows = project(&jobs);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].row_key, "j1-0");
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].job_title, "Frontend Engineer");
        assert_eq!(rows[1].row_key, "j1-1");
        assert_eq!(rows[1].candidate_index, 1);
        assert_eq!(rows[2].row_key, "j2-0");
        assert_eq!(rows[2].job_title, "Backend Engineer");
    }

    #[test]
    fn project_is_idempotent() {
        let jobs = sample_jobs();
        assert_eq!(project(&jobs), project(&jobs));
    }

    #[test]
    fn filter_matches_name_or_skill_case_insensitively() {
        let rows = project(&sample_jobs());

        let by_name = filter(rows.clone(), "ALI");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alice");

        let by_skill = filter(rows.clone(), "rust");
        assert_eq!(by_skill.len(), 1);
        assert_eq!(by_skill[0].name, "bob");

        assert!(filter(rows, "quantum").is_empty());
    }

    #[test]
    fn empty_term_is_identity() {
        let rows = project(&sample_jobs());
        assert_eq!(filter(rows.clone(), ""), rows);
    }

    #[test]
    fn filter_ignores_other_fields() {
        // "Engineer" only appears in job titles, which are not searched.
        let rows = project(&sample_jobs());
        assert!(filter(rows, "Engineer").is_empty());
    }

    #[test]
    fn status_filter_selects_exactly_one_status() {
        let rows = project(&sample_jobs());
        let approved = filter_by_status(rows, CandidateStatus::Approved);
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].name, "bob");
    }

    #[test]
    fn paginate_chunks_rows_in_order() {
        let rows = project(&sample_jobs());

        let first = paginate(&rows, 0, 2);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].name, "Alice");

        // Last page may be partial.
        let last = paginate(&rows, 1, 2);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].name, "Carol");

        assert!(paginate(&rows, 7, 2).is_empty());
        assert_eq!(paginate(&rows, 0, 0).len(), rows.len());

        assert_eq!(page_count(rows.len(), 2), 2);
        assert_eq!(page_count(0, 2), 1);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mut rows = project(&sample_jobs());
        sort_by_name(&mut rows);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "Carol"]);
    }
}
