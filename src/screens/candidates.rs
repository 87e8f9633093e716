use crate::dto::candidate_dto::CandidateForm;
use crate::models::candidate::CandidateStatus;
use crate::models::row::{CandidateRef, CandidateRow};
use crate::screens::Notification;
use crate::services::candidate_service::{self, DetailKind, DetailView};
use crate::services::projection_service;
use crate::store::JobStore;

/// Enumerable UI states of the candidates table. At most one modal is open at
/// a time; every user action is a transition between these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Idle,
    Viewing(CandidateRow),
    Editing {
        row: CandidateRow,
        draft: CandidateForm,
    },
    ShowingDetail {
        row: CandidateRow,
        kind: DetailKind,
    },
}

/// The registered-candidates screen: search box, flattened table, and the
/// view/edit/detail modals. Holds no candidate data of its own; rows are
/// re-derived from the store on every read.
#[derive(Debug)]
pub struct CandidatesScreen {
    search_term: String,
    /// The status column's header filter.
    status_filter: Option<CandidateStatus>,
    /// The name column's header sorter.
    sorted_by_name: bool,
    state: ScreenState,
}

impl Default for CandidatesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidatesScreen {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            status_filter: None,
            sorted_by_name: false,
            state: ScreenState::Idle,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn status_filter(&self) -> Option<CandidateStatus> {
        self.status_filter
    }

    pub fn set_status_filter(&mut self, status: Option<CandidateStatus>) {
        self.status_filter = status;
    }

    pub fn sorted_by_name(&self) -> bool {
        self.sorted_by_name
    }

    /// Flips the name column's sorter on or off.
    pub fn toggle_name_sort(&mut self) {
        self.sorted_by_name = !self.sorted_by_name;
    }

    /// Current table contents: flatten, then apply the search term and the
    /// column controls. Computed fresh from the store every time it is
    /// called.
    pub fn rows(&self, store: &JobStore) -> Vec<CandidateRow> {
        let rows = projection_service::project(store.read());
        let mut rows = projection_service::filter(rows, &self.search_term);
        if let Some(status) = self.status_filter {
            rows = projection_service::filter_by_status(rows, status);
        }
        if self.sorted_by_name {
            projection_service::sort_by_name(&mut rows);
        }
        rows
    }

    pub fn open_view(&mut self, row: CandidateRow) {
        self.state = ScreenState::Viewing(row);
    }

    pub fn open_edit(&mut self, row: CandidateRow) {
        let draft = CandidateForm::from_row(&row);
        self.state = ScreenState::Editing { row, draft };
    }

    pub fn open_detail(&mut self, row: CandidateRow, kind: DetailKind) {
        self.state = ScreenState::ShowingDetail { row, kind };
    }

    /// Closes whichever modal is open.
    pub fn close(&mut self) {
        self.state = ScreenState::Idle;
    }

    /// Mutable access to the edit draft while the edit modal is open.
    pub fn draft_mut(&mut self) -> Option<&mut CandidateForm> {
        match &mut self.state {
            ScreenState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Content of the detail modal, if one is open.
    pub fn detail_view(&self) -> Option<DetailView> {
        match &self.state {
            ScreenState::ShowingDetail { row, kind } => {
                Some(candidate_service::detail(row, *kind))
            }
            _ => None,
        }
    }

    /// Submits the edit modal. Validation failure re-presents the form with
    /// the correction prompt and leaves the store untouched; success commits
    /// the new sequence and closes the modal.
    pub fn submit_edit(&mut self, store: &mut JobStore) -> Notification {
        let (row, draft) = match &self.state {
            ScreenState::Editing { row, draft } => (row.clone(), draft.clone()),
            _ => return Notification::Error("No edit in progress".to_string()),
        };

        let patch = match draft.into_patch() {
            Ok(patch) => patch,
            Err(err) => return Notification::Error(err.user_message()),
        };

        let target = CandidateRef::from(&row);
        match candidate_service::edit_candidate(store.read(), &target, &patch) {
            Ok(updated) => {
                store.write(updated);
                self.state = ScreenState::Idle;
                Notification::Success("Candidate updated successfully".to_string())
            }
            Err(err) => {
                self.state = ScreenState::Idle;
                Notification::Error(err.user_message())
            }
        }
    }

    /// Deletes the row's candidate after the confirm popup.
    pub fn delete(&mut self, store: &mut JobStore, row: &CandidateRow) -> Notification {
        let target = CandidateRef::from(row);
        match candidate_service::delete_candidate(store.read(), &target) {
            Ok((updated, name)) => {
                store.write(updated);
                // Drop any modal still pointing at the removed candidate.
                if self.selected_candidate() == Some(target.candidate_id) {
                    self.state = ScreenState::Idle;
                }
                Notification::Success(format!("Deleted candidate: {}", name))
            }
            Err(err) => Notification::Error(err.user_message()),
        }
    }

    fn selected_candidate(&self) -> Option<uuid::Uuid> {
        match &self.state {
            ScreenState::Idle => None,
            ScreenState::Viewing(row)
            | ScreenState::Editing { row, .. }
            | ScreenState::ShowingDetail { row, .. } => Some(row.candidate_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{Candidate, CandidateStatus};
    use crate::models::job::Job;
    use uuid::Uuid;

    fn store() -> JobStore {
        JobStore::new(vec![Job::new(
            "j1",
            "Engineer",
            vec![
                Candidate {
                    id: Uuid::new_v4(),
                    name: "Alice".to_string(),
                    skill: "Go".to_string(),
                    status: CandidateStatus::Pending,
                    photo: None,
                    mock_interviews: 2,
                    job_interviews: 0,
                    scheduled_interview: None,
                },
                Candidate {
                    id: Uuid::new_v4(),
                    name: "Bob".to_string(),
                    skill: "Rust".to_string(),
                    status: CandidateStatus::Approved,
                    photo: None,
                    mock_interviews: 0,
                    job_interviews: 1,
                    scheduled_interview: None,
                },
            ],
        )])
    }

    #[test]
    fn search_narrows_the_table() {
        let store = store();
        let mut screen = CandidatesScreen::new();
        assert_eq!(screen.rows(&store).len(), 2);

        screen.set_search("ali");
        let rows = screen.rows(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
    }

    #[test]
    fn status_filter_narrows_the_table() {
        let store = store();
        let mut screen = CandidatesScreen::new();

        screen.set_status_filter(Some(CandidateStatus::Approved));
        let rows = screen.rows(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bob");

        screen.set_status_filter(None);
        assert_eq!(screen.rows(&store).len(), 2);
    }

    #[test]
    fn name_sort_toggles_on_and_off() {
        let mut store = store();
        let mut screen = CandidatesScreen::new();

        // Move Bob ahead of Alice in insertion order.
        let mut jobs = store.snapshot();
        jobs[0].candidates.reverse();
        store.write(jobs);
        assert_eq!(screen.rows(&store)[0].name, "Bob");

        screen.toggle_name_sort();
        assert_eq!(screen.rows(&store)[0].name, "Alice");

        screen.toggle_name_sort();
        assert_eq!(screen.rows(&store)[0].name, "Bob");
    }

    #[test]
    fn edit_happy_path_commits_and_closes() {
        let mut store = store();
        let mut screen = CandidatesScreen::new();
        let row = screen.rows(&store)[0].clone();

        screen.open_edit(row);
        screen.draft_mut().unwrap().status = "approved".to_string();
        let note = screen.submit_edit(&mut store);

        assert_eq!(
            note,
            Notification::Success("Candidate updated successfully".to_string())
        );
        assert_eq!(*screen.state(), ScreenState::Idle);
        assert_eq!(
            store.read()[0].candidates[0].status,
            CandidateStatus::Approved
        );
        // Field-scoped: everything else survives.
        assert_eq!(store.read()[0].candidates[0].name, "Alice");
        assert_eq!(store.read()[0].candidates[0].skill, "Go");
    }

    #[test]
    fn blank_required_field_keeps_the_form_open_and_store_untouched() {
        let mut store = store();
        let before = store.snapshot();
        let mut screen = CandidatesScreen::new();
        let row = screen.rows(&store)[0].clone();

        screen.open_edit(row);
        screen.draft_mut().unwrap().name = String::new();
        let note = screen.submit_edit(&mut store);

        assert_eq!(
            note,
            Notification::Error("Please fill all required fields.".to_string())
        );
        assert!(matches!(screen.state(), ScreenState::Editing { .. }));
        assert_eq!(store.read(), &before[..]);
    }

    #[test]
    fn unparseable_status_is_a_validation_failure() {
        let mut store = store();
        let mut screen = CandidatesScreen::new();
        let row = screen.rows(&store)[0].clone();

        screen.open_edit(row);
        screen.draft_mut().unwrap().status = "maybe".to_string();
        let note = screen.submit_edit(&mut store);

        assert_eq!(
            note,
            Notification::Error("Please fill all required fields.".to_string())
        );
    }

    #[test]
    fn delete_surfaces_the_candidate_name() {
        let mut store = store();
        let mut screen = CandidatesScreen::new();
        let row = screen.rows(&store)[1].clone();

        let note = screen.delete(&mut store, &row);

        assert_eq!(
            note,
            Notification::Success("Deleted candidate: Bob".to_string())
        );
        assert_eq!(store.read()[0].candidates.len(), 1);
        assert_eq!(store.read()[0].candidates[0].name, "Alice");
    }

    #[test]
    fn deleting_the_viewed_candidate_closes_the_modal() {
        let mut store = store();
        let mut screen = CandidatesScreen::new();
        let row = screen.rows(&store)[0].clone();

        screen.open_view(row.clone());
        screen.delete(&mut store, &row);

        assert_eq!(*screen.state(), ScreenState::Idle);
    }

    #[test]
    fn deleting_twice_through_a_stale_row_is_an_error() {
        let mut store = store();
        let mut screen = CandidatesScreen::new();
        let stale = screen.rows(&store)[0].clone();

        screen.delete(&mut store, &stale);
        let note = screen.delete(&mut store, &stale);

        assert!(matches!(note, Notification::Error(_)));
        assert_eq!(store.read()[0].candidates.len(), 1);
    }

    #[test]
    fn detail_modal_shows_the_clicked_counter() {
        let store = store();
        let mut screen = CandidatesScreen::new();
        let row = screen.rows(&store)[0].clone();

        screen.open_detail(row, DetailKind::Mock);
        let view = screen.detail_view().unwrap();
        assert_eq!(view.name, "Alice");
        assert_eq!(view.value, "2");

        screen.close();
        assert!(screen.detail_view().is_none());
    }
}
