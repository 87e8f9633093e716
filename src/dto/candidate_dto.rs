use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::candidate::CandidateStatus;
use crate::models::row::CandidateRow;
use crate::utils::validation::validate;

/// Draft state of the edit modal. `status` is entered as free text, mirroring
/// the original form, and only parsed into the enum on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CandidateForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub skill: String,
    #[validate(length(min = 1))]
    pub status: String,
    pub photo: Option<String>,
}

impl CandidateForm {
    /// Prefills the form from the selected row.
    pub fn from_row(row: &CandidateRow) -> Self {
        Self {
            name: row.name.clone(),
            skill: row.skill.clone(),
            status: row.status.to_string(),
            photo: row.photo.clone(),
        }
    }

    /// Validates required fields, then converts into the patch the CRUD
    /// controller consumes. The controller itself never validates; a failure
    /// here leaves the store untouched.
    pub fn into_patch(self) -> Result<CandidatePatch> {
        validate(&self)?;
        let status: CandidateStatus = self.status.parse().map_err(Error::BadRequest)?;
        Ok(CandidatePatch {
            name: Some(self.name),
            skill: Some(self.skill),
            status: Some(status),
            photo: self.photo,
        })
    }
}

/// Partial update: `None` fields are left untouched by the merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub skill: Option<String>,
    pub status: Option<CandidateStatus>,
    pub photo: Option<String>,
}
