//! Progress status shared by milestones and deliverables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::registry::{Model, ModelKind};
use crate::schema::FieldDefinition;

/// Progress state of a milestone or deliverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProgress,
        Status::Completed,
        Status::Cancelled,
    ];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }

    /// Whether no further progress is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    /// Accepts any casing and spaces, hyphens or underscores between words,
    /// so "In Progress", "in-progress" and "IN_PROGRESS" all parse.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "pending" => Ok(Status::Pending),
            "inprogress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "cancelled" | "canceled" => Ok(Status::Cancelled),
            _ => Err(Error::InvalidValue {
                field: "status".to_string(),
                message: format!("unknown status `{}`", s),
            }),
        }
    }
}

impl TryFrom<String> for Status {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl Model for Status {
    fn model_name() -> &'static str {
        "Status"
    }

    fn kind() -> ModelKind {
        ModelKind::Enumeration
    }

    fn collection_name() -> Option<&'static str> {
        None
    }

    fn field_definitions() -> Vec<FieldDefinition> {
        Vec::new()
    }

    fn variants() -> Vec<&'static str> {
        Status::ALL.iter().map(Status::as_str).collect()
    }
}
