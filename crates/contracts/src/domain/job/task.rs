use serde::{Deserialize, Serialize};

use crate::shared::form_session::FormDraft;
use crate::shared::validation::FieldErrors;

/// A unit of work logged against a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub description: String,
    pub cost: f64,
    #[serde(rename = "jobId", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
}

/// Draft behind the add-task form on the job details screen. Cost input is
/// coerced to a number on every keystroke, so an unparseable value reads as
/// zero rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub description: String,
    pub cost: f64,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self {
            description: String::new(),
            cost: 0.0,
        }
    }

    pub fn set_cost_input(&mut self, raw: &str) {
        self.cost = raw.trim().parse().unwrap_or(0.0);
    }

    pub fn to_record(&self, job_id: Option<i64>) -> Task {
        Task {
            id: None,
            description: self.description.clone(),
            cost: self.cost,
            job_id,
        }
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDraft for TaskDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let length = self.description.chars().count();
        if self.description.is_empty() {
            errors.set("description", "Task description is required");
        } else if length < 3 {
            errors.set("description", "Description must be at least 3 characters");
        } else if length > 255 {
            errors.set("description", "Description must be less than 255 characters");
        }
        if self.cost < 0.0 {
            errors.set("cost", "Cost must be a positive number");
        }
        errors
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_session::FormDraft;

    #[test]
    fn test_description_length_bounds() {
        let mut draft = TaskDraft::new();
        assert_eq!(
            draft.validate().get("description"),
            Some("Task description is required")
        );
        draft.description = "ab".to_string();
        assert_eq!(
            draft.validate().get("description"),
            Some("Description must be at least 3 characters")
        );
        draft.description = "abc".to_string();
        assert!(draft.validate().is_empty());
        draft.description = "x".repeat(255);
        assert!(draft.validate().is_empty());
        draft.description = "x".repeat(256);
        assert_eq!(
            draft.validate().get("description"),
            Some("Description must be less than 255 characters")
        );
    }

    #[test]
    fn test_cost_rules() {
        let mut draft = TaskDraft::new();
        draft.description = "Replace brake pads".to_string();
        draft.set_cost_input("1500.50");
        assert!(draft.validate().is_empty());
        draft.cost = -1.0;
        assert_eq!(
            draft.validate().get("cost"),
            Some("Cost must be a positive number")
        );
        // unparseable input coerces to zero, which is allowed
        draft.set_cost_input("abc");
        assert_eq!(draft.cost, 0.0);
        assert!(draft.validate().is_empty());
    }
}
