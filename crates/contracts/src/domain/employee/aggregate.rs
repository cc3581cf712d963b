use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::form_session::FormDraft;
use crate::shared::validation::{self, FieldErrors};

/// Roles offered by the employee form.
pub const ROLES: [&str; 6] = [
    "Operational Manager",
    "Supervisor",
    "Mechanic",
    "Store Keeper",
    "Cashier",
    "HR",
];

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// Employee record as the backend stores it. `emp_id` is assigned by the
/// server on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "empId", skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<i64>,
    pub firstname: String,
    pub lastname: String,
    pub role: String,
    pub contact: String,
    pub nic: String,
    /// ISO date (`YYYY-MM-DD`), the format produced by a date input.
    pub dob: String,
    pub gender: String,
    pub salary: f64,
}

impl Employee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// In-memory draft behind the employee form. All fields are kept as text
/// while editing; `today` is captured once at seed time so age checks stay
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub firstname: String,
    pub lastname: String,
    pub role: String,
    pub contact: String,
    pub nic: String,
    pub dob: String,
    pub gender: String,
    pub salary: String,
    today: NaiveDate,
}

impl EmployeeDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            firstname: String::new(),
            lastname: String::new(),
            role: String::new(),
            contact: String::new(),
            nic: String::new(),
            dob: String::new(),
            gender: String::new(),
            salary: String::new(),
            today,
        }
    }

    pub fn from_record(record: &Employee, today: NaiveDate) -> Self {
        Self {
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            role: record.role.clone(),
            contact: record.contact.clone(),
            nic: record.nic.clone(),
            dob: record.dob.clone(),
            gender: record.gender.clone(),
            salary: format!("{}", record.salary),
            today,
        }
    }

    /// Plain record for persistence. Meaningful only after `validate`
    /// reported no errors.
    pub fn to_record(&self, emp_id: Option<i64>) -> Employee {
        Employee {
            emp_id,
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            role: self.role.clone(),
            contact: self.contact.clone(),
            nic: self.nic.clone(),
            dob: self.dob.clone(),
            gender: self.gender.clone(),
            salary: self.salary.trim().parse().unwrap_or(0.0),
        }
    }

    fn dob_error(&self) -> Option<&'static str> {
        if self.dob.is_empty() {
            return Some("Date of Birth is required.");
        }
        let Ok(dob) = NaiveDate::parse_from_str(&self.dob, "%Y-%m-%d") else {
            return Some("Date of Birth is required.");
        };
        if dob >= self.today {
            return Some("Date of Birth cannot be today or a future date.");
        }
        // calendar years, not elapsed milliseconds
        if self.today.years_since(dob).unwrap_or(0) < 17 {
            return Some("Employee must be at least 17 years old.");
        }
        None
    }
}

impl FormDraft for EmployeeDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !validation::is_letters(&self.firstname) {
            errors.set("firstname", "First name must contain only letters.");
        }
        if !validation::is_letters(&self.lastname) {
            errors.set("lastname", "Last name must contain only letters.");
        }
        if self.role.is_empty() {
            errors.set("role", "Role is required.");
        }
        if !validation::is_digits_exact(&self.contact, 10) {
            errors.set("contact", "Contact must be exactly 10 digits.");
        }
        if !validation::is_valid_nic(&self.nic) {
            errors.set("nic", "NIC must be 12 digits or 9 digits followed by 'V'.");
        }
        if let Some(message) = self.dob_error() {
            errors.set("dob", message);
        }
        if self.gender.is_empty() {
            errors.set("gender", "Gender is required.");
        }
        match self.salary.trim().parse::<f64>() {
            Ok(salary) if salary < 0.0 => errors.set("salary", "Salary cannot be negative."),
            Ok(_) => {}
            Err(_) => errors.set("salary", "Salary is required."),
        }
        errors
    }

    fn reset(&mut self) {
        *self = Self::new(self.today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_session::FormDraft;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_draft() -> EmployeeDraft {
        let mut draft = EmployeeDraft::new(today());
        draft.firstname = "Nimal".to_string();
        draft.lastname = "Perera".to_string();
        draft.role = "Mechanic".to_string();
        draft.contact = "0771234567".to_string();
        draft.nic = "200012345678".to_string();
        draft.dob = "2000-01-20".to_string();
        draft.gender = "Male".to_string();
        draft.salary = "65000".to_string();
        draft
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn test_all_rules_run_in_one_pass() {
        let draft = EmployeeDraft::new(today());
        let errors = draft.validate();
        for field in ["firstname", "lastname", "role", "contact", "nic", "dob", "gender", "salary"] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut draft = valid_draft();
        draft.contact = "123".to_string();
        assert_eq!(draft.validate(), draft.validate());
    }

    #[test]
    fn test_age_boundaries() {
        let mut draft = valid_draft();

        // exactly 17 today
        draft.dob = "2007-06-15".to_string();
        assert!(draft.validate().get("dob").is_none());

        // one day short of 17
        draft.dob = "2007-06-16".to_string();
        assert_eq!(
            draft.validate().get("dob"),
            Some("Employee must be at least 17 years old.")
        );

        // future dates are rejected before any age math
        draft.dob = "2025-01-01".to_string();
        assert_eq!(
            draft.validate().get("dob"),
            Some("Date of Birth cannot be today or a future date.")
        );

        draft.dob = "2024-06-15".to_string();
        assert_eq!(
            draft.validate().get("dob"),
            Some("Date of Birth cannot be today or a future date.")
        );
    }

    #[test]
    fn test_negative_salary_rejected() {
        let mut draft = valid_draft();
        draft.salary = "-1".to_string();
        assert_eq!(draft.validate().get("salary"), Some("Salary cannot be negative."));
        draft.salary = "0".to_string();
        assert!(draft.validate().get("salary").is_none());
    }

    #[test]
    fn test_record_round_trip() {
        let draft = valid_draft();
        let record = draft.to_record(Some(12));
        assert_eq!(record.emp_id, Some(12));
        assert_eq!(record.salary, 65000.0);
        let reseeded = EmployeeDraft::from_record(&record, today());
        assert_eq!(reseeded.salary, "65000");
        assert_eq!(reseeded.firstname, "Nimal");
    }

    #[test]
    fn test_reset_preserves_today() {
        let mut draft = valid_draft();
        draft.reset();
        assert_eq!(draft, EmployeeDraft::new(today()));
    }
}
