use serde::{Deserialize, Serialize};

use crate::domain::employee::aggregate::Employee;
use crate::domain::vehicle::aggregate::Vehicle;
use crate::shared::form_session::FormDraft;
use crate::shared::validation::FieldErrors;

/// Workshop area a job is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceSection {
    Garage,
    BodyShop,
    PaintShop,
    WashBay,
}

impl ServiceSection {
    pub const ALL: [ServiceSection; 4] = [
        ServiceSection::Garage,
        ServiceSection::BodyShop,
        ServiceSection::PaintShop,
        ServiceSection::WashBay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceSection::Garage => "GARAGE",
            ServiceSection::BodyShop => "BODY_SHOP",
            ServiceSection::PaintShop => "PAINT_SHOP",
            ServiceSection::WashBay => "WASH_BAY",
        }
    }

    /// Human-facing label shown in the section select.
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A line item attached to a job (a task or a spare part).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCostItem {
    pub name: String,
    pub cost: f64,
}

/// Job record as the backend stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "vehicleRegistrationNumber")]
    pub vehicle_registration_number: String,
    #[serde(rename = "serviceSection")]
    pub service_section: ServiceSection,
    #[serde(rename = "assignedEmployee")]
    pub assigned_employee: String,
    pub tasks: Vec<NamedCostItem>,
    #[serde(rename = "spareParts")]
    pub spare_parts: Vec<NamedCostItem>,
    pub status: String,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
}

/// Draft behind the job creation form. A job cannot exist without a
/// resolved vehicle and a resolved employee; everything else is derived
/// from those two at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    pub vehicle: Option<Vehicle>,
    pub employee: Option<Employee>,
    pub service_section: ServiceSection,
}

impl JobDraft {
    pub fn new() -> Self {
        Self {
            vehicle: None,
            employee: None,
            service_section: ServiceSection::Garage,
        }
    }

    /// Job ids follow the `JOB-<millis>` convention; the timestamp comes
    /// from the caller so this stays pure.
    pub fn job_id_from_millis(millis: u64) -> String {
        format!("JOB-{millis}")
    }

    /// New jobs start life as "Ongoing" with no tasks or spare parts.
    pub fn to_record(&self, job_id: String) -> Option<Job> {
        let vehicle = self.vehicle.as_ref()?;
        let employee = self.employee.as_ref()?;
        Some(Job {
            id: None,
            job_id,
            vehicle_registration_number: vehicle.registration_no.clone(),
            service_section: self.service_section,
            assigned_employee: employee.display_name(),
            tasks: Vec::new(),
            spare_parts: Vec::new(),
            status: "Ongoing".to_string(),
            total_cost: 0.0,
            owner_name: vehicle.owner_name.clone(),
            contact_no: vehicle.contact_no.clone(),
        })
    }
}

impl Default for JobDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDraft for JobDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.vehicle.is_none() {
            errors.set("vehicle", "A vehicle must be selected.");
        }
        if self.employee.is_none() {
            errors.set("employee", "An employee must be assigned.");
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

    fn vehicle() -> Vehicle {
        Vehicle {
            id: Some(4),
            registration_no: "CBA-4821".to_string(),
            vehicle_type: "Sedan".to_string(),
            owner_name: "Kasun Silva".to_string(),
            contact_no: "0712345678".to_string(),
        }
    }

    fn employee() -> Employee {
        Employee {
            emp_id: Some(9),
            firstname: "Nimal".to_string(),
            lastname: "Perera".to_string(),
            role: "Mechanic".to_string(),
            contact: "0771234567".to_string(),
            nic: "200012345678".to_string(),
            dob: "2000-01-20".to_string(),
            gender: "Male".to_string(),
            salary: 65000.0,
        }
    }

    #[test]
    fn test_both_selections_required() {
        let mut draft = JobDraft::new();
        let errors = draft.validate();
        assert!(errors.get("vehicle").is_some());
        assert!(errors.get("employee").is_some());

        draft.vehicle = Some(vehicle());
        let errors = draft.validate();
        assert!(errors.get("vehicle").is_none());
        assert!(errors.get("employee").is_some());

        draft.employee = Some(employee());
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_record_derivation() {
        let mut draft = JobDraft::new();
        draft.vehicle = Some(vehicle());
        draft.employee = Some(employee());
        draft.service_section = ServiceSection::BodyShop;

        let job = draft.to_record(JobDraft::job_id_from_millis(1718450000000)).unwrap();
        assert_eq!(job.job_id, "JOB-1718450000000");
        assert_eq!(job.vehicle_registration_number, "CBA-4821");
        assert_eq!(job.assigned_employee, "Nimal Perera");
        assert_eq!(job.owner_name, "Kasun Silva");
        assert_eq!(job.contact_no, "0712345678");
        assert_eq!(job.status, "Ongoing");
        assert!(job.tasks.is_empty() && job.spare_parts.is_empty());
        assert_eq!(job.total_cost, 0.0);
    }

    #[test]
    fn test_unresolved_draft_has_no_record() {
        assert!(JobDraft::new().to_record("JOB-1".to_string()).is_none());
    }

    #[test]
    fn test_service_section_wire_names() {
        assert_eq!(
            serde_json::to_string(&ServiceSection::BodyShop).unwrap(),
            "\"BODY_SHOP\""
        );
        assert_eq!(ServiceSection::WashBay.label(), "WASH BAY");
    }
}
