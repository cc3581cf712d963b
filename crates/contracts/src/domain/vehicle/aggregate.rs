use serde::{Deserialize, Serialize};

/// Vehicle record, read-only on this side: the job form resolves a vehicle
/// before a job can be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "vehicleRegistrationNo")]
    pub registration_no: String,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
}
