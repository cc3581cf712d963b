use serde::{Deserialize, Serialize};

use crate::shared::form_session::FormDraft;
use crate::shared::masking::{MaskLayout, SegmentedValue, ELECTRICITY_ACCOUNT, WATER_ACCOUNT};
use crate::shared::validation::{self, FieldErrors};

/// The two billing schemas. Their account layouts and meter formats do not
/// overlap, so the form treats a type switch as starting over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingType {
    Electricity,
    Water,
}

impl BillingType {
    pub fn account_layout(self) -> MaskLayout {
        match self {
            BillingType::Electricity => ELECTRICITY_ACCOUNT,
            BillingType::Water => WATER_ACCOUNT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BillingType::Electricity => "Electricity",
            BillingType::Water => "Water",
        }
    }
}

/// Utility bill record as the backend stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityBill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Billing_Acc_No")]
    pub billing_acc_no: u64,
    #[serde(rename = "Type")]
    pub billing_type: BillingType,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Meter_No")]
    pub meter_no: String,
    #[serde(rename = "Unit_Price")]
    pub unit_price: f64,
}

/// Draft behind the utility bill form. The account number is never typed as
/// one field; it lives in the segmented mask until submission composes it.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityBillDraft {
    pub billing_type: BillingType,
    pub address: String,
    pub meter_no: String,
    pub unit_price: String,
    pub account: SegmentedValue,
}

impl UtilityBillDraft {
    pub fn new() -> Self {
        Self {
            billing_type: BillingType::Electricity,
            address: String::new(),
            meter_no: String::new(),
            unit_price: String::new(),
            account: SegmentedValue::empty(ELECTRICITY_ACCOUNT),
        }
    }

    pub fn from_record(record: &UtilityBill) -> Self {
        Self {
            billing_type: record.billing_type,
            address: record.address.clone(),
            meter_no: record.meter_no.clone(),
            unit_price: format!("{}", record.unit_price),
            account: SegmentedValue::decompose(
                record.billing_type.account_layout(),
                record.billing_acc_no,
            ),
        }
    }

    /// Switching the billing type abandons the previous type's meter number
    /// and account segments; the caller also clears the error map.
    pub fn switch_type(&mut self, billing_type: BillingType) {
        if self.billing_type == billing_type {
            return;
        }
        self.billing_type = billing_type;
        self.meter_no.clear();
        self.account = SegmentedValue::empty(billing_type.account_layout());
    }

    /// Meter input is digit-only at the keystroke level for water;
    /// electricity meters keep the raw text (letter prefix) and rely on
    /// validation at submit time.
    pub fn set_meter_no(&mut self, raw: &str) {
        self.meter_no = match self.billing_type {
            BillingType::Water => raw.chars().filter(|c| c.is_ascii_digit()).collect(),
            BillingType::Electricity => raw.to_string(),
        };
    }

    /// Plain record for persistence; `None` while the account segments are
    /// incomplete or the price does not parse.
    pub fn to_record(&self, id: Option<i64>) -> Option<UtilityBill> {
        Some(UtilityBill {
            id,
            billing_acc_no: self.account.compose()?,
            billing_type: self.billing_type,
            address: self.address.clone(),
            meter_no: self.meter_no.clone(),
            unit_price: self.unit_price.trim().parse().ok()?,
        })
    }
}

impl Default for UtilityBillDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDraft for UtilityBillDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.address.trim().is_empty() {
            errors.set("address", "Address is required");
        }
        if self.meter_no.is_empty() {
            errors.set("meter_no", "Meter number is required");
        } else {
            match self.billing_type {
                BillingType::Water => {
                    if !validation::is_digits_range(&self.meter_no, 9, 10) {
                        errors.set("meter_no", "Water meter number must be 9-10 digits");
                    }
                }
                BillingType::Electricity => {
                    if !is_electricity_meter(&self.meter_no) {
                        errors.set(
                            "meter_no",
                            "Electricity meter number must be 1 letter followed by 7 digits",
                        );
                    }
                }
            }
        }
        if self.unit_price.is_empty() {
            errors.set("unit_price", "Unit price is required");
        } else if !validation::is_valid_price(&self.unit_price) {
            errors.set("unit_price", "Please enter a valid price (e.g. 12.34)");
        }
        if !self.account.is_complete() {
            let message = match self.billing_type {
                BillingType::Electricity => "Please complete all 10 digits",
                BillingType::Water => {
                    "Please complete all fields with the correct number of digits"
                }
            };
            errors.set("billing_acc_no", message);
        }
        errors
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

fn is_electricity_meter(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.len() == 8
        && chars[0].is_ascii_alphabetic()
        && chars[1..].iter().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_session::FormDraft;

    fn valid_water_draft() -> UtilityBillDraft {
        let mut draft = UtilityBillDraft::new();
        draft.switch_type(BillingType::Water);
        draft.address = "12 Galle Road, Panadura".to_string();
        draft.set_meter_no("123456789");
        draft.unit_price = "42.50".to_string();
        for (index, group) in ["12", "34", "567", "890", "12"].iter().enumerate() {
            draft.account.set_segment(index, group);
        }
        draft
    }

    #[test]
    fn test_water_draft_composes_record() {
        let record = valid_water_draft().to_record(None).unwrap();
        assert_eq!(record.billing_acc_no, 123456789012);
        assert_eq!(record.unit_price, 42.5);
        assert!(valid_water_draft().validate().is_empty());
    }

    #[test]
    fn test_meter_rules_branch_on_type() {
        let mut draft = valid_water_draft();
        draft.set_meter_no("12345678");
        assert_eq!(
            draft.validate().get("meter_no"),
            Some("Water meter number must be 9-10 digits")
        );

        let mut draft = UtilityBillDraft::new();
        draft.meter_no = "A1234567".to_string();
        assert!(draft.validate().get("meter_no").is_none());
        draft.meter_no = "A123456".to_string();
        assert_eq!(
            draft.validate().get("meter_no"),
            Some("Electricity meter number must be 1 letter followed by 7 digits")
        );
        draft.meter_no = "12345678".to_string();
        assert!(draft.validate().get("meter_no").is_some());
    }

    #[test]
    fn test_water_meter_input_filters_digits() {
        let mut draft = valid_water_draft();
        draft.set_meter_no("12ab34");
        assert_eq!(draft.meter_no, "1234");
    }

    #[test]
    fn test_incomplete_segments_flagged_per_type() {
        let mut draft = UtilityBillDraft::new();
        assert_eq!(
            draft.validate().get("billing_acc_no"),
            Some("Please complete all 10 digits")
        );
        draft.switch_type(BillingType::Water);
        assert_eq!(
            draft.validate().get("billing_acc_no"),
            Some("Please complete all fields with the correct number of digits")
        );
    }

    #[test]
    fn test_switch_type_clears_meter_and_segments() {
        let mut draft = valid_water_draft();
        draft.switch_type(BillingType::Electricity);
        assert_eq!(draft.meter_no, "");
        assert_eq!(
            draft.account,
            SegmentedValue::empty(ELECTRICITY_ACCOUNT)
        );
        // switching to the already-active type changes nothing
        let before = draft.clone();
        draft.switch_type(BillingType::Electricity);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_switch_type_with_session_drops_errors_too() {
        use crate::shared::form_session::FormSession;

        let mut session = FormSession::create(UtilityBillDraft::new());
        // a failed submit populates the error map
        assert!(session.begin_submit().is_none());
        assert!(!session.errors().is_empty());

        session.update(|d| d.switch_type(BillingType::Water));
        session.clear_errors();
        assert!(session.errors().is_empty());
        assert_eq!(session.draft().meter_no, "");
        assert_eq!(session.draft().account, SegmentedValue::empty(WATER_ACCOUNT));
    }

    #[test]
    fn test_edit_mode_reseeds_segments_from_record() {
        let record = valid_water_draft().to_record(Some(3)).unwrap();
        let draft = UtilityBillDraft::from_record(&record);
        assert_eq!(draft.account.segment(2), "567");
        assert_eq!(draft.unit_price, "42.5");
        assert_eq!(draft.account.compose(), Some(record.billing_acc_no));
    }

    #[test]
    fn test_wire_casing() {
        let record = valid_water_draft().to_record(Some(3)).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Billing_Acc_No\":123456789012"));
        assert!(json.contains("\"Type\":\"Water\""));
        assert!(json.contains("\"Meter_No\""));
        assert!(json.contains("\"Unit_Price\""));
    }
}
