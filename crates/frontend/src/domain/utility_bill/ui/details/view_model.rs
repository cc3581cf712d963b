use super::model;
use contracts::domain::utility_bill::aggregate::{BillingType, UtilityBillDraft};
use contracts::shared::form_session::FormSession;
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::dom_utils::focus_input;

/// DOM id of one account-number box; the mask's auto-advance focuses the
/// next one through this naming scheme.
pub fn segment_input_id(billing_type: BillingType, index: usize) -> String {
    match billing_type {
        BillingType::Electricity => format!("electricity-billing-digit{}", index + 1),
        BillingType::Water => format!("water-billing-group{}", index + 1),
    }
}

/// ViewModel for the utility bill details form.
#[derive(Clone)]
pub struct UtilityBillDetailsViewModel {
    pub session: RwSignal<FormSession<UtilityBillDraft>>,
}

impl UtilityBillDetailsViewModel {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(FormSession::create(UtilityBillDraft::new())),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.session.get().is_editing()
    }

    /// Load form data from server if an ID is provided
    pub fn load_if_needed(&self, id: Option<i64>) {
        if let Some(existing_id) = id {
            let session = self.session;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(bill) => session.update(|s| {
                        s.reseed(Some(existing_id), || UtilityBillDraft::from_record(&bill))
                    }),
                    Err(e) => session.update(|s| {
                        s.set_general_error(format!("Failed to load utility bill: {e}"))
                    }),
                }
            });
        }
    }

    /// Switching billing type starts the account over: meter number, all
    /// segments, and every error are dropped.
    pub fn switch_billing_type(&self, billing_type: BillingType) {
        self.session.update(|s| {
            s.update(|d| d.switch_type(billing_type));
            s.clear_errors();
        });
    }

    pub fn set_address(&self, value: String) {
        self.session.update(|s| {
            s.update(|d| d.address = value);
            s.clear_field_error("address");
        });
    }

    pub fn set_meter_no(&self, value: String) {
        self.session.update(|s| {
            s.update(|d| d.set_meter_no(&value));
            s.clear_field_error("meter_no");
        });
    }

    pub fn set_unit_price(&self, value: String) {
        self.session.update(|s| {
            s.update(|d| d.unit_price = value);
            s.clear_field_error("unit_price");
        });
    }

    /// One keystroke into one account box. When the box fills, focus hops
    /// to the next one.
    pub fn set_account_segment(&self, index: usize, value: String) {
        let mut advance = None;
        let mut billing_type = BillingType::Electricity;
        self.session.update(|s| {
            s.update(|d| {
                advance = d.account.set_segment(index, &value);
                billing_type = d.billing_type;
            });
            s.clear_field_error("billing_acc_no");
        });
        if let Some(next) = advance {
            focus_input(&segment_input_id(billing_type, next));
        }
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let mut claimed = None;
        self.session.update(|s| claimed = s.begin_submit());
        let Some(draft) = claimed else {
            return;
        };

        let editing_id = self.session.with_untracked(|s| s.editing_id());
        // begin_submit only succeeds once the segments are complete and the
        // price parses, so the record is always present here
        let Some(record) = draft.to_record(editing_id) else {
            self.session.update(|s| {
                s.finish_submit(Err(contracts::shared::form_session::SaveError::general()))
            });
            return;
        };

        let session = self.session;
        let on_saved_cb = on_saved.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match editing_id {
                Some(_) => model::update(&record).await,
                None => model::create(&record).await,
            };
            let saved = outcome.is_ok();
            session.update(|s| s.finish_submit(outcome));
            if saved {
                (on_saved_cb)(());
            }
        });
    }
}
