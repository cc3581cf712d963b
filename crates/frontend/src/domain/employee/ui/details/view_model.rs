use super::model;
use contracts::domain::employee::aggregate::EmployeeDraft;
use contracts::shared::form_session::FormSession;
use contracts::shared::validation;
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::date_utils::today_local;

/// ViewModel for the employee details form.
///
/// Keystroke filters run before a value reaches the draft: a rejected
/// keystroke leaves the previous value (and the input) untouched.
#[derive(Clone)]
pub struct EmployeeDetailsViewModel {
    pub session: RwSignal<FormSession<EmployeeDraft>>,
}

impl EmployeeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(FormSession::create(EmployeeDraft::new(today_local()))),
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
                    Ok(employee) => session.update(|s| {
                        s.reseed(Some(existing_id), || {
                            EmployeeDraft::from_record(&employee, today_local())
                        })
                    }),
                    Err(e) => session
                        .update(|s| s.set_general_error(format!("Failed to load employee: {e}"))),
                }
            });
        }
    }

    pub fn set_firstname(&self, value: String) {
        if !validation::accepts_letters(&value) {
            self.reject_keystroke();
            return;
        }
        self.session.update(|s| {
            s.update(|d| d.firstname = value);
            s.clear_field_error("firstname");
        });
    }

    pub fn set_lastname(&self, value: String) {
        if !validation::accepts_letters(&value) {
            self.reject_keystroke();
            return;
        }
        self.session.update(|s| {
            s.update(|d| d.lastname = value);
            s.clear_field_error("lastname");
        });
    }

    pub fn set_role(&self, value: String) {
        self.session.update(|s| {
            s.update(|d| d.role = value);
            s.clear_field_error("role");
        });
    }

    pub fn set_contact(&self, value: String) {
        if !validation::accepts_digits(&value, 10) {
            self.reject_keystroke();
            return;
        }
        self.session.update(|s| {
            s.update(|d| d.contact = value);
            s.clear_field_error("contact");
        });
    }

    pub fn set_nic(&self, value: String) {
        if !validation::accepts_nic(&value) {
            self.reject_keystroke();
            return;
        }
        self.session.update(|s| {
            s.update(|d| d.nic = value);
            s.clear_field_error("nic");
        });
    }

    /// A rejected keystroke leaves the draft untouched, but the controlled
    /// input still needs a notification so its value snaps back.
    fn reject_keystroke(&self) {
        self.session.update(|_| {});
    }

    pub fn set_dob(&self, value: String) {
        self.session.update(|s| {
            s.update(|d| d.dob = value);
            s.clear_field_error("dob");
        });
    }

    pub fn set_gender(&self, value: String) {
        self.session.update(|s| {
            s.update(|d| d.gender = value);
            s.clear_field_error("gender");
        });
    }

    pub fn set_salary(&self, value: String) {
        self.session.update(|s| {
            s.update(|d| d.salary = value);
            s.clear_field_error("salary");
        });
    }

    /// Validate and save; the list refresh callback runs only after the
    /// backend confirmed the write.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let mut claimed = None;
        self.session.update(|s| claimed = s.begin_submit());
        let Some(draft) = claimed else {
            return;
        };

        let editing_id = self.session.with_untracked(|s| s.editing_id());
        let record = draft.to_record(editing_id);
        let session = self.session;
        let on_saved_cb = on_saved.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match editing_id {
                Some(id) => model::update(id, &record).await,
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
