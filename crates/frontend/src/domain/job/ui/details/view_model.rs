use super::model;
use contracts::domain::employee::aggregate::Employee;
use contracts::domain::job::aggregate::{JobDraft, ServiceSection};
use contracts::domain::vehicle::aggregate::Vehicle;
use contracts::shared::form_session::{FormSession, SaveError};
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::date_utils::now_millis;

/// ViewModel for the job creation form. Jobs are only ever created here;
/// task and status changes happen on the job list.
#[derive(Clone)]
pub struct JobDetailsViewModel {
    pub session: RwSignal<FormSession<JobDraft>>,
    pub vehicles: RwSignal<Vec<Vehicle>>,
    pub employees: RwSignal<Vec<Employee>>,
}

impl JobDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            session: RwSignal::new(FormSession::create(JobDraft::new())),
            vehicles: RwSignal::new(Vec::new()),
            employees: RwSignal::new(Vec::new()),
        };
        vm.load_choices();
        vm
    }

    /// The selects need the vehicle and employee registers up front.
    fn load_choices(&self) {
        let vehicles = self.vehicles;
        let employees = self.employees;
        let session = self.session;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_vehicles().await {
                Ok(v) => vehicles.set(v),
                Err(e) => {
                    session.update(|s| s.set_general_error(format!("Failed to load vehicles: {e}")))
                }
            }
            match model::fetch_employees().await {
                Ok(v) => employees.set(v),
                Err(e) => session
                    .update(|s| s.set_general_error(format!("Failed to load employees: {e}"))),
            }
        });
    }

    pub fn select_vehicle(&self, id: Option<i64>) {
        let vehicle = id.and_then(|id| {
            self.vehicles
                .get_untracked()
                .into_iter()
                .find(|v| v.id == Some(id))
        });
        self.session.update(|s| {
            s.update(|d| d.vehicle = vehicle);
            s.clear_field_error("vehicle");
        });
    }

    pub fn select_employee(&self, emp_id: Option<i64>) {
        let employee = emp_id.and_then(|id| {
            self.employees
                .get_untracked()
                .into_iter()
                .find(|e| e.emp_id == Some(id))
        });
        self.session.update(|s| {
            s.update(|d| d.employee = employee);
            s.clear_field_error("employee");
        });
    }

    pub fn set_service_section(&self, value: &str) {
        if let Some(section) = ServiceSection::parse(value) {
            self.session.update(|s| s.update(|d| d.service_section = section));
        }
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let mut claimed = None;
        self.session.update(|s| claimed = s.begin_submit());
        let Some(draft) = claimed else {
            return;
        };

        // validation guarantees both selections are resolved
        let Some(job) = draft.to_record(JobDraft::job_id_from_millis(now_millis())) else {
            self.session
                .update(|s| s.finish_submit(Err(SaveError::general())));
            return;
        };

        let session = self.session;
        let on_saved_cb = on_saved.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::create(&job).await;
            let saved = outcome.is_ok();
            session.update(|s| s.finish_submit(outcome));
            if saved {
                (on_saved_cb)(());
            }
        });
    }
}
