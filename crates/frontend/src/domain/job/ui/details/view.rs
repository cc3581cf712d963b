use super::view_model::JobDetailsViewModel;
use contracts::domain::job::aggregate::ServiceSection;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn JobDetails(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = JobDetailsViewModel::new();

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    let field_error = {
        let vm = vm_clone.clone();
        move |field: &'static str| {
            let vm = vm.clone();
            move || {
                vm.session
                    .get()
                    .error(field)
                    .map(|e| view! { <p class="field-error">{e.to_string()}</p> })
            }
        }
    };

    view! {
        <div class="details-container job-details">
            <div class="details-header">
                <h3>"Create New Job"</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.session.get().general_error().map(|e| view! { <div class="error">{e.to_string()}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="job-vehicle">"Vehicle"</label>
                    <select
                        id="job-vehicle"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.select_vehicle(event_target_value(&ev).parse().ok())
                        }
                    >
                        <option value="">"Select Vehicle"</option>
                        {
                            let vm = vm_clone.clone();
                            move || {
                                vm.vehicles
                                    .get()
                                    .into_iter()
                                    .map(|vehicle| {
                                        let id = vehicle.id.unwrap_or_default();
                                        view! {
                                            <option value=id.to_string()>
                                                {format!(
                                                    "{} - {} ({})",
                                                    vehicle.registration_no,
                                                    vehicle.vehicle_type,
                                                    vehicle.owner_name,
                                                )}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </select>
                    {field_error("vehicle")}
                </div>

                {
                    let vm = vm_clone.clone();
                    move || {
                        vm.session.get().draft().vehicle.as_ref().map(|vehicle| {
                            view! {
                                <div class="job-details__vehicle-summary">
                                    <h4>"Vehicle Details"</h4>
                                    <p>"Registration Number: " {vehicle.registration_no.clone()}</p>
                                    <p>"Vehicle Type: " {vehicle.vehicle_type.clone()}</p>
                                    <p>"Owner Name: " {vehicle.owner_name.clone()}</p>
                                </div>
                            }
                        })
                    }
                }

                <div class="form-group">
                    <label for="job-section">"Service Section"</label>
                    <select
                        id="job-section"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().service_section.as_str()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_service_section(&event_target_value(&ev))
                        }
                    >
                        {ServiceSection::ALL
                            .into_iter()
                            .map(|section| {
                                view! { <option value=section.as_str()>{section.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="job-employee">"Assign Employee"</label>
                    <select
                        id="job-employee"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.select_employee(event_target_value(&ev).parse().ok())
                        }
                    >
                        <option value="">"Select Employee"</option>
                        {
                            let vm = vm_clone.clone();
                            move || {
                                vm.employees
                                    .get()
                                    .into_iter()
                                    .map(|employee| {
                                        let id = employee.emp_id.unwrap_or_default();
                                        view! {
                                            <option value=id.to_string()>
                                                {format!("{} - {}", employee.display_name(), employee.role)}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </select>
                    {field_error("employee")}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.session.get().is_submitting()
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || if vm.session.get().is_submitting() { "Creating..." } else { "Create Job" }
                    }
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
