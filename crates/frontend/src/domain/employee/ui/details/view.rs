use super::view_model::EmployeeDetailsViewModel;
use contracts::domain::employee::aggregate::{GENDERS, ROLES};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn EmployeeDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new();
    vm.load_if_needed(id);

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
        <div class="details-container employee-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit Employee" } else { "Add a New Employee" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.session.get().general_error().map(|e| view! { <div class="error">{e.to_string()}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="firstname">"First Name"</label>
                    <input
                        type="text"
                        id="firstname"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().firstname.clone()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_firstname(event_target_value(&ev))
                        }
                        placeholder="First Name"
                    />
                    {field_error("firstname")}
                </div>

                <div class="form-group">
                    <label for="lastname">"Last Name"</label>
                    <input
                        type="text"
                        id="lastname"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().lastname.clone()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_lastname(event_target_value(&ev))
                        }
                        placeholder="Last Name"
                    />
                    {field_error("lastname")}
                </div>

                <div class="form-group">
                    <label for="role">"Role"</label>
                    <select
                        id="role"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().role.clone()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_role(event_target_value(&ev))
                        }
                    >
                        <option value="">"Select Role"</option>
                        {ROLES
                            .into_iter()
                            .map(|role| view! { <option value=role>{role}</option> })
                            .collect_view()}
                    </select>
                    {field_error("role")}
                </div>

                <div class="form-group">
                    <label for="contact">"Contact"</label>
                    <input
                        type="text"
                        id="contact"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().contact.clone()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_contact(event_target_value(&ev))
                        }
                        placeholder="10 digit contact number"
                        maxlength="10"
                    />
                    {field_error("contact")}
                </div>

                <div class="form-group">
                    <label for="nic">"NIC"</label>
                    <input
                        type="text"
                        id="nic"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().nic.clone()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_nic(event_target_value(&ev))
                        }
                        placeholder="NIC"
                        maxlength="12"
                    />
                    {field_error("nic")}
                </div>

                <div class="form-group">
                    <label for="dob">"Date of Birth"</label>
                    <input
                        type="date"
                        id="dob"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().dob.clone()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_dob(event_target_value(&ev))
                        }
                    />
                    {field_error("dob")}
                </div>

                <div class="form-group">
                    <label for="gender">"Gender"</label>
                    <select
                        id="gender"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().gender.clone()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_gender(event_target_value(&ev))
                        }
                    >
                        <option value="">"Select Gender"</option>
                        {GENDERS
                            .into_iter()
                            .map(|gender| view! { <option value=gender>{gender}</option> })
                            .collect_view()}
                    </select>
                    {field_error("gender")}
                </div>

                <div class="form-group">
                    <label for="salary">"Salary"</label>
                    <input
                        type="number"
                        id="salary"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().salary.clone()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_salary(event_target_value(&ev))
                        }
                        placeholder="Salary"
                    />
                    {field_error("salary")}
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
                        move || {
                            if vm.session.get().is_submitting() {
                                "Saving..."
                            } else if vm.is_edit_mode()() {
                                "Update Employee"
                            } else {
                                "Add an Employee"
                            }
                        }
                    }
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
