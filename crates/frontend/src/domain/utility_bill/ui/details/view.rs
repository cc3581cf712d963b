use super::view_model::{segment_input_id, UtilityBillDetailsViewModel};
use contracts::domain::utility_bill::aggregate::BillingType;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn UtilityBillDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = UtilityBillDetailsViewModel::new();
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
        <div class="details-container utility-bill-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit Utility Bill" } else { "New Utility Bill" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.session.get().general_error().map(|e| view! { <div class="error">{e.to_string()}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label>"Billing Type"</label>
                    <div class="billing-type-toggle">
                        {[BillingType::Electricity, BillingType::Water]
                            .into_iter()
                            .map(|billing_type| {
                                let vm = vm_clone.clone();
                                let vm_active = vm_clone.clone();
                                view! {
                                    <label
                                        class="billing-type-toggle__option"
                                        class=(
                                            "billing-type-toggle__option--active",
                                            move || vm_active.session.get().draft().billing_type == billing_type,
                                        )
                                    >
                                        <input
                                            type="radio"
                                            name="billing-type"
                                            value=billing_type.as_str()
                                            prop:checked={
                                                let vm = vm_clone.clone();
                                                move || vm.session.get().draft().billing_type == billing_type
                                            }
                                            on:change=move |_| vm.switch_billing_type(billing_type)
                                        />
                                        {billing_type.as_str()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="form-group">
                    <label>"Billing Account Number"</label>
                    <div class="account-segments">
                        {
                            let vm = vm_clone.clone();
                            move || {
                                let session = vm.session.get();
                                let draft = session.draft();
                                let billing_type = draft.billing_type;
                                let layout = billing_type.account_layout();
                                let vm = vm.clone();
                                (0..layout.segment_count())
                                    .map(|index| {
                                        let width = layout.widths[index];
                                        let value = draft.account.segment(index).to_string();
                                        let vm = vm.clone();
                                        view! {
                                            <input
                                                type="text"
                                                id=segment_input_id(billing_type, index)
                                                class="account-segments__box"
                                                prop:value=value
                                                maxlength=width.to_string()
                                                placeholder={"X".repeat(width)}
                                                on:input=move |ev| {
                                                    vm.set_account_segment(index, event_target_value(&ev))
                                                }
                                            />
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </div>
                    {field_error("billing_acc_no")}
                </div>

                <div class="form-group">
                    <label for="meter-no">"Meter Number"</label>
                    <input
                        type="text"
                        id="meter-no"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().meter_no.clone()
                        }
                        maxlength={
                            let vm = vm_clone.clone();
                            move || match vm.session.get().draft().billing_type {
                                BillingType::Water => "10",
                                BillingType::Electricity => "8",
                            }
                        }
                        placeholder={
                            let vm = vm_clone.clone();
                            move || match vm.session.get().draft().billing_type {
                                BillingType::Water => "Enter 9-10 digit meter number",
                                BillingType::Electricity => "Enter meter number (e.g. A1234567)",
                            }
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_meter_no(event_target_value(&ev))
                        }
                    />
                    {field_error("meter_no")}
                </div>

                <div class="form-group">
                    <label for="address">"Address"</label>
                    <textarea
                        id="address"
                        rows="3"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().address.clone()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_address(event_target_value(&ev))
                        }
                        placeholder="Enter utility bill address"
                    />
                    {field_error("address")}
                </div>

                <div class="form-group">
                    <label for="unit-price">"Unit Price"</label>
                    <input
                        type="number"
                        id="unit-price"
                        step="0.01"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().draft().unit_price.clone()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_unit_price(event_target_value(&ev))
                        }
                        placeholder="Enter unit price"
                    />
                    {field_error("unit_price")}
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
                                "Update"
                            } else {
                                "Save"
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
