use super::view_model::RegistrationViewModel;
use crate::shared::components::{DateInput, PageHeader};
use crate::shared::icons::icon;
use contracts::domain::a001_user_entry::Field;
use contracts::enums::{Gender, Hobby};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Labeled text input bound to one draft field, with its inline error.
#[component]
fn TextField(
    vm: RegistrationViewModel,
    field: Field,
    /// `numeric` for age and pincode
    #[prop(optional)]
    inputmode: Option<&'static str>,
    #[prop(optional)]
    maxlength: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-group" class:form-group--error=move || vm.field_error(field).is_some()>
            <label for=field.name()>{field.label()}</label>
            <input
                type="text"
                id=field.name()
                class="form-input"
                inputmode=inputmode
                maxlength=maxlength
                prop:value=move || vm.field_value(field)
                on:input=move |ev| vm.on_input(field, event_target_value(&ev))
            />
            {move || vm.field_error(field).map(|msg| view! { <span class="form-error">{msg}</span> })}
        </div>
    }
}

#[component]
pub fn UserEntryDetails(vm: RegistrationViewModel) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <section class="details-container registration-form">
            <PageHeader title="Register Here!".to_string()>
                {()}
            </PageHeader>

            {move || vm.notice.get().map(|msg| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{msg}</span>
                </div>
            })}

            <form class="details-form" on:submit=on_submit novalidate=true>
                <div class="form-grid">
                    <TextField vm=vm field=Field::FirstName />
                    <TextField vm=vm field=Field::LastName />
                    <TextField vm=vm field=Field::Age inputmode="numeric" />

                    <div class="form-group">
                        <label for=Field::DateOfBirth.name()>{Field::DateOfBirth.label()}</label>
                        <DateInput
                            id=Field::DateOfBirth.name()
                            value=Signal::derive(move || vm.field_value(Field::DateOfBirth))
                            on_change=move |value: String| vm.on_input(Field::DateOfBirth, value)
                        />
                    </div>

                    <div class="form-group" class:form-group--error=move || vm.field_error(Field::Gender).is_some()>
                        <label for=Field::Gender.name()>{Field::Gender.label()}</label>
                        <select
                            id=Field::Gender.name()
                            class="form-input"
                            prop:value=move || vm.field_value(Field::Gender)
                            on:change=move |ev| vm.on_input(Field::Gender, event_target_value(&ev))
                        >
                            <option value="">"Select..."</option>
                            {Gender::all()
                                .into_iter()
                                .map(|g| view! { <option value=g.code()>{g.code()}</option> })
                                .collect_view()}
                        </select>
                        {move || vm.field_error(Field::Gender).map(|msg| view! { <span class="form-error">{msg}</span> })}
                    </div>

                    <fieldset class="form-group" class:form-group--error=move || vm.field_error(Field::Hobbies).is_some()>
                        <legend>{Field::Hobbies.label()}</legend>
                        <div class="checkbox-row">
                            {Hobby::all()
                                .into_iter()
                                .map(move |hobby| view! {
                                    <label class="checkbox-label">
                                        <input
                                            type="checkbox"
                                            value=hobby.code()
                                            prop:checked=move || vm.is_hobby_selected(hobby)
                                            on:change=move |ev| vm.toggle_hobby(hobby, event_target_checked(&ev))
                                        />
                                        {hobby.code()}
                                    </label>
                                })
                                .collect_view()}
                        </div>
                        {move || vm.field_error(Field::Hobbies).map(|msg| view! { <span class="form-error">{msg}</span> })}
                    </fieldset>

                    <TextField vm=vm field=Field::Address />
                    <TextField vm=vm field=Field::City />
                    <TextField vm=vm field=Field::Pincode inputmode="numeric" maxlength="6" />
                </div>

                <div class="details-actions">
                    <button type="submit" class="button button--primary">
                        {icon("save")}
                        {move || vm.submit_label()}
                    </button>
                    <Show when=move || vm.is_edit_mode()>
                        <button type="button" class="button button--secondary" on:click=move |_| vm.cancel_edit()>
                            {icon("cancel")}
                            {"Cancel"}
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
