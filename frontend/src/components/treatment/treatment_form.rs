use shared::{HealthStatus, TreatmentForm};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TreatmentFormProps {
    pub form: TreatmentForm,
    pub submitting: bool,
    pub validation_errors: Vec<String>,
    pub submit_error: Option<String>,
    /// Treatment already recorded; only submit stays enabled
    pub locked: bool,
    pub max_date: String,
    pub on_cancel: Callback<()>,

    // Event handlers
    pub on_treatment_change: Callback<Event>,
    pub on_health_status_change: Callback<Event>,
    pub on_dosage_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_cost_change: Callback<Event>,
    pub on_notes_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(TreatmentFormView)]
pub fn treatment_form_view(props: &TreatmentFormProps) -> Html {
    html! {
        <section class="treatment-form-section">
            <h3>{"Record Treatment"}</h3>

            {if let Some(error) = props.submit_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if props.locked {
                html! {
                    <div class="form-message info">
                        {"The treatment was saved. The animal's health status still needs updating."}
                    </div>
                }
            } else { html! {} }}

            {if !props.validation_errors.is_empty() {
                html! {
                    <div class="form-message info">
                        <ul>
                            {for props.validation_errors.iter().map(|error| {
                                html! { <li>{error}</li> }
                            })}
                        </ul>
                    </div>
                }
            } else { html! {} }}

            <form class="treatment-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="treatment-given">{"Treatment given"}</label>
                    <input
                        type="text"
                        id="treatment-given"
                        placeholder="Vaccine, dewormer, antibiotic..."
                        value={props.form.treatment_given.clone()}
                        onchange={props.on_treatment_change.clone()}
                        disabled={props.submitting || props.locked}
                    />
                </div>

                <div class="form-group">
                    <label for="health-status">{"Health status after treatment"}</label>
                    <select
                        id="health-status"
                        onchange={props.on_health_status_change.clone()}
                        disabled={props.submitting || props.locked}
                    >
                        {for HealthStatus::SELECTABLE.into_iter().map(|status| html! {
                            <option value={status.as_str()} selected={status == props.form.health_status}>
                                {status.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="dosage">{"Dosage"}</label>
                        <input
                            type="text"
                            id="dosage"
                            placeholder="5 ml"
                            value={props.form.dosage.clone()}
                            onchange={props.on_dosage_change.clone()}
                            disabled={props.submitting || props.locked}
                        />
                    </div>

                    <div class="form-group">
                        <label for="treatment-date">{"Date"}</label>
                        <input
                            type="date"
                            id="treatment-date"
                            max={props.max_date.clone()}
                            value={props.form.date.clone()}
                            onchange={props.on_date_change.clone()}
                            disabled={props.submitting || props.locked}
                        />
                    </div>

                    <div class="form-group">
                        <label for="cost">{"Cost (dollars)"}</label>
                        <input
                            type="number"
                            id="cost"
                            placeholder="0.00"
                            step="0.01"
                            min="0"
                            value={props.form.cost.clone()}
                            onchange={props.on_cost_change.clone()}
                            disabled={props.submitting || props.locked}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <textarea
                        id="notes"
                        rows="3"
                        value={props.form.notes.clone()}
                        onchange={props.on_notes_change.clone()}
                        disabled={props.submitting || props.locked}
                    />
                </div>

                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" disabled={props.submitting} onclick={
                        let on_cancel = props.on_cancel.clone();
                        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
                    }>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                        {if props.submitting {
                            "Saving..."
                        } else if props.locked {
                            "Retry health update"
                        } else {
                            "Save treatment"
                        }}
                    </button>
                </div>
            </form>
        </section>
    }
}
