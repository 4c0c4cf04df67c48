use shared::{
    plan_treatment_submission, HealthStatus, RecordTreatmentRequest, ScheduleRecord, TreatmentForm,
    TreatmentSubmission,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::error::{ApiError, ViewError};
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

const COMPONENT: &str = "treatment-form";

#[derive(Clone, PartialEq)]
pub struct TreatmentFormState {
    pub form: TreatmentForm,
    pub submitting: bool,
    pub validation_errors: Vec<String>,
    pub submit_error: Option<String>,
    /// The treatment is recorded; only the health update is outstanding
    pub locked: bool,
}

#[derive(Clone)]
pub struct UseTreatmentFormActions {
    pub on_treatment_change: Callback<Event>,
    pub on_health_status_change: Callback<Event>,
    pub on_dosage_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_cost_change: Callback<Event>,
    pub on_notes_change: Callback<Event>,
    pub submit: Callback<()>,
}

pub struct UseTreatmentFormResult {
    pub state: TreatmentFormState,
    pub actions: UseTreatmentFormActions,
}

/// Current value of the input, select or textarea that fired `e`
fn event_value(e: &Event) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
        return Some(select.value());
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|textarea| textarea.value())
}

fn field_callback(
    form: &UseStateHandle<TreatmentForm>,
    accepted: &UseStateHandle<Option<RecordTreatmentRequest>>,
    apply: fn(&mut TreatmentForm, String),
) -> Callback<Event> {
    let form = form.clone();
    let locked = accepted.is_some();
    Callback::from(move |e: Event| {
        if locked {
            return;
        }
        if let Some(value) = event_value(&e) {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    })
}

/// Form state and submission for recording a treatment against `schedule`.
///
/// Submitting posts the treatment, then updates the animal's health status,
/// and only then emits `on_success`. Either call failing leaves the form as
/// typed with an inline error. Once the POST is accepted the fields lock and a
/// retry re-sends only the accepted health status.
#[hook]
pub fn use_treatment_form(
    api_client: &ApiClient,
    schedule: Option<ScheduleRecord>,
    on_success: Callback<()>,
) -> UseTreatmentFormResult {
    let form = use_state(|| TreatmentForm::new(date_utils::today()));
    let submitting = use_state(|| false);
    let validation_errors = use_state(Vec::<String>::new);
    let submit_error = use_state(|| None::<String>);
    // The request the backend accepted; a retry repeats only its health update
    let accepted = use_state(|| None::<RecordTreatmentRequest>);

    let on_treatment_change = field_callback(&form, &accepted, |form, value| form.treatment_given = value);
    let on_dosage_change = field_callback(&form, &accepted, |form, value| form.dosage = value);
    let on_date_change = field_callback(&form, &accepted, |form, value| form.date = value);
    let on_cost_change = field_callback(&form, &accepted, |form, value| form.cost = value);
    let on_notes_change = field_callback(&form, &accepted, |form, value| form.notes = value);
    let on_health_status_change = field_callback(&form, &accepted, |form, value| {
        if let Some(status) = HealthStatus::from_form_value(&value) {
            form.health_status = status;
        }
    });

    let submit = {
        let api_client = api_client.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let validation_errors = validation_errors.clone();
        let submit_error = submit_error.clone();
        let accepted = accepted.clone();

        Callback::from(move |_: ()| {
            if *submitting {
                return;
            }
            let Some(schedule) = schedule.as_ref() else {
                return;
            };

            submit_error.set(None);
            let today = date_utils::today();
            let submission = match plan_treatment_submission((*accepted).as_ref(), &form, schedule, today) {
                Ok(submission) => submission,
                Err(errors) => {
                    validation_errors.set(errors.iter().map(ToString::to_string).collect());
                    return;
                }
            };
            validation_errors.set(Vec::new());
            submitting.set(true);

            let api_client = api_client.clone();
            let submitting = submitting.clone();
            let submit_error = submit_error.clone();
            let accepted = accepted.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                let outcome = async {
                    let request = submission.request();
                    if let TreatmentSubmission::RecordThenUpdate(request) = &submission {
                        let treatment = api_client.record_treatment(request).await?;
                        accepted.set(Some(request.clone()));
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Recorded treatment {} for schedule {}", treatment.id, request.schedule_id),
                        );
                    }
                    api_client
                        .update_health_status(&request.animal_id, request.health_status)
                        .await?;
                    Ok::<(), ApiError>(())
                }
                .await;

                match outcome {
                    Ok(()) => on_success.emit(()),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Treatment submission failed: {}", e));
                        submit_error.set(Some(ViewError::SubmitFailure(e).to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    UseTreatmentFormResult {
        state: TreatmentFormState {
            form: (*form).clone(),
            submitting: *submitting,
            validation_errors: (*validation_errors).clone(),
            submit_error: (*submit_error).clone(),
            locked: accepted.is_some(),
        },
        actions: UseTreatmentFormActions {
            on_treatment_change,
            on_health_status_change,
            on_dosage_change,
            on_date_change,
            on_cost_change,
            on_notes_change,
            submit,
        },
    }
}
