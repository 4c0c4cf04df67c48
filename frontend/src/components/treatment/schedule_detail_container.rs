use shared::ScheduleRecord;
use yew::prelude::*;
use yew_router::prelude::*;

use super::TreatmentFormView;
use crate::hooks::use_schedule_detail::{use_schedule_detail, ScheduleDetailState};
use crate::hooks::use_schedule_filter::use_schedule_filter;
use crate::hooks::use_treatment_form::use_treatment_form;
use crate::services::api::ApiClient;
use crate::services::date_utils::{self, format_date_for_display};

#[derive(Properties, PartialEq)]
pub struct ScheduleDetailContainerProps {
    pub api_client: ApiClient,
    pub schedule_id: String,
}

#[derive(Properties, PartialEq)]
struct ScheduleSummaryProps {
    schedule: ScheduleRecord,
}

#[function_component(ScheduleSummary)]
fn schedule_summary(props: &ScheduleSummaryProps) -> Html {
    let schedule = &props.schedule;
    let animal = schedule.animal_id.summary();

    html! {
        <dl class="schedule-summary">
            <dt>{"Schedule"}</dt>
            <dd>{schedule.display_label()}</dd>
            <dt>{"Animal"}</dt>
            <dd>{schedule.animal_id.display_name()}</dd>
            {if let Some(species) = animal.and_then(|a| a.species.clone()) {
                html! { <><dt>{"Species"}</dt><dd>{species}</dd></> }
            } else { html! {} }}
            {if let Some(status) = animal.and_then(|a| a.health_status) {
                html! { <><dt>{"Current health"}</dt><dd>{status.label()}</dd></> }
            } else { html! {} }}
            <dt>{"Scheduled for"}</dt>
            <dd>{format_date_for_display(&schedule.scheduled_date)}</dd>
            <dt>{"Status"}</dt>
            <dd>{schedule.status.as_str()}</dd>
            {if let Some(notes) = schedule.notes.as_ref() {
                html! { <><dt>{"Notes"}</dt><dd>{notes}</dd></> }
            } else { html! {} }}
        </dl>
    }
}

/// Detail page for one schedule, with the treatment form while it is still pending.
/// Leaving the page, by saving or cancelling, returns to the list under the filter
/// it was opened from.
#[function_component(ScheduleDetailContainer)]
pub fn schedule_detail_container(props: &ScheduleDetailContainerProps) -> Html {
    let detail = use_schedule_detail(&props.api_client, &props.schedule_id);
    let filter = use_schedule_filter();

    let back_to_list = {
        let set_filter = filter.set_filter.clone();
        let active = filter.filter;
        Callback::from(move |_: ()| set_filter.emit(active))
    };

    let schedule = match &detail {
        ScheduleDetailState::Loaded(schedule) => Some(schedule.clone()),
        _ => None,
    };
    let treatment = use_treatment_form(&props.api_client, schedule, back_to_list.clone());

    let back_link = {
        let back_to_list = back_to_list.clone();
        html! {
            <button type="button" class="btn btn-link" onclick={Callback::from(move |_: MouseEvent| back_to_list.emit(()))}>
                {"← Back to schedules"}
            </button>
        }
    };

    let body = match &detail {
        ScheduleDetailState::Loading => html! { <div class="loading">{"Loading schedule..."}</div> },
        ScheduleDetailState::Failed(error) => html! { <div class="form-message error">{error}</div> },
        ScheduleDetailState::Loaded(schedule) => html! {
            <>
                <ScheduleSummary schedule={schedule.clone()} />
                {if schedule.is_pending() {
                    let state = &treatment.state;
                    let actions = &treatment.actions;
                    html! {
                        <TreatmentFormView
                            form={state.form.clone()}
                            submitting={state.submitting}
                            validation_errors={state.validation_errors.clone()}
                            submit_error={state.submit_error.clone()}
                            locked={state.locked}
                            max_date={date_utils::today().format("%Y-%m-%d").to_string()}
                            on_cancel={back_to_list.clone()}
                            on_treatment_change={actions.on_treatment_change.clone()}
                            on_health_status_change={actions.on_health_status_change.clone()}
                            on_dosage_change={actions.on_dosage_change.clone()}
                            on_date_change={actions.on_date_change.clone()}
                            on_cost_change={actions.on_cost_change.clone()}
                            on_notes_change={actions.on_notes_change.clone()}
                            on_submit={actions.submit.clone()}
                        />
                    }
                } else {
                    html! {
                        <div class="form-message info">
                            {format!("This schedule is already {}; no treatment can be recorded.", schedule.status)}
                        </div>
                    }
                }}
            </>
        },
    };

    html! {
        <section class="schedule-detail-section">
            {back_link}
            {body}
        </section>
    }
}
