use chrono::NaiveDate;
use shared::{classify, Bucket, ScheduleFilter, ScheduleRecord};
use yew::prelude::*;

use crate::services::date_utils::{format_date_for_display, relative_day_label};

#[derive(Properties, PartialEq)]
pub struct ScheduleTableProps {
    pub schedules: Vec<ScheduleRecord>,
    pub active_filter: ScheduleFilter,
    pub today: NaiveDate,
    pub on_open: Callback<String>,
}

fn empty_message(filter: ScheduleFilter) -> &'static str {
    match filter {
        ScheduleFilter::All => "No schedules are assigned to you.",
        ScheduleFilter::Today => "Nothing is due today.",
        ScheduleFilter::Missed => "No missed schedules.",
        ScheduleFilter::Upcoming => "No upcoming schedules.",
    }
}

/// Badge text: the bucket for pending schedules, the backend status otherwise
fn badge_text(schedule: &ScheduleRecord, bucket: Bucket) -> String {
    match bucket {
        Bucket::Completed => schedule.status.as_str().to_string(),
        Bucket::Undated => "no date".to_string(),
        other => other.as_str().to_string(),
    }
}

#[function_component(ScheduleTable)]
pub fn schedule_table(props: &ScheduleTableProps) -> Html {
    if props.schedules.is_empty() {
        return html! {
            <div class="empty-state">{empty_message(props.active_filter)}</div>
        };
    }

    html! {
        <div class="table-container">
            <table class="schedules-table">
                <thead>
                    <tr>
                        <th>{"Schedule"}</th>
                        <th>{"Animal"}</th>
                        <th>{"Date"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for props.schedules.iter().map(|schedule| {
                        let bucket = classify(schedule, props.today);
                        let relative = schedule
                            .scheduled_on()
                            .map(|date| relative_day_label(date, props.today));
                        let onclick = {
                            let on_open = props.on_open.clone();
                            let id = schedule.id.clone();
                            Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
                        };

                        html! {
                            <tr key={schedule.id.clone()} class={classes!("schedule-row", bucket.as_str())}>
                                <td class="schedule-name">{schedule.display_label()}</td>
                                <td>{schedule.animal_id.display_name()}</td>
                                <td>
                                    {format_date_for_display(&schedule.scheduled_date)}
                                    {if let Some(relative) = relative {
                                        html! { <span class="relative-date">{relative}</span> }
                                    } else { html! {} }}
                                </td>
                                <td>
                                    <span class={classes!("status-badge", bucket.as_str())}>
                                        {badge_text(schedule, bucket)}
                                    </span>
                                </td>
                                <td>
                                    {if schedule.is_pending() {
                                        html! {
                                            <button type="button" class="btn btn-primary" {onclick}>
                                                {"Record treatment"}
                                            </button>
                                        }
                                    } else {
                                        html! {
                                            <button type="button" class="btn btn-secondary" {onclick}>
                                                {"View"}
                                            </button>
                                        }
                                    }}
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
