use shared::LoadState;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{ScheduleFilterTabs, ScheduleTable};
use crate::hooks::use_schedule_filter::use_schedule_filter;
use crate::hooks::use_schedules::use_schedules;
use crate::routes::{Route, ScheduleQuery};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ScheduleViewContainerProps {
    pub api_client: ApiClient,
}

/// The schedules page: filter tabs over the assigned schedule list
#[function_component(ScheduleViewContainer)]
pub fn schedule_view_container(props: &ScheduleViewContainerProps) -> Html {
    let filter = use_schedule_filter();
    let schedules = use_schedules(&props.api_client, filter.filter);
    let navigator = use_navigator();

    let view = &schedules.view;
    let today = schedules.today;
    let visible: Vec<_> = view.visible(today).into_iter().cloned().collect();

    let on_open = {
        let active_filter = view.active_filter();
        Callback::from(move |id: String| {
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            let route = Route::ScheduleDetail { id };
            if let Err(e) = navigator.push_with_query(&route, &ScheduleQuery::for_filter(active_filter)) {
                Logger::warn_with_component("schedules", &format!("Failed to open schedule: {}", e));
            }
        })
    };

    let on_reload = {
        let reload = schedules.reload.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    html! {
        <section class="schedules-section">
            <div class="section-header">
                <h2>{"Treatment Schedules"}</h2>
                <button type="button" class="btn btn-secondary" onclick={on_reload} disabled={view.is_loading()}>
                    {"Refresh"}
                </button>
            </div>

            <ScheduleFilterTabs
                active={view.active_filter()}
                counts={view.counts(today)}
                on_select={filter.set_filter.clone()}
            />

            {match view.load_state() {
                LoadState::Loading => html! { <div class="loading">{"Loading schedules..."}</div> },
                LoadState::Failed(error) => html! {
                    <div class="form-message error">
                        {error.clone()}
                        <button type="button" class="btn btn-link" onclick={
                            let reload = schedules.reload.clone();
                            Callback::from(move |_: MouseEvent| reload.emit(()))
                        }>{"Try again"}</button>
                    </div>
                },
                LoadState::Loaded(_) => html! {
                    <ScheduleTable
                        schedules={visible}
                        active_filter={view.active_filter()}
                        {today}
                        {on_open}
                    />
                },
            }}
        </section>
    }
}
