use shared::ScheduleFilter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, ScheduleQuery};
use crate::services::logging::Logger;

pub struct UseScheduleFilterResult {
    /// Filter read from the `filter` query parameter
    pub filter: ScheduleFilter,
    /// Switch filters by pushing a new URL, so the choice survives reloads and can be shared
    pub set_filter: Callback<ScheduleFilter>,
}

#[hook]
pub fn use_schedule_filter() -> UseScheduleFilterResult {
    let location = use_location();
    let navigator = use_navigator();

    let filter = location
        .and_then(|location| location.query::<ScheduleQuery>().ok())
        .map(|query| query.filter())
        .unwrap_or_default();

    let set_filter = Callback::from(move |next: ScheduleFilter| {
        let Some(navigator) = navigator.as_ref() else {
            return;
        };
        if let Err(e) = navigator.push_with_query(&Route::Schedules, &ScheduleQuery::for_filter(next)) {
            Logger::warn_with_component("schedule-filter", &format!("Failed to update URL: {}", e));
        }
    });

    UseScheduleFilterResult { filter, set_filter }
}
