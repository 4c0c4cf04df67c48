use serde::{Deserialize, Serialize};
use shared::ScheduleFilter;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/schedules")]
    Schedules,
    #[at("/schedules/:id")]
    ScheduleDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string carried by the schedule routes (`?filter=missed`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

impl ScheduleQuery {
    pub fn for_filter(filter: ScheduleFilter) -> Self {
        Self {
            filter: Some(filter.as_str().to_string()),
        }
    }

    pub fn filter(&self) -> ScheduleFilter {
        ScheduleFilter::from_query_value(self.filter.as_deref())
    }
}
