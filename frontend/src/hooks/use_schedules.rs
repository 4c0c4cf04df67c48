//! # Schedules Hook
//!
//! Owns the schedules list view: fetching, cancellation and the active filter.
//!
//! ## Key Responsibilities
//! - Start a fetch on mount and whenever `reload` is called
//! - Abort the in-flight request when a newer fetch starts or the view unmounts
//! - Keep the view's filter in step with the URL
//!
//! Every fetch is tagged with a generation, so even a response that slips past
//! the abort signal is dropped by the reducer.

use std::ops::Deref;
use std::rc::Rc;

use chrono::NaiveDate;
use shared::{ScheduleFilter, ScheduleView, ScheduleViewAction};
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::error::ViewError;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

const COMPONENT: &str = "schedules";

/// [`ScheduleView`] as a Yew reducer
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScheduleViewState(ScheduleView);

impl Deref for ScheduleViewState {
    type Target = ScheduleView;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for ScheduleViewState {
    type Action = ScheduleViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.0.reduce(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub struct UseSchedulesResult {
    pub view: UseReducerHandle<ScheduleViewState>,
    /// Reference date used for classification on this render
    pub today: NaiveDate,
    pub reload: Callback<()>,
}

#[hook]
pub fn use_schedules(api_client: &ApiClient, filter: ScheduleFilter) -> UseSchedulesResult {
    let view = use_reducer(|| ScheduleViewState(ScheduleView::new(filter)));
    // Doubles as the fetch generation
    let fetch_generation = use_state(|| 1u64);
    let today = date_utils::today();

    {
        let dispatcher = view.dispatcher();
        use_effect_with(filter, move |filter| {
            dispatcher.dispatch(ScheduleViewAction::FilterChanged(*filter));
            || ()
        });
    }

    {
        let dispatcher = view.dispatcher();
        let api_client = api_client.clone();
        use_effect_with(*fetch_generation, move |generation| {
            let generation = *generation;
            let controller = match AbortController::new() {
                Ok(controller) => Some(controller),
                Err(_) => {
                    Logger::warn_with_component(COMPONENT, "AbortController unavailable; relying on generation check");
                    None
                }
            };
            let signal = controller.as_ref().map(|controller| controller.signal());

            dispatcher.dispatch(ScheduleViewAction::FetchStarted { generation });
            Logger::debug_with_component(COMPONENT, &format!("Fetching schedules (generation {})", generation));

            spawn_local(async move {
                let result = api_client.get_assigned_schedules(signal.as_ref()).await;
                if signal.as_ref().map_or(false, |signal| signal.aborted()) {
                    Logger::debug_with_component(COMPONENT, &format!("Discarded cancelled fetch {}", generation));
                    return;
                }

                match result {
                    Ok(records) => {
                        Logger::info_with_component(COMPONENT, &format!("Loaded {} schedules", records.len()));
                        dispatcher.dispatch(ScheduleViewAction::FetchSucceeded { generation, records });
                    }
                    Err(e) if e.is_aborted() => {
                        Logger::debug_with_component(COMPONENT, &format!("Fetch {} aborted", generation));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to fetch schedules: {}", e));
                        dispatcher.dispatch(ScheduleViewAction::FetchFailed {
                            generation,
                            message: ViewError::FetchFailure(e).to_string(),
                        });
                    }
                }
            });

            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    // Unmount: anything still in flight is ignored from here on
    {
        let dispatcher = view.dispatcher();
        use_effect_with((), move |_| {
            move || dispatcher.dispatch(ScheduleViewAction::Detached)
        });
    }

    let reload = {
        let fetch_generation = fetch_generation.clone();
        Callback::from(move |_: ()| fetch_generation.set(*fetch_generation + 1))
    };

    UseSchedulesResult { view, today, reload }
}
