use shared::ScheduleRecord;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::error::{ApiError, ViewError};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, Debug, PartialEq)]
pub enum ScheduleDetailState {
    Loading,
    Loaded(ScheduleRecord),
    Failed(String),
}

/// Loads one schedule with its animal populated; the request is aborted if
/// the id changes or the page unmounts first.
#[hook]
pub fn use_schedule_detail(api_client: &ApiClient, schedule_id: &str) -> ScheduleDetailState {
    let state = use_state(|| ScheduleDetailState::Loading);

    {
        let state = state.clone();
        let api_client = api_client.clone();
        use_effect_with(schedule_id.to_string(), move |schedule_id| {
            let schedule_id = schedule_id.clone();
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|controller| controller.signal());
            state.set(ScheduleDetailState::Loading);

            spawn_local(async move {
                let result = api_client.get_schedule(&schedule_id, signal.as_ref()).await;
                if signal.as_ref().map_or(false, |signal| signal.aborted()) {
                    return;
                }
                match result {
                    Ok(schedule) => state.set(ScheduleDetailState::Loaded(schedule)),
                    Err(ApiError::Aborted) => {}
                    Err(e) => {
                        Logger::error_with_component(
                            "schedule-detail",
                            &format!("Failed to load schedule {}: {}", schedule_id, e),
                        );
                        state.set(ScheduleDetailState::Failed(ViewError::DetailFetchFailure(e).to_string()));
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

    (*state).clone()
}
