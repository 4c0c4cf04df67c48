use std::ops::Deref;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use shared::{NotificationAction, NotificationState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "notifications";
const NOTIFICATION_POLL_MS: u32 = 60_000;

/// [`NotificationState`] as a Yew reducer
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NotificationList(NotificationState);

impl Deref for NotificationList {
    type Target = NotificationState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for NotificationList {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.0.reduce(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone)]
pub struct UseNotificationsActions {
    pub refresh: Callback<()>,
    pub mark_read: Callback<String>,
    pub mark_all_read: Callback<()>,
    /// Hide locally without touching the server
    pub dismiss: Callback<String>,
}

pub struct UseNotificationsResult {
    pub notifications: UseReducerHandle<NotificationList>,
    pub actions: UseNotificationsActions,
}

/// Notification list for the header bell. Read state only changes after the
/// API acknowledges it.
#[hook]
pub fn use_notifications(api_client: &ApiClient) -> UseNotificationsResult {
    let notifications = use_reducer(NotificationList::default);

    let refresh = {
        let api_client = api_client.clone();
        let dispatcher = notifications.dispatcher();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match api_client.get_notifications().await {
                    Ok(items) => dispatcher.dispatch(NotificationAction::Loaded(items)),
                    Err(e) => {
                        Logger::warn_with_component(COMPONENT, &format!("Failed to fetch notifications: {}", e));
                    }
                }
            });
        })
    };

    // Load on mount, then poll while the bell is on screen
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            let interval = Interval::new(NOTIFICATION_POLL_MS, move || refresh.emit(()));
            move || drop(interval)
        });
    }

    let mark_read = {
        let api_client = api_client.clone();
        let dispatcher = notifications.dispatcher();
        use_callback((), move |notification_id: String, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match api_client.mark_notification_read(&notification_id).await {
                    Ok(_) => dispatcher.dispatch(NotificationAction::MarkRead(notification_id)),
                    Err(e) => Logger::error_with_component(
                        COMPONENT,
                        &format!("Failed to mark {} read: {}", notification_id, e),
                    ),
                }
            });
        })
    };

    let mark_all_read = {
        let api_client = api_client.clone();
        let dispatcher = notifications.dispatcher();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match api_client.mark_all_notifications_read().await {
                    Ok(response) => {
                        Logger::debug_with_component(COMPONENT, &format!("Marked {} read", response.updated));
                        dispatcher.dispatch(NotificationAction::MarkAllRead);
                    }
                    Err(e) => Logger::error_with_component(COMPONENT, &format!("Failed to mark all read: {}", e)),
                }
            });
        })
    };

    let dismiss = {
        let dispatcher = notifications.dispatcher();
        use_callback((), move |notification_id: String, _| {
            dispatcher.dispatch(NotificationAction::Dismiss(notification_id));
        })
    };

    UseNotificationsResult {
        notifications,
        actions: UseNotificationsActions {
            refresh,
            mark_read,
            mark_all_read,
            dismiss,
        },
    }
}
