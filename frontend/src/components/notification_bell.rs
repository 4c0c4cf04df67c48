use yew::prelude::*;

use crate::hooks::use_notifications::use_notifications;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct NotificationBellProps {
    pub api_client: ApiClient,
}

#[function_component(NotificationBell)]
pub fn notification_bell(props: &NotificationBellProps) -> Html {
    let notifications = use_notifications(&props.api_client);
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        let refresh = notifications.actions.refresh.clone();
        Callback::from(move |_: MouseEvent| {
            if !*open {
                refresh.emit(());
            }
            open.set(!*open);
        })
    };

    let list = &notifications.notifications;
    let unread = list.unread_count();
    let actions = &notifications.actions;

    html! {
        <div class="notification-bell">
            <button type="button" class="bell-button" onclick={toggle} aria-label="Notifications">
                {"🔔"}
                {if unread > 0 {
                    html! { <span class="unread-badge">{unread}</span> }
                } else { html! {} }}
            </button>

            {if *open {
                html! {
                    <div class="dropdown notification-dropdown">
                        <div class="dropdown-header">
                            <span>{"Notifications"}</span>
                            <button type="button" class="btn btn-link" disabled={unread == 0} onclick={
                                let mark_all_read = actions.mark_all_read.clone();
                                Callback::from(move |_: MouseEvent| mark_all_read.emit(()))
                            }>{"Mark all read"}</button>
                        </div>

                        {if list.items().is_empty() {
                            html! { <div class="empty-state">{"No notifications"}</div> }
                        } else {
                            html! {
                                <ul class="notification-list">
                                    {for list.items().iter().map(|notification| {
                                        let mark_read = {
                                            let mark_read = actions.mark_read.clone();
                                            let id = notification.id.clone();
                                            Callback::from(move |_: MouseEvent| mark_read.emit(id.clone()))
                                        };
                                        let dismiss = {
                                            let dismiss = actions.dismiss.clone();
                                            let id = notification.id.clone();
                                            Callback::from(move |_: MouseEvent| dismiss.emit(id.clone()))
                                        };

                                        html! {
                                            <li key={notification.id.clone()} class={classes!("notification", (!notification.read).then_some("unread"))}>
                                                <span class="notification-message">{notification.message.clone()}</span>
                                                {if !notification.read {
                                                    html! {
                                                        <button type="button" class="btn btn-link" onclick={mark_read}>
                                                            {"Mark read"}
                                                        </button>
                                                    }
                                                } else { html! {} }}
                                                <button type="button" class="btn btn-link" onclick={dismiss} aria-label="Dismiss">
                                                    {"×"}
                                                </button>
                                            </li>
                                        }
                                    })}
                                </ul>
                            }
                        }}
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
