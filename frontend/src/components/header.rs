use yew::prelude::*;

use super::notification_bell::NotificationBell;
use crate::services::api::ApiClient;
use crate::services::date_utils::{self, format_date_for_display};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub api_client: ApiClient,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let today = date_utils::today().format("%Y-%m-%d").to_string();

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Herd Treatment Schedule"}</h1>
                <div class="header-right">
                    <span class="today-display">{format_date_for_display(&today)}</span>
                    <div class="header-menus">
                        <NotificationBell api_client={props.api_client.clone()} />
                    </div>
                </div>
            </div>
        </header>
    }
}
