//! # Herd Treatment Schedule Front End
//!
//! Yew single-page app for farm staff working through their assigned
//! treatment and vaccination schedules.
//!
//! ## Key Responsibilities
//! - Route between the schedule list (`/schedules?filter=...`) and a schedule's detail page
//! - Build one [`ApiClient`] for the whole app and hand it to the pages
//!
//! Classification, filtering and the view state machine live in the `shared` crate.

use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod error;
mod hooks;
mod routes;
mod services;

use components::header::Header;
use components::schedules::ScheduleViewContainer;
use components::treatment::ScheduleDetailContainer;
use routes::Route;
use services::api::ApiClient;

fn switch(route: Route, api_client: &ApiClient) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Schedules} /> },
        Route::Schedules => html! { <ScheduleViewContainer api_client={api_client.clone()} /> },
        Route::ScheduleDetail { id } => html! {
            <ScheduleDetailContainer key={id.clone()} api_client={api_client.clone()} schedule_id={id.clone()} />
        },
        Route::NotFound => html! {
            <section class="not-found">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Schedules}>{"Go to schedules"}</Link<Route>>
            </section>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());

    let render = {
        let api_client = (*api_client).clone();
        move |route: Route| switch(route, &api_client)
    };

    html! {
        <BrowserRouter>
            <div class="app">
                <Header api_client={(*api_client).clone()} />
                <main class="main">
                    <div class="container">
                        <Switch<Route> {render} />
                    </div>
                </main>
            </div>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
