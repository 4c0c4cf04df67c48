use shared::{BucketCounts, ScheduleFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScheduleFilterTabsProps {
    pub active: ScheduleFilter,
    pub counts: BucketCounts,
    pub on_select: Callback<ScheduleFilter>,
}

#[function_component(ScheduleFilterTabs)]
pub fn schedule_filter_tabs(props: &ScheduleFilterTabsProps) -> Html {
    html! {
        <nav class="filter-tabs" role="tablist">
            {for ScheduleFilter::ALL.into_iter().map(|filter| {
                let is_active = filter == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(filter))
                };

                html! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected={is_active.to_string()}
                        class={classes!("filter-tab", filter.as_str(), is_active.then_some("active"))}
                        {onclick}
                    >
                        <span class="filter-label">{filter.label()}</span>
                        <span class="filter-count">{props.counts.get(filter)}</span>
                    </button>
                }
            })}
        </nav>
    }
}
