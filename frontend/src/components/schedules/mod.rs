pub mod schedule_filter_tabs;
pub mod schedule_table;
pub mod schedule_view_container;

pub use schedule_filter_tabs::ScheduleFilterTabs;
pub use schedule_table::ScheduleTable;
pub use schedule_view_container::ScheduleViewContainer;
