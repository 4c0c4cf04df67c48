pub mod use_notifications;
pub mod use_schedule_detail;
pub mod use_schedule_filter;
pub mod use_schedules;
pub mod use_treatment_form;
