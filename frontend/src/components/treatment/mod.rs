pub mod schedule_detail_container;
pub mod treatment_form;

pub use schedule_detail_container::ScheduleDetailContainer;
pub use treatment_form::TreatmentFormView;
