pub mod header;
pub mod notification_bell;
pub mod schedules;
pub mod treatment;
