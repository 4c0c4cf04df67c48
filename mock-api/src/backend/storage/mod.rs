//! # Storage Module
//!
//! Data held by the mock API. Everything lives in process memory and is
//! reseeded on every start; the traits keep the domain layer independent of
//! that choice.

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::InMemoryStore;
pub use seed::seeded_store;
pub use traits::{AnimalStorage, NotificationStorage, ScheduleStorage, TreatmentStorage};
