//! Domain models for the store.
//!
//! Serialized field names are camelCase. Slots hold these shapes inside a
//! versioned envelope; bare payloads without one are not read back.

pub mod catalog;
pub mod order;
pub mod query;
pub mod report;
pub mod training;
pub mod user;

pub use catalog::{CartItem, Facility, Product};
pub use order::Order;
pub use query::{QueryDraft, UserQuery};
pub use report::{GeoLocation, ReportDraft, WasteReport};
pub use training::{QuizQuestion, QuizScore, TrainingModule};
pub use user::User;
