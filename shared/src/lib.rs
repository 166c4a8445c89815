pub mod error;
pub mod slots;
pub mod models;
pub mod status;
pub mod validation;
pub mod stats;
pub mod filter;
pub mod format;
pub mod auth;
pub mod clock;
pub mod notify;
pub mod dataset;
pub mod store;

pub use error::{Error, ErrorCode, Result};
pub use slots::TimeSlot;
pub use models::*;
pub use status::{classify, SlotStatus, OVERDUE_AFTER_MINUTES};
pub use validation::*;
pub use stats::{DashboardSummary, SlotBreakdown};
pub use filter::BoothFilter;
pub use auth::{authenticate, gate, AuthError, Gate, Role, User};
pub use clock::{Clock, FixedClock, SIMULATED_NOW};
pub use notify::{Notifier, Subscription};
pub use store::{BoothStore, KeyValueStore, MemoryStore, StorageError, StoreEvent};

#[cfg(test)]
mod tests;
