//! # bizday_core
//!
//! Business day resolution for Bizday.
//!
//! This crate is the source of truth for business day rules:
//! - The `Holiday` value type (validated `YYYY-MM-DD` dates)
//! - The `HolidayGetter` capability consumed from collaborators
//! - The `HolidayRegistry` composing the weekend rule with holiday
//!   lookups
//!
//! ## Architecture Position
//!
//! Leaf crate with no dependency on any backing holiday store. The
//! store (static list, database, remote service) is supplied by the
//! caller behind [`HolidayGetter`].
//!
//! ## Example
//!
//! ```rust
//! use bizday_core::{HolidayGetter, HolidayRegistry};
//! use chrono::NaiveDate;
//! use std::sync::Arc;
//!
//! struct NoHolidays;
//!
//! impl HolidayGetter for NoHolidays {
//!     fn has_holiday(&self, _date: NaiveDate) -> bool {
//!         false
//!     }
//! }
//!
//! let registry = HolidayRegistry::new(Some(Arc::new(NoHolidays)))?;
//! assert!(registry.is_business_day(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
//! # Ok::<(), bizday_core::CalendarError>(())
//! ```

mod error;
mod holiday;
mod registry;

pub use error::CalendarError;
pub use holiday::Holiday;
pub use registry::{HolidayGetter, HolidayRegistry};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CalendarError, Holiday, HolidayGetter, HolidayRegistry};
}
