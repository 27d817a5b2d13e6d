//! # Handy Kit - General-Purpose Helpers
//!
//! The grab-bag companion to [`handy_value`]: small, independent helpers
//! for text, numbers, dates, collections, and randomness, plus a counter
//! animation driver behind an injected [`Scheduler`] capability.
//!
//! Everything here is a pure function over its inputs except the random
//! helpers (which draw from the thread RNG) and the animation driver
//! (which sleeps on whatever scheduler it is given).
//!
//! ## Quick Start
//!
//! ```rust
//! use handy_kit::{capitalize_words, date_is_between, group_thousands, truncate};
//!
//! assert_eq!(truncate("plumbing supplies", 8), "plumbing...");
//! assert_eq!(capitalize_words("HOME REPAIR"), "Home Repair");
//! assert_eq!(group_thousands(1_000_000), "1,000,000");
//! assert!(date_is_between("2022-08-19", "2022-08-29", "2022-08-21"));
//! ```

mod animate;
mod collections;
mod dates;
mod numbers;
mod random;
mod text;

pub use animate::{animate_value, wait, Scheduler, ThreadScheduler};
pub use collections::{
    all_equal, default_if_empty, remove_key, sort_mappings_by_key, subtract_mapping_lists,
};
pub use dates::{date_is_between, date_offset};
pub use numbers::round_to_decimal;
pub use random::{random_array, random_int_inclusive};
pub use text::{capitalize_words, group_thousands, replace_between, truncate};
