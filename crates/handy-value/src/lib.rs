//! # Handy Value - Dynamic Value Comparison Library
//!
//! `handy-value` provides a dynamically shaped [`Value`] model together with
//! the emptiness and comparison predicates a data-driven UI needs: deciding
//! whether a field is worth rendering, whether a form is dirty, whether an
//! item already exists in a list.
//!
//! This crate is the comparison foundation for the `handy` helper libraries,
//! but can be used independently anywhere loosely shaped data has to be
//! normalized and compared.
//!
//! ## Core Concepts
//!
//! - [`Value`]: tagged union over null, booleans, numbers, strings, dates,
//!   sequences, and mappings
//! - [`is_empty`]: semantic absence — empty strings, empty mappings, and
//!   sequences of nothing-but-empties all count as absent
//! - [`deep_equal`]: structural equality with an explicit serialize-and-
//!   compare fallback for empty operands
//! - [`deep_equal_sequences`] / [`strict_equal_sequences`]: order-sensitive
//!   list comparison for records and primitives respectively
//! - [`is_value_in_mappings`]: keyed membership over a list of records
//!
//! Every function is pure and synchronous: no state is retained, inputs are
//! never mutated, and calls are safe from any number of threads. Values are
//! owned trees, so cyclic inputs cannot be constructed and recursion is
//! bounded by the structure handed in.
//!
//! ## Quick Start
//!
//! ```rust
//! use handy_value::{deep_equal, is_empty, is_value_in_mappings, Mapping, Value};
//!
//! let catalog = vec![
//!     Value::Mapping(Mapping::from([
//!         ("category".to_string(), Value::from("electrical")),
//!     ])),
//!     Value::Mapping(Mapping::from([
//!         ("category".to_string(), Value::from("plumbing")),
//!     ])),
//! ];
//!
//! assert!(is_value_in_mappings(&Value::from("plumbing"), &catalog, "category"));
//! assert!(!is_value_in_mappings(&Value::from(""), &catalog, "category"));
//!
//! assert!(is_empty(&Value::Sequence(vec![Value::Sequence(vec![])])));
//! assert!(deep_equal(&catalog[0], &catalog[0].clone()));
//! ```

mod compare;
mod empty;
mod value;

pub use compare::{
    deep_equal, deep_equal_sequences, is_value_in_mappings, strict_equal_sequences,
};
pub use empty::{is_empty, is_empty_mapping};
pub use value::{Mapping, Value};
