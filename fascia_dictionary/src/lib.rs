// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=fascia_dictionary --heading-base-level=0

//! Fascia Dictionary: the toolkit's parameter-passing dictionary.
//!
//! Widget factories, resource lookups and command handlers all receive their arguments as a
//! [`Dictionary`]: an unordered map from symbolic [`Name`] keys to discriminated [`Value`]s.
//!
//! - [`Name`]: a cheaply clonable symbol. Ordered lexicographically by its text.
//! - [`Value`]: empty, boolean, number, string, name, array, or nested dictionary.
//! - [`dictionary_union`]: a deterministic set-union of two hash maps. When both inputs hold a
//!   key, the entry from the first argument wins.
//! - [`get_value`] / [`get_value_as`]: required-parameter lookups that report a missing key or a
//!   value of the wrong kind as a [`DictionaryError`].
//!
//! # Example
//!
//! ```rust
//! use fascia_dictionary::{Dictionary, Name, Value, dictionary_union, get_value_as};
//!
//! let defaults: Dictionary = [
//!     (Name::from("name"), Value::from("OK")),
//!     (Name::from("default"), Value::from(false)),
//! ]
//! .into_iter()
//! .collect();
//! let params: Dictionary = [(Name::from("default"), Value::from(true))].into_iter().collect();
//!
//! // Explicit parameters win over defaults.
//! let merged = dictionary_union(&params, &defaults);
//! assert_eq!(merged.len(), 2);
//! assert_eq!(get_value_as::<bool>(&merged, "default"), Ok(true));
//! assert_eq!(get_value_as::<&str>(&merged, "name"), Ok("OK"));
//! ```
//!
//! ## Union order
//!
//! A hash map has no intrinsic order, so [`dictionary_union`] builds a temporary index of
//! entry references per input, sorts it by key, and merges the two sorted views. The result
//! does not depend on either input's hash iteration order.
//!
//! ## Features
//!
//! - `std` *(default)*: implements `std::error::Error` through `thiserror`'s std support.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod name;
mod union;
mod value;

pub use error::DictionaryError;
pub use name::Name;
pub use union::{SortedIndex, dictionary_union, sorted_view};
pub use value::{Value, get_value, get_value_as};

/// Unordered mapping from symbolic keys to values.
pub type Dictionary = hashbrown::HashMap<Name, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&str, f64)]) -> Dictionary {
        pairs
            .iter()
            .map(|&(k, v)| (Name::from(k), Value::from(v)))
            .collect()
    }

    #[test]
    fn union_keeps_first_value_on_collision() {
        let a = dict(&[("a", 1.0), ("b", 2.0)]);
        let b = dict(&[("b", 3.0), ("c", 4.0)]);
        let merged = dictionary_union(&a, &b);
        assert_eq!(merged, dict(&[("a", 1.0), ("b", 2.0), ("c", 4.0)]));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn nested_dictionaries_compare_by_value() {
        let inner = dict(&[("x", 1.0)]);
        let mut a = Dictionary::new();
        a.insert(Name::from("inner"), Value::from(inner.clone()));
        let mut b = Dictionary::new();
        b.insert(Name::from("inner"), Value::Dictionary(inner));
        assert_eq!(a, b);
        assert_eq!(
            get_value_as::<&Dictionary>(&a, "inner").map(Dictionary::len),
            Ok(1)
        );
    }
}
