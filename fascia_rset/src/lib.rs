// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=fascia_rset --heading-base-level=0

//! Fascia Rset: a bidirectional one-to-one relational set.
//!
//! An [`Rset<K1, K2>`] holds a bijection between two key domains. Every first key
//! appears in exactly one entry, and so does every second key, so each side can be
//! used to look up the other.
//!
//! - Append associations with [`Rset::push_back`]; collisions on either side are rejected.
//! - Look up in either direction with [`Rset::find1`] (second → first) and
//!   [`Rset::find2`] (first → second); a miss is [`RsetError::NotFound`].
//! - Rebind an existing association with [`Rset::rebind_second`] / [`Rset::rebind_first`].
//! - Remove an association by either key with [`Rset::remove_by_first`] /
//!   [`Rset::remove_by_second`].
//! - Iterate entries in insertion order.
//!
//! Toolkit code uses this to translate between symbolic names and platform constants
//! (cursor names, key codes, command identifiers) without keeping two maps in sync by hand.
//!
//! # Example
//!
//! ```rust
//! use fascia_rset::{Rset, RsetError};
//!
//! let mut set: Rset<String, String> = Rset::new();
//! set.push_back("first_name".into(), "first_string".into()).unwrap();
//! set.push_back("second_name".into(), "second_string".into()).unwrap();
//! set.push_back("third_name".into(), "third_string".into()).unwrap();
//!
//! assert_eq!(set.find1("second_string").unwrap(), "second_name");
//! assert_eq!(set.find2("third_name").unwrap(), "third_string");
//! assert_eq!(set.find1("not_here!"), Err(RsetError::NotFound));
//! assert_eq!(set.find2("not_here!"), Err(RsetError::NotFound));
//!
//! // Rebinding is the equivalent of `set[k1] = k2`.
//! let mut copy = set.clone();
//! assert_eq!(copy, set);
//! copy.rebind_second("first_name", "renamed".into()).unwrap();
//! assert_ne!(copy, set);
//! ```
//!
//! ## Storage
//!
//! Entries live in a single insertion-ordered vector. Two hash indices
//! (`hashbrown::HashTable<usize>`) map each side to the entry position, so keys are
//! stored exactly once and need not be `Clone`. Lookups accept any borrowed form of
//! the key (`&str` for `String` keys), following the usual `Borrow` contract.
//!
//! ## Features
//!
//! - `std` *(default)*: implements `std::error::Error` through `thiserror`'s std support.
//!   Without it the crate is `no_std` + `alloc` and uses `core::error::Error`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod rset;

pub use error::RsetError;
pub use rset::{IntoIter, Iter, Rset};
