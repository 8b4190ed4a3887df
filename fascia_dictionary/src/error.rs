// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Name;

/// Failure to read a required parameter out of a dictionary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary holds no entry for the key.
    #[error("missing dictionary key `{0}`")]
    MissingKey(Name),
    /// The value exists but is of a different kind.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// Kind the caller asked for.
        expected: &'static str,
        /// Kind actually stored.
        found: &'static str,
    },
}
