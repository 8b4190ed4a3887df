// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Failure of a relational set operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RsetError {
    /// No entry holds the requested key.
    #[error("key not found in relational set")]
    NotFound,
    /// Another entry already holds this first key.
    #[error("first key already present in relational set")]
    DuplicateFirst,
    /// Another entry already holds this second key.
    #[error("second key already present in relational set")]
    DuplicateSecond,
}
