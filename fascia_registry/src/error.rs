// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use fascia_dictionary::{DictionaryError, Name};

use crate::command::CommandId;

/// Failure to build a widget.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FactoryError {
    /// No factory is registered for the requested kind.
    #[error("no factory registered for widget `{0}`")]
    UnknownWidget(Name),
    /// A required parameter is missing or of the wrong kind.
    #[error(transparent)]
    Parameter(#[from] DictionaryError),
    /// The factory refused its parameters.
    #[error("widget rejected its parameters: {0}")]
    Rejected(String),
}

/// Failure of a command system operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// No command is registered under this name.
    #[error("unknown command `{0}`")]
    UnknownCommand(Name),
    /// No command is registered under this identifier.
    #[error("unknown command id {0}")]
    UnknownId(CommandId),
    /// A command with this name is already registered.
    #[error("command `{0}` is already registered")]
    Duplicate(Name),
    /// The command exists but is disabled.
    #[error("command `{0}` is disabled")]
    Disabled(Name),
    /// Every command identifier has been handed out.
    #[error("no command identifiers left")]
    IdsExhausted,
}
