// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=fascia_registry --heading-base-level=0

//! Fascia Registry: the toolkit's registries as caller-owned context objects.
//!
//! Nothing here is global. A host creates the registries it needs, keeps them in its
//! application context, and passes them to whatever builds or drives its windows.
//!
//! - [`FactoryRegistry`]: maps widget kinds (`"button"`, `"checkbox"`, `"tab_group"`, ...) to
//!   factories that build a widget from a parameter [`Dictionary`](fascia_dictionary::Dictionary),
//!   with optional per-kind default parameters.
//! - [`CommandSystem`]: named commands with a numeric [`CommandId`] for native menus, an enable
//!   state, and enable-state monitors.
//! - [`ContextStack`] / [`CursorStack`]: push/pop stacks whose innermost value is active.
//! - [`ResourcePaths`]: a stack of search directories for resource lookup.
//!
//! Widget factories register their teardown on the window's
//! [`Assemblage`](fascia_assemblage::Assemblage), so dropping the assemblage releases every
//! widget it built.
//!
//! # Example
//!
//! ```rust
//! use fascia_assemblage::Assemblage;
//! use fascia_dictionary::{Dictionary, Name, Value, get_value_as};
//! use fascia_registry::{CommandSystem, FactoryRegistry};
//!
//! #[derive(Debug)]
//! struct Label(String);
//!
//! let mut factories = FactoryRegistry::new();
//! factories.register("label", |params, _| {
//!     Ok(Label(get_value_as::<&str>(params, "name")?.to_owned()))
//! });
//!
//! let mut params = Dictionary::new();
//! params.insert(Name::from("name"), Value::from("Hello"));
//! let mut window = Assemblage::new();
//! let label = factories.make("label", &params, &mut window).unwrap();
//! assert_eq!(label.0, "Hello");
//!
//! let mut commands = CommandSystem::new();
//! let id = commands.insert("quit", || {}).unwrap();
//! assert_eq!(commands.name_of(id).unwrap().as_str(), "quit");
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: forwards `std` support to `thiserror` and the Fascia dependencies.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod error;
mod factory;
mod stack;

pub use command::{CommandId, CommandSystem, MonitorId};
pub use error::{CommandError, FactoryError};
pub use factory::FactoryRegistry;
pub use stack::{ContextStack, CursorStack, ResourcePaths};
