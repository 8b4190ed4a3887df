// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget factory registry.

use alloc::boxed::Box;
use core::fmt;

use fascia_assemblage::Assemblage;
use fascia_dictionary::{Dictionary, Name, dictionary_union};
use hashbrown::HashMap;

use crate::FactoryError;

type Factory<W> = Box<dyn Fn(&Dictionary, &mut Assemblage) -> Result<W, FactoryError>>;

struct Entry<W> {
    defaults: Dictionary,
    factory: Factory<W>,
}

/// Maps widget kinds to the closures that build them.
///
/// Each factory receives the merged parameter dictionary and the [`Assemblage`] of the
/// window under construction, where it registers whatever teardown its widget needs.
/// `W` is the host's widget handle type.
pub struct FactoryRegistry<W> {
    entries: HashMap<Name, Entry<W>>,
}

impl<W> Default for FactoryRegistry<W> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<W> FactoryRegistry<W> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `kind`, with no default parameters.
    ///
    /// Returns `true` if a previous factory for `kind` was replaced.
    pub fn register<F>(&mut self, kind: impl Into<Name>, factory: F) -> bool
    where
        F: Fn(&Dictionary, &mut Assemblage) -> Result<W, FactoryError> + 'static,
    {
        self.register_with_defaults(kind, Dictionary::new(), factory)
    }

    /// Register `factory` for `kind`.
    ///
    /// Parameters passed to [`make`](Self::make) are merged over `defaults`; explicit
    /// parameters win. Returns `true` if a previous factory for `kind` was replaced.
    pub fn register_with_defaults<F>(
        &mut self,
        kind: impl Into<Name>,
        defaults: Dictionary,
        factory: F,
    ) -> bool
    where
        F: Fn(&Dictionary, &mut Assemblage) -> Result<W, FactoryError> + 'static,
    {
        let entry = Entry {
            defaults,
            factory: Box::new(factory),
        };
        self.entries.insert(kind.into(), entry).is_some()
    }

    /// Remove the factory for `kind`. Returns whether one was registered.
    pub fn unregister(&mut self, kind: &str) -> bool {
        self.entries.remove(kind).is_some()
    }

    /// Whether a factory is registered for `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &Name> + '_ {
        self.entries.keys()
    }

    /// Build a widget of `kind` from `params`.
    pub fn make(
        &self,
        kind: &str,
        params: &Dictionary,
        assemblage: &mut Assemblage,
    ) -> Result<W, FactoryError> {
        let entry = self
            .entries
            .get(kind)
            .ok_or_else(|| FactoryError::UnknownWidget(Name::new(kind)))?;
        let merged = dictionary_union(params, &entry.defaults);
        (entry.factory)(&merged, assemblage)
    }
}

impl<W> fmt::Debug for FactoryRegistry<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: alloc::vec::Vec<&Name> = self.entries.keys().collect();
        kinds.sort_unstable();
        f.debug_struct("FactoryRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}
