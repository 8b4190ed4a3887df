// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-owned context stacks: cursors and resource search paths.

use alloc::string::String;
use alloc::vec::Vec;

/// A last-in, first-out stack of context values.
///
/// The innermost (most recently pushed) value is the active one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextStack<T> {
    items: Vec<T>,
}

impl<T> Default for ContextStack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ContextStack<T> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `value` the active context.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the active context.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The active context.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of stacked values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop values until at most `depth` remain.
    pub fn truncate(&mut self, depth: usize) {
        self.items.truncate(depth);
    }

    /// Iterate from the innermost value outwards.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter().rev()
    }

    /// Run `f` with `value` pushed, then restore the stack to its previous depth.
    ///
    /// Anything `f` leaves on the stack above `value` is discarded as well.
    pub fn scoped<R>(&mut self, value: T, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.items.len();
        self.items.push(value);
        let result = f(self);
        self.truncate(depth);
        result
    }
}

/// The cursor stack: the active cursor is the innermost one.
///
/// `C` is the host's cursor handle.
pub type CursorStack<C> = ContextStack<C>;

/// Resource search directories, searched innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourcePaths {
    directories: ContextStack<String>,
}

impl ResourcePaths {
    /// Create an empty search path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `directory` as the innermost search location.
    pub fn push_directory(&mut self, directory: impl Into<String>) {
        self.directories.push(directory.into());
    }

    /// Remove the innermost search location.
    pub fn pop_directory(&mut self) -> Option<String> {
        self.directories.pop()
    }

    /// Search directories, innermost first.
    pub fn directories(&self) -> impl Iterator<Item = &str> + '_ {
        self.directories.iter().map(String::as_str)
    }

    /// Run `f` with `directory` searched first.
    pub fn scoped<R>(
        &mut self,
        directory: impl Into<String>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let depth = self.directories.len();
        self.directories.push(directory.into());
        let result = f(self);
        self.directories.truncate(depth);
        result
    }

    /// Find `relative` under the search directories.
    ///
    /// Candidates are probed innermost first with `exists`; the first accepted path is
    /// returned. File-system access is up to the caller.
    ///
    /// ```rust
    /// use fascia_registry::ResourcePaths;
    ///
    /// let mut paths = ResourcePaths::new();
    /// paths.push_directory("/usr/share/app");
    /// paths.push_directory("/home/me/.app/");
    ///
    /// let found = paths.resolve("icons/ok.png", |p| p.starts_with("/usr"));
    /// assert_eq!(found.as_deref(), Some("/usr/share/app/icons/ok.png"));
    /// ```
    pub fn resolve(
        &self,
        relative: &str,
        mut exists: impl FnMut(&str) -> bool,
    ) -> Option<String> {
        self.directories()
            .map(|dir| join(dir, relative))
            .find(|candidate| exists(candidate.as_str()))
    }
}

fn join(directory: &str, relative: &str) -> String {
    let relative = relative.trim_start_matches('/');
    if directory.is_empty() {
        return relative.into();
    }
    let mut path = String::with_capacity(directory.len() + 1 + relative.len());
    path.push_str(directory);
    if !directory.ends_with('/') {
        path.push('/');
    }
    path.push_str(relative);
    path
}
