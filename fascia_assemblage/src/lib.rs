// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=fascia_assemblage --heading-base-level=0

//! Fascia Assemblage: scoped teardown for groups of toolkit resources.
//!
//! Building a window wires up many resources whose lifetimes end together: signal
//! connections, command monitors, native handles, child controls. An [`Assemblage`]
//! collects the teardown for all of them and runs it when the assemblage is dropped.
//!
//! - [`Assemblage::defer`] registers a cleanup closure.
//! - [`Assemblage::adopt`] takes ownership of a value and drops it on teardown.
//! - Teardown runs actions in reverse registration order, each exactly once.
//! - [`Assemblage::run`] tears down early; [`Assemblage::forget`] discards pending actions
//!   without calling them.
//!
//! Adopting another assemblage nests it: the inner group tears down as a unit at the point
//! where it was adopted.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use fascia_assemblage::Assemblage;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! {
//!     let mut window = Assemblage::new();
//!     for name in ["connect ok", "connect cancel", "attach view"] {
//!         let log = Rc::clone(&log);
//!         window.defer(move || log.borrow_mut().push(name));
//!     }
//! }
//! assert_eq!(*log.borrow(), ["attach view", "connect cancel", "connect ok"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

type Action = Box<dyn FnOnce()>;

/// A list of deferred cleanup actions, run in reverse order on drop.
#[derive(Default)]
pub struct Assemblage {
    actions: SmallVec<[Action; 4]>,
}

impl Assemblage {
    /// Create an empty assemblage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` to run on teardown.
    pub fn defer(&mut self, action: impl FnOnce() + 'static) {
        self.actions.push(Box::new(action));
    }

    /// Keep `value` alive until teardown, then drop it.
    pub fn adopt<T: 'static>(&mut self, value: T) {
        self.defer(move || drop(value));
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are pending.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run all pending actions now, most recent first.
    ///
    /// The assemblage is empty afterwards and can be reused.
    pub fn run(&mut self) {
        while let Some(action) = self.actions.pop() {
            action();
        }
    }

    /// Discard pending actions without calling them.
    ///
    /// State captured by the actions (including adopted values) is still dropped.
    pub fn forget(&mut self) {
        self.actions.clear();
    }
}

impl Drop for Assemblage {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Assemblage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assemblage")
            .field("pending", &self.actions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    type Log = Rc<RefCell<Vec<u32>>>;

    fn record(a: &mut Assemblage, log: &Log, n: u32) {
        let log = Rc::clone(log);
        a.defer(move || log.borrow_mut().push(n));
    }

    struct Tracked(Log, u32);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.borrow_mut().push(self.1);
        }
    }

    #[test]
    fn drop_runs_in_reverse_order() {
        let log = Log::default();
        {
            let mut a = Assemblage::new();
            record(&mut a, &log, 1);
            record(&mut a, &log, 2);
            record(&mut a, &log, 3);
            assert_eq!(a.len(), 3);
            assert!(log.borrow().is_empty());
        }
        assert_eq!(*log.borrow(), [3, 2, 1]);
    }

    #[test]
    fn run_is_once_only() {
        let log = Log::default();
        let mut a = Assemblage::new();
        record(&mut a, &log, 1);
        a.run();
        assert!(a.is_empty());
        a.run();
        drop(a);
        assert_eq!(*log.borrow(), [1]);
    }

    #[test]
    fn adopted_values_drop_in_sequence() {
        let log = Log::default();
        {
            let mut a = Assemblage::new();
            a.adopt(Tracked(Rc::clone(&log), 1));
            record(&mut a, &log, 2);
            a.adopt(Tracked(Rc::clone(&log), 3));
        }
        assert_eq!(*log.borrow(), [3, 2, 1]);
    }

    #[test]
    fn nested_assemblage_tears_down_as_a_unit() {
        let log = Log::default();
        {
            let mut outer = Assemblage::new();
            record(&mut outer, &log, 1);
            let mut inner = Assemblage::new();
            record(&mut inner, &log, 10);
            record(&mut inner, &log, 11);
            outer.adopt(inner);
            record(&mut outer, &log, 2);
        }
        assert_eq!(*log.borrow(), [2, 11, 10, 1]);
    }

    #[test]
    fn forget_skips_actions_but_drops_state() {
        let log = Log::default();
        let mut a = Assemblage::new();
        record(&mut a, &log, 1);
        a.adopt(Tracked(Rc::clone(&log), 7));
        a.forget();
        drop(a);
        // Only the adopted value's own destructor ran.
        assert_eq!(*log.borrow(), [7]);
    }

    #[test]
    fn debug_reports_pending_count() {
        let mut a = Assemblage::new();
        a.defer(|| {});
        assert_eq!(alloc::format!("{a:?}"), "Assemblage { pending: 1 }");
        a.forget();
    }
}
