// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named commands with enable state and state monitors.

use alloc::boxed::Box;
use core::fmt;

use fascia_dictionary::Name;
use fascia_rset::{Rset, RsetError};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::CommandError;

/// Numeric identifier of a command, as used by native menus and accelerators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandId(u32);

impl CommandId {
    /// The raw identifier.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for an enable-state monitor, used with [`CommandSystem::disconnect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MonitorId {
    command: CommandId,
    serial: u32,
}

type Handler = Box<dyn FnMut()>;
type Monitor = Box<dyn FnMut(bool)>;

struct Command {
    handler: Handler,
    enabled: bool,
    monitors: SmallVec<[(u32, Monitor); 2]>,
}

impl Command {
    fn notify(&mut self) {
        let enabled = self.enabled;
        for (_, monitor) in &mut self.monitors {
            monitor(enabled);
        }
    }
}

/// Registry of named commands.
///
/// Every command gets a [`CommandId`] when inserted; names and identifiers are kept in a
/// one-to-one [`Rset`] so menus can dispatch by identifier and the rest of the toolkit by
/// name. Commands start enabled.
pub struct CommandSystem {
    ids: Rset<Name, CommandId>,
    commands: HashMap<CommandId, Command>,
    next_id: u32,
    next_serial: u32,
}

impl Default for CommandSystem {
    fn default() -> Self {
        Self::with_first_id(1)
    }
}

impl CommandSystem {
    /// Create an empty command system whose first identifier is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty command system that hands out identifiers starting at `first`.
    ///
    /// Identifiers count up to `u32::MAX - 1`; after that [`insert`](Self::insert) fails
    /// with [`CommandError::IdsExhausted`].
    #[must_use]
    pub fn with_first_id(first: u32) -> Self {
        Self {
            ids: Rset::new(),
            commands: HashMap::new(),
            next_id: first,
            next_serial: 0,
        }
    }

    /// Register `handler` under `name`.
    ///
    /// Fails with [`CommandError::Duplicate`] if the name is taken and with
    /// [`CommandError::IdsExhausted`] once no identifiers are left.
    pub fn insert(
        &mut self,
        name: impl Into<Name>,
        handler: impl FnMut() + 'static,
    ) -> Result<CommandId, CommandError> {
        let name = name.into();
        let id = CommandId(self.next_id);
        let next_id = self
            .next_id
            .checked_add(1)
            .ok_or(CommandError::IdsExhausted)?;
        if let Err(err) = self.ids.push_back(name.clone(), id) {
            // Identifiers are never reused, so only the name can collide.
            debug_assert_eq!(err, RsetError::DuplicateFirst, "command id handed out twice");
            return Err(CommandError::Duplicate(name));
        }
        self.next_id = next_id;
        self.commands.insert(
            id,
            Command {
                handler: Box::new(handler),
                enabled: true,
                monitors: SmallVec::new(),
            },
        );
        Ok(id)
    }

    /// Remove the command `name`.
    ///
    /// Monitors of an enabled command are told it is now disabled before they are dropped.
    pub fn remove(&mut self, name: &str) -> Result<(), CommandError> {
        let (_, id) = self
            .ids
            .remove_by_first(name)
            .ok_or_else(|| CommandError::UnknownCommand(Name::new(name)))?;
        if let Some(mut command) = self.commands.remove(&id)
            && command.enabled
        {
            command.enabled = false;
            command.notify();
        }
        Ok(())
    }

    /// Whether a command named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_first(name)
    }

    /// The identifier of the command `name`.
    pub fn id_of(&self, name: &str) -> Result<CommandId, CommandError> {
        self.ids
            .find2(name)
            .copied()
            .map_err(|_| CommandError::UnknownCommand(Name::new(name)))
    }

    /// The name of the command with identifier `id`.
    pub fn name_of(&self, id: CommandId) -> Result<&Name, CommandError> {
        self.ids
            .find1(&id)
            .map_err(|_| CommandError::UnknownId(id))
    }

    /// Enable or disable `name`; monitors are called if the state changes.
    pub fn enable(&mut self, name: &str, enabled: bool) -> Result<(), CommandError> {
        let command = self.command_mut(name)?;
        if command.enabled != enabled {
            command.enabled = enabled;
            command.notify();
        }
        Ok(())
    }

    /// Whether `name` is enabled.
    pub fn is_enabled(&self, name: &str) -> Result<bool, CommandError> {
        let id = self.id_of(name)?;
        Ok(self.commands.get(&id).is_some_and(|c| c.enabled))
    }

    /// Run the handler of `name`.
    pub fn execute(&mut self, name: &str) -> Result<(), CommandError> {
        let command = self.command_mut(name)?;
        if !command.enabled {
            return Err(CommandError::Disabled(Name::new(name)));
        }
        (command.handler)();
        Ok(())
    }

    /// Run the handler of the command with identifier `id`.
    pub fn execute_id(&mut self, id: CommandId) -> Result<(), CommandError> {
        let name = self.name_of(id)?.clone();
        self.execute(name.as_str())
    }

    /// Watch the enable state of `name`.
    ///
    /// `monitor` is called immediately with the current state, then on every change.
    pub fn monitor_enabled(
        &mut self,
        name: &str,
        mut monitor: impl FnMut(bool) + 'static,
    ) -> Result<MonitorId, CommandError> {
        let command_id = self.id_of(name)?;
        let serial = self.next_serial;
        let command = self.command_mut(name)?;
        monitor(command.enabled);
        command.monitors.push((serial, Box::new(monitor)));
        self.next_serial += 1;
        Ok(MonitorId {
            command: command_id,
            serial,
        })
    }

    /// Stop a monitor. Returns whether it was still connected.
    pub fn disconnect(&mut self, monitor: MonitorId) -> bool {
        let Some(command) = self.commands.get_mut(&monitor.command) else {
            return false;
        };
        let before = command.monitors.len();
        command.monitors.retain(|(serial, _)| *serial != monitor.serial);
        command.monitors.len() != before
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn command_mut(&mut self, name: &str) -> Result<&mut Command, CommandError> {
        let id = self.id_of(name)?;
        self.commands
            .get_mut(&id)
            .ok_or_else(|| CommandError::UnknownCommand(Name::new(name)))
    }
}

impl fmt::Debug for CommandSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSystem")
            .field("ids", &self.ids)
            .field("commands", &self.commands.len())
            .field("next_id", &self.next_id)
            .field("next_serial", &self.next_serial)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    #[test]
    fn execute_by_name_and_id() {
        let hits = Rc::new(Cell::new(0));
        let mut commands = CommandSystem::new();
        let counter = Rc::clone(&hits);
        let id = commands
            .insert("save", move || counter.set(counter.get() + 1))
            .unwrap();
        assert_eq!(id.get(), 1);

        commands.execute("save").unwrap();
        commands.execute_id(id).unwrap();
        assert_eq!(hits.get(), 2);
        assert_eq!(commands.id_of("save"), Ok(id));
        assert_eq!(commands.name_of(id).map(Name::as_str), Ok("save"));
    }

    #[test]
    fn unknown_and_duplicate_commands() {
        let mut commands = CommandSystem::with_first_id(100);
        let id = commands.insert("open", || {}).unwrap();
        assert_eq!(id.get(), 100);
        assert_eq!(
            commands.insert("open", || {}),
            Err(CommandError::Duplicate(Name::from("open")))
        );
        assert_eq!(
            commands.execute("close"),
            Err(CommandError::UnknownCommand(Name::from("close")))
        );
        assert_eq!(
            commands.execute_id(CommandId(7)),
            Err(CommandError::UnknownId(CommandId(7)))
        );
    }

    #[test]
    fn disabled_commands_do_not_run() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let mut commands = CommandSystem::new();
        commands.insert("print", move || flag.set(true)).unwrap();
        commands.enable("print", false).unwrap();
        assert_eq!(commands.is_enabled("print"), Ok(false));
        assert_eq!(
            commands.execute("print"),
            Err(CommandError::Disabled(Name::from("print")))
        );
        assert!(!ran.get());
    }

    #[test]
    fn monitors_see_initial_state_and_changes() {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let mut commands = CommandSystem::new();
        commands.insert("undo", || {}).unwrap();

        let sink = Rc::clone(&seen);
        let monitor = commands
            .monitor_enabled("undo", move |on| sink.borrow_mut().push(on))
            .unwrap();
        commands.enable("undo", false).unwrap();
        // No change, no call.
        commands.enable("undo", false).unwrap();
        commands.enable("undo", true).unwrap();
        assert_eq!(*seen.borrow(), [true, false, true]);

        assert!(commands.disconnect(monitor));
        assert!(!commands.disconnect(monitor));
        commands.enable("undo", false).unwrap();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn remove_notifies_and_frees_the_name() {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let mut commands = CommandSystem::new();
        let first = commands.insert("cut", || {}).unwrap();
        let sink = Rc::clone(&seen);
        commands
            .monitor_enabled("cut", move |on| sink.borrow_mut().push(on))
            .unwrap();

        commands.remove("cut").unwrap();
        assert_eq!(*seen.borrow(), [true, false]);
        assert!(!commands.contains("cut"));
        assert_eq!(
            commands.name_of(first),
            Err(CommandError::UnknownId(first))
        );

        // Identifiers are not reused.
        let second = commands.insert("cut", || {}).unwrap();
        assert_ne!(first, second);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn running_out_of_ids_is_an_error() {
        let mut commands = CommandSystem::with_first_id(u32::MAX - 1);
        assert_eq!(commands.insert("a", || {}).map(CommandId::get), Ok(u32::MAX - 1));
        // The last identifier is never handed out, so no counter wraps onto a live id.
        assert_eq!(commands.insert("b", || {}), Err(CommandError::IdsExhausted));
        assert_eq!(commands.insert("c", || {}), Err(CommandError::IdsExhausted));
        assert!(!commands.contains("b"));
        assert_eq!(commands.len(), 1);

        let mut at_max = CommandSystem::with_first_id(u32::MAX);
        assert_eq!(at_max.insert("a", || {}), Err(CommandError::IdsExhausted));
        assert!(at_max.is_empty());
    }
}
