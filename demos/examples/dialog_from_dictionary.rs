// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a small dialog from a declarative description.
//!
//! This example shows how to combine:
//! - `fascia_dictionary` for the widget descriptions and default merging,
//! - `fascia_registry` for widget factories, commands, and the cursor stack,
//! - `fascia_assemblage` for tearing the dialog down in reverse order,
//! - `fascia_rset` for a name <-> key code table.
//!
//! Run:
//! - `cargo run -p fascia_demos --example dialog_from_dictionary`

use std::cell::RefCell;
use std::rc::Rc;

use fascia_assemblage::Assemblage;
use fascia_dictionary::{Dictionary, Name, Value, get_value_as};
use fascia_registry::{CommandSystem, CursorStack, FactoryError, FactoryRegistry, ResourcePaths};
use fascia_rset::Rset;

/// Stand-in for a native control handle.
#[derive(Clone, Debug)]
struct Widget {
    kind: &'static str,
    label: String,
    command: Option<Name>,
}

fn dict(pairs: impl IntoIterator<Item = (&'static str, Value)>) -> Dictionary {
    pairs
        .into_iter()
        .map(|(k, v)| (Name::from(k), v))
        .collect()
}

fn registry(log: &Rc<RefCell<Vec<String>>>) -> FactoryRegistry<Widget> {
    let mut factories = FactoryRegistry::new();

    for kind in ["button", "checkbox", "label"] {
        let log = Rc::clone(log);
        factories.register_with_defaults(
            kind,
            dict([("name", Value::from(""))]),
            move |params, window| {
                let label = get_value_as::<&str>(params, "name")?.to_owned();
                let command = match params.get("bind") {
                    Some(v) => Some(Name::try_from(v)?),
                    None => None,
                };
                if kind == "button" && label.is_empty() {
                    return Err(FactoryError::Rejected("buttons need a name".into()));
                }
                let log = Rc::clone(&log);
                let teardown = format!("destroy {kind} {label:?}");
                window.defer(move || log.borrow_mut().push(teardown));
                Ok(Widget {
                    kind,
                    label,
                    command,
                })
            },
        );
    }
    factories
}

fn main() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let factories = registry(&log);

    let mut commands = CommandSystem::new();
    commands.insert("ok", || println!("ok pressed")).unwrap();
    commands.insert("cancel", || println!("cancel pressed")).unwrap();

    let mut keys: Rset<Name, u32> = Rset::new();
    keys.push_back(Name::from("return"), 0x0D_u32).unwrap();
    keys.push_back(Name::from("escape"), 0x1B).unwrap();

    let mut cursors: CursorStack<&str> = CursorStack::new();
    cursors.push("arrow");

    let mut resources = ResourcePaths::new();
    resources.push_directory(env!("CARGO_MANIFEST_DIR"));

    let description = vec![
        ("label", dict([("name", Value::from("Save changes?"))])),
        ("checkbox", dict([("name", Value::from("Don't ask again"))])),
        (
            "button",
            dict([
                ("name", Value::from("OK")),
                ("bind", Value::from(Name::from("ok"))),
            ]),
        ),
        (
            "button",
            dict([("name", Value::from("Cancel")), ("bind", Value::from("cancel"))]),
        ),
        ("button", Dictionary::new()),
        ("slider", Dictionary::new()),
    ];

    {
        let mut window = Assemblage::new();
        let widgets: Vec<Widget> = cursors.scoped("wait", |cursors| {
            println!("building with cursor {:?}", cursors.top());
            description
                .iter()
                .filter_map(|(kind, params)| match factories.make(kind, params, &mut window) {
                    Ok(widget) => Some(widget),
                    Err(err) => {
                        println!("skipped {kind}: {err}");
                        None
                    }
                })
                .collect()
        });
        println!("cursor restored to {:?}", cursors.top());

        for widget in &widgets {
            println!("{} {:?}", widget.kind, widget.label);
        }

        // Simulate the user pressing Return: key code -> key name -> bound button -> command.
        let pressed = keys.find1(&0x0D_u32).expect("return is mapped");
        println!("key {pressed} pressed");
        if let Some(ok) = widgets
            .iter()
            .find(|w| w.command.as_ref().is_some_and(|c| c.as_str() == "ok"))
        {
            commands
                .execute(ok.command.as_ref().map_or("", Name::as_str))
                .unwrap();
        }

        let manifest = resources.resolve("Cargo.toml", |p| std::path::Path::new(p).exists());
        println!("resource lookup: {manifest:?}");
    }

    // The assemblage tore the widgets down in reverse creation order.
    for line in log.borrow().iter() {
        println!("{line}");
    }
}
