//! Gallery shell: a tab row selecting which demo subtree is mounted.
//! Exactly one demo is composed at a time; switching disposes the
//! outgoing demo's scope and clears its composition slots, so every mount
//! starts from scratch.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use pergola_core::prelude::*;
use pergola_core::runtime::clear_slots;
use pergola_ui::*;

use crate::pages;
use crate::ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    Counter,
    Reference,
    CustomRouter,
    Routed,
    Styled,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::Counter,
        Demo::Reference,
        Demo::CustomRouter,
        Demo::Routed,
        Demo::Styled,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Demo::Counter => "counter",
            Demo::Reference => "reference",
            Demo::CustomRouter => "custom-router",
            Demo::Routed => "routed",
            Demo::Styled => "styled",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Counter => "Shared State",
            Demo::Reference => "Focus Handle",
            Demo::CustomRouter => "Custom Router",
            Demo::Routed => "Router Library",
            Demo::Styled => "Scoped Styles",
        }
    }

    pub fn from_key(key: &str) -> Option<Demo> {
        Demo::ALL.iter().copied().find(|d| d.key() == key)
    }
}

fn selected_demo() -> Rc<Signal<Demo>> {
    remember_with_key("gallery:demo", || signal(Demo::Counter))
}

fn demo_scopes() -> Rc<RefCell<HashMap<&'static str, Scope>>> {
    remember_with_key("gallery:scopes", || RefCell::new(HashMap::new()))
}

/// Switch the mounted demo. The outgoing demo's scope is disposed (running
/// its unmount cleanups) and the sequential slots are cleared, which resets
/// its remembered state.
pub fn switch_to(demo: Demo) {
    let selected = selected_demo();
    let prev = selected.get();
    if prev == demo {
        return;
    }
    if let Some(scope) = demo_scopes().borrow_mut().remove(prev.key()) {
        scope.dispose();
    }
    clear_slots();
    selected.set(demo);
}

fn gallery_theme() -> Theme {
    Theme {
        background: Color::from_hex("#FAFAFA"),
        surface: Color::from_hex("#FFFFFF"),
        on_surface: Color::from_hex("#222222"),
        primary: Color::from_hex("#3B82F6"),
        on_primary: Color::WHITE,
        ..Theme::default()
    }
}

pub fn app(_s: &mut Scheduler) -> View {
    let selected = selected_demo();
    let current = selected.get();

    with_theme(gallery_theme(), || {
        let tabs = Row(Modifier::new().padding(4.0)).child(
            Demo::ALL
                .iter()
                .map(|d| {
                    let d = *d;
                    Button(d.title(), move || switch_to(d))
                })
                .collect::<Vec<_>>(),
        );

        // Each mounted demo owns a scope that lives until it unmounts.
        let scope = demo_scopes()
            .borrow_mut()
            .entry(current.key())
            .or_insert_with(Scope::new)
            .clone();
        let page = scope.run(|| match current {
            Demo::Counter => pages::counter::screen(),
            Demo::Reference => pages::reference::screen(),
            Demo::CustomRouter => pages::custom_router::screen(),
            Demo::Routed => pages::routed::screen(),
            Demo::Styled => pages::styled::screen(),
        });

        Surface(
            Modifier::new().background(theme().background),
            Column(Modifier::new().padding(4.0)).child((
                ui::TopBar("Pergola Gallery"),
                tabs,
                page,
            )),
        )
    })
}
