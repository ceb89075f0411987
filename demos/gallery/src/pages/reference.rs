//! Imperative-handle demo.
//!
//! The form owns a `FocusHandle` bound to its search field. The field's
//! text flows through ordinary declarative state; focusing it happens
//! imperatively from the button, outside that flow. Until the field has
//! been painted once the handle is empty, and the focus call surfaces
//! `HandleError` in the status line instead of crashing.

use pergola_core::prelude::*;
use pergola_ui::*;

use crate::ui::Section;

pub fn screen() -> View {
    let search_term = remember(|| signal(String::new()));
    let input_ref = remember(FocusHandle::new);
    let status = remember(|| signal(String::new()));

    // Unbind when this demo unmounts, and give focus back: ids are only
    // stable within one tree shape, so a kept focus would point into
    // whatever mounts next.
    remember(|| {
        let handle = (*input_ref).clone();
        effect(move || {
            on_unmount(move || {
                handle.clear();
                pergola_core::runtime::request_blur();
            })
        })
    });

    let field = TextField(search_term.get(), "Enter Search Term", {
        let search_term = search_term.clone();
        move |v| search_term.set(v)
    })
    .modifier(Modifier::new().bind_focus(&input_ref));

    let focus_button = Button("Focus Search Input", {
        let handle = (*input_ref).clone();
        let status = status.clone();
        move || match handle.focus() {
            Ok(()) => status.set(String::new()),
            Err(e) => status.set(format!("Cannot focus: {e}")),
        }
    });

    let mut kids = vec![Text("Enter Search Term:"), field, focus_button];
    let message = status.get();
    if !message.is_empty() {
        kids.push(Text(message).color(theme().focus));
    }

    Section("Search Form", Column(Modifier::new().padding(4.0)).child(kids))
}
