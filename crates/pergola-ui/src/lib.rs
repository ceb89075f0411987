#![allow(non_snake_case)]
//! Widget constructors, child-building helpers, and text attributes.
//!
//! Widgets are plain functions returning `View` values; they carry no
//! internal state. State lives in `remember`ed signals inside the view
//! functions that compose them.

pub mod render;
pub mod style;

use std::rc::Rc;

use pergola_core::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: None,
            font_size: 16.0,
            underline: false,
        },
    )
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            text: text.into(),
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button))
}

/// A navigating link. `on_navigate` receives the raw `to` value; what it
/// means (a path, a bare token) is up to whoever composed the link.
pub fn Link(
    label: impl Into<String>,
    to: impl Into<String>,
    on_navigate: impl Fn(&str) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::Link {
            label: label.into(),
            to: to.into(),
            on_navigate: Some(Rc::new(on_navigate)),
        },
    )
    .semantics(Semantics::new(Role::Link))
}

/// Controlled text field: shows `value`, reports edits through `on_change`.
pub fn TextField(
    value: impl Into<String>,
    hint: impl Into<String>,
    on_change: impl Fn(String) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::TextField {
            value: value.into(),
            hint: hint.into(),
            on_change: Some(Rc::new(on_change)),
        },
    )
    .semantics(Semantics::new(Role::TextField))
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);

/// Text attribute setters; no-ops on non-text views.
pub trait TextExt {
    fn color(self, c: Color) -> View;
    fn size(self, font: f32) -> View;
    fn underline(self, on: bool) -> View;
}

impl TextExt for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = Some(c);
        }
        self
    }

    fn size(mut self, font: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = font;
        }
        self
    }

    fn underline(mut self, on: bool) -> View {
        if let ViewKind::Text { underline, .. } = &mut self.kind {
            *underline = on;
        }
        self
    }
}
