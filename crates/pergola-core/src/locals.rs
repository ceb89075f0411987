//! # Composition locals
//!
//! A `Local<T>` is a named broadcast channel through which an ancestor view
//! makes a value available to every descendant composed inside its
//! `provide` call, with no parameter threading in between:
//!
//! ```rust
//! use pergola_core::locals::Local;
//!
//! static GREETING: Local<&'static str> = Local::new("greeting", || "Hello");
//!
//! let seen = GREETING.provide("Hallo", || GREETING.get());
//! assert_eq!(seen, "Hallo");
//! assert_eq!(GREETING.get(), "Hello"); // back to the default outside
//! ```
//!
//! Reads resolve innermost-first, so nested `provide` calls shadow outer
//! ones for their dynamic extent. Outside any provider the declared default
//! is returned. The framework `Theme` is itself a `Local<Theme>`, so
//! widgets and app code use the same mechanism.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

type Key = (TypeId, &'static str);

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<Key, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// A named composition-local slot carrying values of type `T`.
///
/// Declare one as a `static`; the name distinguishes channels that share a
/// value type.
pub struct Local<T: Clone + 'static> {
    name: &'static str,
    default: fn() -> T,
}

impl<T: Clone + 'static> Local<T> {
    pub const fn new(name: &'static str, default: fn() -> T) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn key(&self) -> Key {
        (TypeId::of::<T>(), self.name)
    }

    /// Make `value` visible to every `get` on this channel for the duration
    /// of `f`. The previous value (or default) is restored on exit, also on
    /// unwind.
    pub fn provide<R>(&self, value: T, f: impl FnOnce() -> R) -> R {
        with_locals_frame(|| {
            set_local_boxed(self.key(), Box::new(value));
            f()
        })
    }

    /// The innermost provided value, or the channel's default.
    pub fn get(&self) -> T {
        let key = self.key();
        LOCALS_STACK.with(|st| {
            for frame in st.borrow().iter().rev() {
                if let Some(v) = frame.get(&key)
                    && let Some(t) = v.downcast_ref::<T>()
                {
                    return t.clone();
                }
            }
            (self.default)()
        })
    }

    /// True while some ancestor is providing this channel.
    pub fn is_provided(&self) -> bool {
        let key = self.key();
        LOCALS_STACK.with(|st| st.borrow().iter().rev().any(|f| f.contains_key(&key)))
    }
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Frame guard so the frame pops even if `f` unwinds.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(key: Key, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(key, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(key, v);
            st.borrow_mut().push(m);
        }
    });
}

/// Color theme read by widgets. Kept small and semantic.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// App root background.
    pub background: Color,
    /// Container surface (cards, sections).
    pub surface: Color,
    /// Foreground on top of `surface`/`background`.
    pub on_surface: Color,
    /// Accent color for buttons and links.
    pub primary: Color,
    /// Foreground on top of `primary`.
    pub on_primary: Color,
    /// Low-emphasis outline color.
    pub outline: Color,
    /// Focus ring color.
    pub focus: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            primary: Color::from_hex("#34AF82"),
            on_primary: Color::WHITE,
            outline: Color::from_hex("#555555"),
            focus: Color::from_hex("#88CCFF"),
        }
    }
}

pub static THEME: Local<Theme> = Local::new("theme", Theme::default);

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    THEME.provide(theme, f)
}

pub fn theme() -> Theme {
    THEME.get()
}
