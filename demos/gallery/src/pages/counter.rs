//! Shared-state broadcast demo.
//!
//! One ancestor owns the count and publishes it, the shared setter, and a
//! static greeting through a composition local. The display and the
//! updater below it never reference each other; both subscribe to the
//! channel. The published aggregate is rebuilt on every render, so
//! subscribers always see the live setter.

use pergola_core::{Local, prelude::*};
use pergola_ui::*;

use crate::ui::Section;

/// What the provider broadcasts to its subtree.
#[derive(Clone)]
pub struct CounterScope {
    pub count: i64,
    /// The shared cell itself: `set` for literal writes, `update` for
    /// transform writes. Subscribers bump through `update` so rapid clicks
    /// compose instead of clobbering each other.
    pub cell: Signal<i64>,
    pub greeting: &'static str,
}

pub static COUNTER: Local<Option<CounterScope>> = Local::new("counter", || None);

pub fn screen() -> View {
    let count = remember(|| signal(0i64));

    let scope = CounterScope {
        count: count.get(),
        cell: count.as_ref().clone(),
        greeting: "Hello",
    };

    COUNTER.provide(Some(scope), || {
        Section(
            "Counter",
            Column(Modifier::new().padding(4.0)).child((
                count_display(),
                hello(),
                count_updater(),
            )),
        )
    })
}

fn count_display() -> View {
    match COUNTER.get() {
        Some(scope) => Text(format!("Button clicked {} times.", scope.count)),
        None => Text("The counter is not provided here."),
    }
}

fn hello() -> View {
    match COUNTER.get() {
        Some(scope) => Text(scope.greeting),
        None => Text(""),
    }
}

fn count_updater() -> View {
    let cell = COUNTER.get().map(|scope| scope.cell);
    Button("Click to Update Count", move || match &cell {
        Some(cell) => cell.update(|v| *v = v.saturating_add(1)),
        None => log::warn!("count updater composed without a counter provider"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_outside_a_provider_get_the_default() {
        assert!(COUNTER.get().is_none());
    }

    #[test]
    fn provider_rebuilds_the_scope_with_the_current_count() {
        let cell = signal(5i64);
        let scope = CounterScope {
            count: cell.get(),
            cell: cell.clone(),
            greeting: "Hello",
        };
        let seen = COUNTER.provide(Some(scope), || COUNTER.get().map(|s| s.count));
        assert_eq!(seen, Some(5));
    }
}
