//! # State, locals, and handles
//!
//! Pergola's core is a small composition runtime; the pieces the demos lean
//! on are:
//!
//! - `Signal<T>` — observable value with literal (`set`) and transform
//!   (`update`) writes.
//! - `remember*` — slot storage bound to composition, so view functions can
//!   own state across frames.
//! - `Local<T>` — named composition locals: one ancestor provides, any
//!   descendant reads, no parameter threading.
//! - `FocusHandle` — imperative handle to one rendered view, empty until
//!   bound by a frame pass.
//! - `Scope` / `effect` — side-effects with cleanup, disposed when the
//!   owning subtree unmounts.
//!
//! ## Signals
//!
//! ```rust
//! use pergola_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! `update` applies the closure under the cell's borrow, so two updates
//! issued back-to-back in one handler compose instead of racing on a stale
//! snapshot. Counter-style state should always go through `update`.
//!
//! ## Remembered state
//!
//! ```rust
//! use pergola_core::*;
//!
//! fn counter_view() -> View {
//!     let count = remember(|| signal(0i64));
//!     // `count` is the same cell on every recompose of this slot.
//!     View::new(0, ViewKind::Column)
//! }
//! ```
//!
//! - `remember` is order-based: the Nth call in a composition refers to the
//!   Nth slot.
//! - `remember_with_key` is key-based and stable across conditional
//!   branches.

pub mod color;
pub mod effects;
pub mod error;
pub mod handle;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod view;

pub use color::*;
pub use effects::*;
pub use error::*;
pub use handle::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
