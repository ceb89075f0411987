//! Imperative view handles.
//!
//! A `FocusHandle` is an opaque reference to one rendered view, bound via
//! `Modifier::bind_focus` and populated by the frame pass after layout. It
//! exists for imperative side-effects (requesting focus), never for reading
//! data back out of the tree. Before the first frame the handle is empty and
//! every imperative call reports `HandleError::Unbound` instead of
//! panicking.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::HandleError;
use crate::runtime;
use crate::view::ViewId;

#[derive(Clone, Default)]
pub struct FocusHandle(Rc<Cell<Option<ViewId>>>);

impl FocusHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bound view id, if the view has been painted at least once.
    pub fn bound(&self) -> Option<ViewId> {
        self.0.get()
    }

    /// Called by the frame pass when the bound view is painted.
    pub fn bind(&self, id: ViewId) {
        self.0.set(Some(id));
    }

    /// Forget the binding; used when the owning view unmounts.
    pub fn clear(&self) {
        self.0.set(None);
    }

    /// Request focus for the bound view. The request is queued and applied
    /// by the scheduler before the next frame.
    pub fn focus(&self) -> Result<(), HandleError> {
        let id = self.0.get().ok_or(HandleError::Unbound)?;
        runtime::request_focus(id);
        Ok(())
    }
}
