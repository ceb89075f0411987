use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::view::{Callback, Scene, TextCallback, View, ViewId};
use crate::semantics::Role;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static ROOT_SCOPE: RefCell<Option<Scope>> = const { RefCell::new(None) };
    static PENDING_FOCUS: Cell<Option<FocusRequest>> = const { Cell::new(None) };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FocusRequest {
    Focus(ViewId),
    Blur,
}

#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

pub struct ComposeGuard {
    scope: Scope,
}

impl ComposeGuard {
    pub fn begin() -> Self {
        let scope = Scope::new();

        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.cursor = 0;
        });

        ROOT_SCOPE.with(|rs| {
            *rs.borrow_mut() = Some(scope.clone());
        });

        ComposeGuard { scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        ROOT_SCOPE.with(|rs| {
            *rs.borrow_mut() = None;
        });
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            // A different tree now occupies this slot (demo switch); the
            // stored value is replaced and the state starts over.
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let key = key.into();

        if let Some(existing) = c.keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            } else {
                log::warn!(
                    "remember_with_key: key '{}' reused with a different type; replacing.",
                    key
                );
            }
        }

        let rc: Rc<T> = Rc::new(init());
        c.keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    })
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Clear the sequential slots only; keyed slots survive. The gallery calls
/// this when a demo unmounts so the next demo starts from scratch instead
/// of inheriting slot positions.
pub fn clear_slots() {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        c.slots.clear();
        c.cursor = 0;
    });
}

/// Clear every composition slot. Tests use this to isolate compositions
/// from each other.
pub fn reset_composition() {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        c.slots.clear();
        c.keyed_slots.clear();
        c.cursor = 0;
    });
}

/// Queue a focus request; the scheduler applies it before the next frame.
pub fn request_focus(id: ViewId) {
    PENDING_FOCUS.with(|p| p.set(Some(FocusRequest::Focus(id))));
}

/// Queue a focus reset. View ids are only stable while the tree shape is,
/// so whatever unmounts the focused subtree must blur rather than leave a
/// stale id pointing into the next frame's tree.
pub fn request_blur() {
    PENDING_FOCUS.with(|p| p.set(Some(FocusRequest::Blur)));
}

fn take_focus_request() -> Option<FocusRequest> {
    PENDING_FOCUS.with(|p| p.take())
}

/// Output of composition for one tick: printable scene + input/semantics.
pub struct Frame {
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
    pub focus_chain: Vec<ViewId>,
}

/// One interactive region of a frame. The driver dispatches commands to
/// these by view id.
#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub label: String,
    pub on_click: Option<Callback>,
    pub on_text_change: Option<TextCallback>,
    pub focusable: bool,
}

/// Flattened semantics node, the source of truth for assistive output.
#[derive(Clone, Debug)]
pub struct SemNode {
    /// Stable id, shared with the associated `HitRegion` / `ViewId`.
    pub id: ViewId,
    pub role: Role,
    pub label: Option<String>,
    pub focused: bool,
}

pub struct Scheduler {
    pub focused: Option<ViewId>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self { focused: None }
    }

    /// Compose one frame: drain pending focus requests, build the root view
    /// under a fresh composition pass, then paint it.
    ///
    /// View ids are stamped by the paint pass in tree order, so a tree whose
    /// shape does not change keeps the same ids frame over frame; queued
    /// focus requests therefore stay valid across the recompose they
    /// trigger.
    pub fn compose<F>(
        &mut self,
        mut build_root: F,
        layout_paint: impl Fn(&View, Option<ViewId>) -> (Scene, Vec<HitRegion>, Vec<SemNode>),
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        match take_focus_request() {
            Some(FocusRequest::Focus(id)) => self.focused = Some(id),
            Some(FocusRequest::Blur) => self.focused = None,
            None => {}
        }

        let guard = ComposeGuard::begin();
        let root = guard.scope().run(|| build_root(self));
        let (scene, hits, sem) = layout_paint(&root, self.focused);

        let focus_chain: Vec<ViewId> = hits.iter().filter(|h| h.focusable).map(|h| h.id).collect();

        Frame {
            scene,
            hit_regions: hits,
            semantics_nodes: sem,
            focus_chain,
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
