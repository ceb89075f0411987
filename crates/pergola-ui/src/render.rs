//! Line-oriented frame pass.
//!
//! `paint` walks a composed tree and produces the printable `Scene`, the
//! frame's `HitRegion`s, and flattened semantics. It stands in for a real
//! layout-and-raster backend: one scene node per line, container padding
//! shown as indentation. Margins and radii have no line-level equivalent
//! and are not surfaced.
//!
//! Ids are stamped in tree order before the walk, so an unchanged tree gets
//! identical ids (and identical output) on every pass. Focus handles bound
//! through `Modifier::bind_focus` are populated here, after the view has
//! its id.

use pergola_core::*;

pub fn paint(root: &View, focused: Option<ViewId>) -> (Scene, Vec<HitRegion>, Vec<SemNode>) {
    let mut next = 1u64;
    let root = stamp(root.clone(), &mut next);

    let mut scene = Scene::default();
    let mut hits = Vec::new();
    let mut sem = Vec::new();
    walk(&root, 0, focused, &mut scene, &mut hits, &mut sem);
    (scene, hits, sem)
}

fn stamp(mut v: View, next: &mut u64) -> View {
    v.id = *next;
    *next += 1;
    v.children = v.children.into_iter().map(|c| stamp(c, next)).collect();
    v
}

fn walk(
    v: &View,
    indent: usize,
    focused: Option<ViewId>,
    scene: &mut Scene,
    hits: &mut Vec<HitRegion>,
    sem: &mut Vec<SemNode>,
) {
    if let Some(handle) = &v.modifier.focus_bind {
        handle.bind(v.id);
    }

    match &v.kind {
        ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {
            push_sem(v, None, focused, sem);
            // A padded container reads as one nesting level. Rows flow
            // inline in a real backend; the line printer keeps one node per
            // line either way.
            let child_indent = if v.modifier.padding.is_some() {
                indent + 1
            } else {
                indent
            };
            for c in &v.children {
                walk(c, child_indent, focused, scene, hits, sem);
            }
        }
        ViewKind::Text {
            text,
            color,
            font_size,
            underline,
        } => {
            push_sem(v, Some(text.clone()), focused, sem);
            scene.nodes.push(SceneNode::Text {
                indent,
                text: text.clone(),
                color: *color,
                font_size: *font_size,
                underline: *underline,
                background: v.modifier.background,
                border: v.modifier.border.clone(),
            });
        }
        ViewKind::Button { text, on_click } => {
            push_sem(v, Some(text.clone()), focused, sem);
            scene.nodes.push(SceneNode::Button {
                indent,
                id: v.id,
                label: text.clone(),
            });
            hits.push(HitRegion {
                id: v.id,
                label: text.clone(),
                on_click: on_click.clone(),
                on_text_change: None,
                focusable: true,
            });
        }
        ViewKind::Link {
            label,
            to,
            on_navigate,
        } => {
            push_sem(v, Some(label.clone()), focused, sem);
            scene.nodes.push(SceneNode::Link {
                indent,
                id: v.id,
                label: label.clone(),
                to: to.clone(),
            });
            let on_click = on_navigate.clone().map(|f| {
                let to = to.clone();
                let cb: Callback = std::rc::Rc::new(move || f(&to));
                cb
            });
            hits.push(HitRegion {
                id: v.id,
                label: label.clone(),
                on_click,
                on_text_change: None,
                focusable: true,
            });
        }
        ViewKind::TextField {
            value,
            hint,
            on_change,
        } => {
            push_sem(v, Some(hint.clone()), focused, sem);
            scene.nodes.push(SceneNode::Field {
                indent,
                id: v.id,
                value: value.clone(),
                hint: hint.clone(),
                focused: focused == Some(v.id),
            });
            hits.push(HitRegion {
                id: v.id,
                label: hint.clone(),
                on_click: None,
                on_text_change: on_change.clone(),
                focusable: true,
            });
        }
    }
}

fn push_sem(v: &View, label: Option<String>, focused: Option<ViewId>, sem: &mut Vec<SemNode>) {
    if let Some(s) = &v.semantics {
        sem.push(SemNode {
            id: v.id,
            role: s.role,
            label: s.label.clone().or(label),
            focused: focused == Some(v.id),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Box as VBox, Button, Column, Link, Text, TextField, ViewExt};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tree() -> View {
        Column(Modifier::new().padding(8.0)).child((
            Text("Hello"),
            Button("Press", || {}),
            Link("About", "about", |_| {}),
        ))
    }

    #[test]
    fn paint_is_idempotent_for_an_unchanged_tree() {
        let v = tree();
        let (a, _, _) = paint(&v, None);
        let (b, _, _) = paint(&v, None);
        assert_eq!(a.to_text(), b.to_text());
    }

    #[test]
    fn interactive_nodes_become_hit_regions_in_paint_order() {
        let (_, hits, _) = paint(&tree(), None);
        let labels: Vec<&str> = hits.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, ["Press", "About"]);
        assert!(hits.iter().all(|h| h.focusable));
    }

    #[test]
    fn padded_containers_indent_their_children() {
        let (scene, _, _) = paint(&tree(), None);
        let text = scene.to_text();
        assert!(text.contains("  Hello\n"), "got:\n{text}");
    }

    #[test]
    fn focus_handle_is_bound_during_paint() {
        let handle = FocusHandle::new();
        let v = VBox(Modifier::new()).child(
            TextField("", "Search", |_| {})
                .modifier(Modifier::new().bind_focus(&handle)),
        );
        assert_eq!(handle.bound(), None);
        let (_, hits, _) = paint(&v, None);
        assert_eq!(handle.bound(), Some(hits[0].id));
    }

    #[test]
    fn field_shows_focus_only_when_focused() {
        let v = VBox(Modifier::new()).child(TextField("abc", "Search", |_| {}));
        let (_, hits, _) = paint(&v, None);
        let field_id = hits[0].id;

        let (unfocused, _, _) = paint(&v, None);
        assert!(!unfocused.to_text().contains("(focused)"));

        let (focused, _, _) = paint(&v, Some(field_id));
        assert!(focused.to_text().contains("(focused)"));
    }

    #[test]
    fn link_click_dispatches_its_href() {
        let seen = Rc::new(RefCell::new(String::new()));
        let v = {
            let seen = seen.clone();
            VBox(Modifier::new()).child(Link("Go", "somewhere", move |to| {
                *seen.borrow_mut() = to.to_string();
            }))
        };
        let (_, hits, _) = paint(&v, None);
        let click = hits[0].on_click.clone().expect("link is clickable");
        click();
        assert_eq!(&*seen.borrow(), "somewhere");
    }

    #[test]
    fn semantics_pick_up_visible_labels() {
        let (_, _, sem) = paint(&tree(), None);
        let button = sem
            .iter()
            .find(|s| s.role == Role::Button)
            .expect("button node");
        assert_eq!(button.label.as_deref(), Some("Press"));
    }
}
