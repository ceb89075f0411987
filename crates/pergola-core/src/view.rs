use crate::{Color, Modifier};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type NavigateCallback = Rc<dyn Fn(&str)>;
pub type TextCallback = Rc<dyn Fn(String)>;

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Text {
        text: String,
        /// `None` falls through to `theme().on_surface` at paint time.
        color: Option<Color>,
        font_size: f32,
        underline: bool,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    Link {
        label: String,
        to: String,
        on_navigate: Option<NavigateCallback>,
    },
    TextField {
        value: String,
        hint: String,
        on_change: Option<TextCallback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Text {
                text,
                color,
                font_size,
                underline,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("underline", underline)
                .finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::Link { label, to, .. } => f
                .debug_struct("Link")
                .field("label", label)
                .field("to", to)
                .finish(),
            ViewKind::TextField { value, hint, .. } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("hint", hint)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
}

/// Printable scene: one node per output line, in paint order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug)]
pub enum SceneNode {
    Text {
        indent: usize,
        text: String,
        /// Set only when the view asked for a color explicitly.
        color: Option<Color>,
        font_size: f32,
        underline: bool,
        background: Option<Color>,
        border: Option<crate::modifier::Border>,
    },
    Button {
        indent: usize,
        id: ViewId,
        label: String,
    },
    Link {
        indent: usize,
        id: ViewId,
        label: String,
        to: String,
    },
    Field {
        indent: usize,
        id: ViewId,
        value: String,
        hint: String,
        focused: bool,
    },
}

const DEFAULT_FONT_SIZE: f32 = 16.0;

impl Scene {
    /// Render the scene the way the gallery driver prints it. Interactive
    /// nodes carry their view id in parentheses so a driver command can
    /// address them; style deviations from the defaults are appended as
    /// bracketed annotations.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                SceneNode::Text {
                    indent,
                    text,
                    color,
                    font_size,
                    underline,
                    background,
                    border,
                } => {
                    pad(&mut out, *indent);
                    out.push_str(text);
                    if let Some(c) = color {
                        out.push_str(&format!(" [fg={}]", c.to_hex()));
                    }
                    if let Some(b) = background {
                        out.push_str(&format!(" [bg={}]", b.to_hex()));
                    }
                    if let Some(b) = border {
                        out.push_str(&format!(
                            " [border={}px {}]",
                            b.width,
                            b.color.to_hex()
                        ));
                    }
                    if *underline {
                        out.push_str(" [underline]");
                    }
                    if *font_size != DEFAULT_FONT_SIZE {
                        out.push_str(&format!(" [size={font_size}]"));
                    }
                }
                SceneNode::Button { indent, id, label } => {
                    pad(&mut out, *indent);
                    out.push_str(&format!("({id}) [{label}]"));
                }
                SceneNode::Link {
                    indent,
                    id,
                    label,
                    to,
                } => {
                    pad(&mut out, *indent);
                    out.push_str(&format!("({id}) <{label} href={to}>"));
                }
                SceneNode::Field {
                    indent,
                    id,
                    value,
                    hint,
                    focused,
                } => {
                    pad(&mut out, *indent);
                    let shown = if value.is_empty() {
                        format!("<{hint}>")
                    } else {
                        value.clone()
                    };
                    out.push_str(&format!("({id}) [{shown}]"));
                    if *focused {
                        out.push_str(" (focused)");
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

fn pad(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}
