/// High-level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Button,
    Link,
    TextField,
    Container,
}

/// Semantics attached to a `View`; flattened into `SemNode`s per frame.
#[derive(Clone, Debug)]
pub struct Semantics {
    pub role: Role,
    /// Human-readable label. For buttons and links this is the announced
    /// name.
    pub label: Option<String>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self { role, label: None }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
