use crate::handle::FocusHandle;
use crate::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

/// Presentation and behavior attached to a single view.
///
/// Every field is optional; unset fields fall through to the widget's
/// defaults. `merge_under` implements scoped-style composition: a style's
/// generated modifier sits underneath whatever the caller supplied, and the
/// caller wins for any field both set.
#[derive(Clone, Default)]
pub struct Modifier {
    pub padding: Option<f32>,
    pub margin: Option<f32>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub focus_bind: Option<FocusHandle>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("padding", &self.padding)
            .field("margin", &self.margin)
            .field("background", &self.background)
            .field("border", &self.border)
            .field("focus_bind", &self.focus_bind.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }

    pub fn margin(mut self, v: f32) -> Self {
        self.margin = Some(v);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }

    /// Record `handle` as bound to this view; the frame pass stamps the
    /// view's id into the handle once the view has been painted.
    pub fn bind_focus(mut self, handle: &FocusHandle) -> Self {
        self.focus_bind = Some(handle.clone());
        self
    }

    /// Overlay this modifier underneath `over`: fields set by `over` win,
    /// fields it left unset fall back to `self`. Pure; neither input is
    /// mutated.
    pub fn merge_under(&self, over: &Modifier) -> Modifier {
        Modifier {
            padding: over.padding.or(self.padding),
            margin: over.margin.or(self.margin),
            background: over.background.or(self.background),
            border: over.border.clone().or_else(|| self.border.clone()),
            focus_bind: over
                .focus_bind
                .clone()
                .or_else(|| self.focus_bind.clone()),
        }
    }
}
