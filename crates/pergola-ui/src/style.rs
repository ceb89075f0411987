//! Scoped styles.
//!
//! A `Style` is a set of presentation rules attached to a component
//! definition rather than to a global stylesheet. Applying a style merges
//! its rules *under* whatever the caller already set on the view, so an
//! externally supplied modifier survives, and conditional rules are decided
//! purely from the inputs at the render site. A `Style` value holds no
//! mutable state; build it fresh every render.
//!
//! ```rust
//! use pergola_core::Color;
//! use pergola_ui::{Text, style::Style};
//!
//! fn fancy(text: &str, primary: bool) -> pergola_core::View {
//!     Style::named("fancy")
//!         .color(Color::BLACK)
//!         .background(Color::from_hex("#FA8072"))
//!         .when(primary, |s| {
//!             s.background(Color::from_hex("#DB7093")).color(Color::WHITE)
//!         })
//!         .apply(Text(text))
//! }
//! ```

use pergola_core::*;

const DEFAULT_FONT_SIZE: f32 = 16.0;

#[derive(Clone, Debug, Default)]
pub struct Style {
    name: &'static str,
    modifier: Modifier,
    text_color: Option<Color>,
    font_size: Option<f32>,
    underline: Option<bool>,
}

impl Style {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Stable identity for this style, derived from its name. Rendered
    /// output does not depend on it; it exists for debugging and assistive
    /// labels.
    pub fn class(&self) -> String {
        format!("pg-{}", self.name)
    }

    // Rule builders. Later calls override earlier ones within the same
    // style, which is what lets `when` blocks supersede the base rules.

    pub fn padding(mut self, v: f32) -> Self {
        self.modifier.padding = Some(v);
        self
    }

    pub fn margin(mut self, v: f32) -> Self {
        self.modifier.margin = Some(v);
        self
    }

    pub fn background(mut self, c: Color) -> Self {
        self.modifier.background = Some(c);
        self
    }

    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.modifier.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }

    pub fn color(mut self, c: Color) -> Self {
        self.text_color = Some(c);
        self
    }

    pub fn font_size(mut self, v: f32) -> Self {
        self.font_size = Some(v);
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    /// Fold `rules` into the style only when `cond` holds. Evaluated fresh
    /// at every render site; no style state is retained between renders.
    pub fn when(self, cond: bool, rules: impl FnOnce(Style) -> Style) -> Self {
        if cond { rules(self) } else { self }
    }

    /// Attach the rules to `view`. The view's own modifier and text
    /// attributes win over the style's for every field both set.
    pub fn apply(&self, mut view: View) -> View {
        view.modifier = self.modifier.merge_under(&view.modifier);
        if let ViewKind::Text {
            color,
            font_size,
            underline,
            ..
        } = &mut view.kind
        {
            if color.is_none() {
                *color = self.text_color;
            }
            if let Some(fs) = self.font_size
                && *font_size == DEFAULT_FONT_SIZE
            {
                *font_size = fs;
            }
            if let Some(u) = self.underline
                && !*underline
            {
                *underline = u;
            }
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Text, TextExt};

    fn custom(primary: bool, underline: bool) -> Style {
        Style::named("custom")
            .color(Color::from_hex("#FA8072"))
            .padding(16.0)
            .background(Color::BLACK)
            .underline(underline)
            .when(primary, |s| {
                s.background(Color::from_hex("#DB7093")).color(Color::WHITE)
            })
    }

    #[test]
    fn conditional_rules_follow_inputs() {
        let plain = custom(false, false).apply(Text("x"));
        assert_eq!(plain.modifier.background, Some(Color::BLACK));

        let primary = custom(true, false).apply(Text("x"));
        assert_eq!(
            primary.modifier.background,
            Some(Color::from_hex("#DB7093"))
        );
        if let ViewKind::Text { color, .. } = primary.kind {
            assert_eq!(color, Some(Color::WHITE));
        } else {
            panic!("expected text view");
        }
    }

    #[test]
    fn underline_follows_its_input() {
        let on = custom(false, true).apply(Text("x"));
        let off = custom(false, false).apply(Text("x"));
        let underline_of = |v: &View| match v.kind {
            ViewKind::Text { underline, .. } => underline,
            _ => panic!("expected text view"),
        };
        assert!(underline_of(&on));
        assert!(!underline_of(&off));
    }

    #[test]
    fn externally_supplied_attributes_survive_apply() {
        let view = Text("x")
            .color(Color::from_hex("#123456"))
            .modifier(Modifier::new().background(Color::WHITE));
        let styled = custom(true, false).apply(view);

        // Caller's modifier and text color beat the style's.
        assert_eq!(styled.modifier.background, Some(Color::WHITE));
        if let ViewKind::Text { color, .. } = styled.kind {
            assert_eq!(color, Some(Color::from_hex("#123456")));
        } else {
            panic!("expected text view");
        }
        // Rules the caller left unset still land.
        assert_eq!(styled.modifier.padding, Some(16.0));
    }

    #[test]
    fn class_is_stable_per_definition() {
        assert_eq!(custom(false, false).class(), "pg-custom");
        assert_eq!(custom(true, true).class(), "pg-custom");
    }
}
