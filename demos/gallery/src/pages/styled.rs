//! Scoped-style demo.
//!
//! Presentation lives on the component definitions: each styled variant is
//! a base widget with a `Style` attached, merged under whatever the caller
//! supplies. The custom component's rules flip on its `underline` and
//! `primary` inputs, decided fresh every render.

use pergola_core::prelude::*;
use pergola_ui::style::Style;
use pergola_ui::{Column, Text, ViewExt};

fn item_style() -> Style {
    Style::named("item")
        .border(4.0, Color::from_hex("#FF0000"), 2.0)
        .color(Color::BLACK)
        .background(Color::from_hex("#E6E6FA"))
        .font_size(18.0)
        .margin(16.0)
}

fn paragraph_style() -> Style {
    Style::named("paragraph")
        .color(Color::BLACK)
        .padding(16.0)
        .background(Color::from_hex("#FA8072"))
        .border(3.0, Color::BLACK, 6.0)
}

fn custom_style(underline: bool, primary: bool) -> Style {
    Style::named("custom")
        .color(Color::from_hex("#FA8072"))
        .padding(16.0)
        .background(Color::BLACK)
        .underline(underline)
        .when(primary, |s| {
            s.background(Color::from_hex("#DB7093")).color(Color::WHITE)
        })
}

/// Accepts the caller's modifier the way any base widget would; styled
/// variants forward their generated rules through it.
fn my_custom_component(modifier: Modifier) -> View {
    Text("This is a custom component!").modifier(modifier)
}

fn styled_custom(underline: bool, primary: bool, modifier: Modifier) -> View {
    custom_style(underline, primary).apply(my_custom_component(modifier))
}

pub fn screen() -> View {
    let mut kids = vec![paragraph_style().apply(Text("Grocery List"))];
    kids.extend(
        ["Eggs", "Cucumbers", "Chips"]
            .iter()
            .map(|item| item_style().apply(Text(format!("• {item}")))),
    );
    kids.push(styled_custom(false, false, Modifier::new()));
    kids.push(styled_custom(true, true, Modifier::new()));

    Column(Modifier::new().padding(8.0)).child(kids)
}
