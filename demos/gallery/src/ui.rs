#![allow(non_snake_case)]

use pergola_core::prelude::*;
use pergola_ui::*;

/// Top bar with the gallery title.
pub fn TopBar(title: &str) -> View {
    Row(Modifier::new()
        .padding(12.0)
        .background(theme().surface)
        .border(1.0, theme().outline, 0.0))
    .child(Text(title).size(20.0).color(theme().on_surface))
}

/// A titled section with consistent spacing.
pub fn Section(title: &str, body: View) -> View {
    Column(Modifier::new().padding(8.0)).child((
        Text(title).size(18.0).color(theme().on_surface),
        body,
    ))
}
