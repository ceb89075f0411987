//! Library-routed dispatcher.
//!
//! The same intent as the hand-rolled version, expressed as a declarative
//! route table: static patterns, a nested grocery-list branch with
//! distinct data per day, a parameterized pokemon lookup, and a trailing
//! catch-all for everything unmatched. The router reaches the links
//! through `with_router`; nothing here threads it by hand.

use pergola_core::prelude::*;
use pergola_router::{Link, NavigateButton, RouteMatch, Router, RouterHost, Routes, with_router};
use pergola_ui::{Column, Text, TextExt, ViewExt};

use crate::catalog::{CATALOG, Catalog};

pub fn screen() -> View {
    let router = remember(|| Router::new("/"));

    with_router(router.as_ref().clone(), || {
        let routes = route_table();
        Column(Modifier::new().padding(8.0)).child((
            Text("Welcome to our Website").size(24.0),
            Text("Website Nav").size(18.0),
            Link("Home", "/"),
            Link("About", "/about"),
            Link("View Plant Pokemon", "/plant-pokemon"),
            Link("Monday's Groceries", "/grocery-list/monday"),
            Link("Tuesday's Groceries", "/grocery-list/tuesday"),
            RouterHost(&routes),
            NavigateButton("Click to go Home", "/"),
        ))
    })
}

/// The full route table, first-match-wins top to bottom.
pub fn route_table() -> Routes {
    Routes::new()
        .route("/", |_| home())
        .nest("/grocery-list", |r| {
            r.route("monday", |_| grocery_list(&["Milk", "Eggs"], "Monday"))
                .route("tuesday", |_| {
                    grocery_list(&["Oreos", "Cucumbers"], "Tuesday")
                })
        })
        .route("/about", |_| about())
        .route("/plant-pokemon/*", plant_pokemons)
        .route("*", |_| not_found())
}

fn home() -> View {
    Column(Modifier::new().padding(4.0)).child((
        Text("Home").size(18.0),
        Text("Welcome home."),
    ))
}

fn about() -> View {
    Column(Modifier::new().padding(4.0)).child((
        Text("About").size(18.0),
        Text("All about us!"),
    ))
}

fn not_found() -> View {
    Column(Modifier::new().padding(4.0)).child((
        Text("Not Found").size(18.0),
        Text("Nothing lives at this address."),
    ))
}

fn grocery_list(items: &[&str], day: &str) -> View {
    let mut kids = vec![Text(format!("Don't forget to buy these things on {day}:")).size(18.0)];
    kids.extend(items.iter().map(|item| Text(format!("• {item}"))));
    Column(Modifier::new().padding(4.0)).child(kids)
}

/// Pokemon picker plus the parameterized detail route beneath it. The
/// remainder the catch-all swallowed is what the nested table matches.
fn plant_pokemons(m: &RouteMatch) -> View {
    let catalog = CATALOG.get();

    let mut kids = vec![Text("Select a Pokemon").size(18.0)];
    // Absolute targets so picking a second pokemon from a detail view does
    // not resolve relative to the detail path.
    kids.extend(
        catalog
            .iter()
            .enumerate()
            .map(|(i, p)| Link(p.name.clone(), format!("/plant-pokemon/{i}"))),
    );

    let detail = {
        let catalog = catalog.clone();
        Routes::new().route(":pokemonId", move |m| plant_pokemon(&catalog, m))
    };
    let rest = m.rest.clone().unwrap_or_default();
    kids.push(detail.render(&format!("/{rest}")));

    Column(Modifier::new().padding(4.0)).child(kids)
}

fn plant_pokemon(catalog: &Catalog, m: &RouteMatch) -> View {
    let index = m
        .param("pokemonId")
        .and_then(|raw| raw.parse::<usize>().ok());
    match index.and_then(|i| catalog.get(i)) {
        Some(pokemon) => Text(format!("Current Pokemon: {}", pokemon.name)).size(18.0),
        None => Text("No such pokemon."),
    }
}
