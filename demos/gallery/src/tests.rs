//! Behavior tests for the demos, driven the same way the driver drives
//! them: compose a frame, dispatch to its hit regions, compose again, and
//! look at the printed scene.

use pergola_core::prelude::*;
use pergola_core::runtime::reset_composition;
use pergola_ui::render;

use crate::app::{self, Demo};
use crate::catalog::{CATALOG, Catalog};
use crate::pages::routed::route_table;

fn catalog() -> Catalog {
    Catalog::load().expect("bundled catalog parses")
}

fn compose(sched: &mut Scheduler) -> Frame {
    CATALOG.provide(catalog(), || sched.compose(app::app, render::paint))
}

fn click(frame: &Frame, label: &str) {
    let region = frame
        .hit_regions
        .iter()
        .find(|h| h.label == label)
        .unwrap_or_else(|| panic!("no region labeled '{label}'"));
    let on_click = region.on_click.clone().expect("region is clickable");
    on_click();
}

fn type_into(frame: &Frame, label: &str, text: &str) {
    let region = frame
        .hit_regions
        .iter()
        .find(|h| h.label == label)
        .unwrap_or_else(|| panic!("no region labeled '{label}'"));
    let on_change = region.on_text_change.clone().expect("region accepts text");
    on_change(text.to_string());
}

#[test]
fn counter_counts_every_click() {
    reset_composition();
    let mut sched = Scheduler::new();

    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("Button clicked 0 times."));

    // Three clicks against one frame, faster than any recompose; the
    // transform-style update must not lose any of them.
    click(&frame, "Click to Update Count");
    click(&frame, "Click to Update Count");
    click(&frame, "Click to Update Count");

    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("Button clicked 3 times."));
}

#[test]
fn counter_state_resets_when_the_demo_unmounts() {
    reset_composition();
    let mut sched = Scheduler::new();

    let frame = compose(&mut sched);
    click(&frame, "Click to Update Count");
    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("Button clicked 1 times."));

    app::switch_to(Demo::Styled);
    compose(&mut sched);
    app::switch_to(Demo::Counter);

    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("Button clicked 0 times."));
}

#[test]
fn focus_button_focuses_the_field_after_it_rendered() {
    reset_composition();
    let mut sched = Scheduler::new();
    app::switch_to(Demo::Reference);

    let frame = compose(&mut sched);
    assert!(!frame.scene.to_text().contains("(focused)"));

    click(&frame, "Focus Search Input");
    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("(focused)"));
    // Focus landed on the text field, not the button.
    let field = frame
        .hit_regions
        .iter()
        .find(|h| h.label == "Enter Search Term")
        .expect("search field");
    assert_eq!(sched.focused, Some(field.id));
}

#[test]
fn typing_flows_through_the_controlled_field() {
    reset_composition();
    let mut sched = Scheduler::new();
    app::switch_to(Demo::Reference);

    let frame = compose(&mut sched);
    type_into(&frame, "Enter Search Term", "mimikyu");

    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("[mimikyu]"));
}

#[test]
fn custom_router_switches_fragments_by_link() {
    reset_composition();
    let mut sched = Scheduler::new();
    app::switch_to(Demo::CustomRouter);

    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("Homepage!"));

    click(&frame, "About");
    let frame = compose(&mut sched);
    let text = frame.scene.to_text();
    assert!(text.contains("About!"));
    assert!(!text.contains("Homepage!"));

    click(&frame, "Homepage");
    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("Homepage!"));
}

#[test]
fn grocery_routes_carry_their_own_data() {
    reset_composition();
    let mut sched = Scheduler::new();
    app::switch_to(Demo::Routed);

    let frame = compose(&mut sched);
    click(&frame, "Monday's Groceries");
    let frame = compose(&mut sched);
    let text = frame.scene.to_text();
    assert!(text.contains("on Monday:"));
    assert!(text.contains("• Milk"));
    assert!(text.contains("• Eggs"));

    click(&frame, "Tuesday's Groceries");
    let frame = compose(&mut sched);
    let text = frame.scene.to_text();
    assert!(text.contains("on Tuesday:"));
    assert!(text.contains("• Oreos"));
    assert!(text.contains("• Cucumbers"));
}

#[test]
fn pokemon_selection_and_programmatic_home() {
    reset_composition();
    let mut sched = Scheduler::new();
    app::switch_to(Demo::Routed);

    let frame = compose(&mut sched);
    click(&frame, "View Plant Pokemon");
    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("Select a Pokemon"));

    click(&frame, "Bulbasaur");
    let frame = compose(&mut sched);
    assert!(
        frame
            .scene
            .to_text()
            .contains("Current Pokemon: Bulbasaur")
    );

    click(&frame, "Click to go Home");
    let frame = compose(&mut sched);
    assert!(frame.scene.to_text().contains("Welcome home."));
}

#[test]
fn unmatched_locations_render_the_not_found_view() {
    let view = CATALOG.provide(catalog(), || route_table().render("/no/such/page"));
    let (scene, _, _) = render::paint(&view, None);
    assert!(scene.to_text().contains("Not Found"));
}

#[test]
fn out_of_range_pokemon_renders_not_found_instead_of_panicking() {
    let view = CATALOG.provide(catalog(), || route_table().render("/plant-pokemon/99"));
    let (scene, _, _) = render::paint(&view, None);
    assert!(scene.to_text().contains("No such pokemon."));

    let view = CATALOG.provide(catalog(), || route_table().render("/plant-pokemon/0"));
    let (scene, _, _) = render::paint(&view, None);
    assert!(scene.to_text().contains("Current Pokemon: Bulbasaur"));
}

#[test]
fn styled_components_show_their_conditional_rules() {
    reset_composition();
    let mut sched = Scheduler::new();
    app::switch_to(Demo::Styled);

    let frame = compose(&mut sched);
    let text = frame.scene.to_text();

    // The paragraph carries its definition-time rules.
    assert!(text.contains("Grocery List [fg=#000000] [bg=#FA8072] [border=3px #000000]"));
    // Plain custom component: salmon on black, no underline.
    assert!(text.contains("This is a custom component! [fg=#FA8072] [bg=#000000]"));
    // Primary custom component: white on palevioletred, underlined.
    assert!(text.contains("This is a custom component! [fg=#FFFFFF] [bg=#DB7093] [underline]"));
}

#[test]
fn recomposing_without_input_is_idempotent() {
    reset_composition();
    let mut sched = Scheduler::new();

    for demo in Demo::ALL {
        app::switch_to(demo);
        let first = compose(&mut sched).scene.to_text();
        let second = compose(&mut sched).scene.to_text();
        assert_eq!(first, second, "demo '{}' drifted", demo.key());
    }
}
