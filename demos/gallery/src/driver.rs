//! Interactive headless driver.
//!
//! Stands in for a platform event loop: compose a frame, print its scene,
//! read a command, dispatch it to the frame's hit regions, repeat.
//! Interactive views print their id in parentheses; `click 7` activates
//! the view painted as `(7)`.

use std::io::{self, BufRead, Write};

use pergola_core::prelude::*;
use pergola_ui::render;

use crate::app::{self, Demo};
use crate::catalog::{CATALOG, Catalog};

pub fn run(catalog: Catalog) -> anyhow::Result<()> {
    let mut sched = Scheduler::new();
    let stdin = io::stdin();

    println!("Pergola gallery — shared state, focus handles, routing, scoped styles.");
    print_help();

    loop {
        let frame = compose(&mut sched, &catalog);
        print!("{}", frame.scene.to_text());
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("quit") | Some("q") => break,
            Some("frame") => {}
            Some("sem") => print_semantics(&frame),
            Some("help") => print_help(),
            Some("demo") => match words.next().and_then(Demo::from_key) {
                Some(demo) => app::switch_to(demo),
                None => println!(
                    "known demos: {}",
                    Demo::ALL.map(|d| d.key()).join(", ")
                ),
            },
            Some("click") => match words.next().and_then(|w| w.parse::<ViewId>().ok()) {
                Some(id) => click(&frame, id),
                None => println!("usage: click <id>"),
            },
            Some("type") => {
                let id = words.next().and_then(|w| w.parse::<ViewId>().ok());
                let text = words.collect::<Vec<_>>().join(" ");
                match id {
                    Some(id) => type_into(&frame, id, text),
                    None => println!("usage: type <id> <text>"),
                }
            }
            Some(other) => println!("unknown command '{other}'; try 'help'"),
        }
    }
    Ok(())
}

fn compose(sched: &mut Scheduler, catalog: &Catalog) -> Frame {
    CATALOG.provide(catalog.clone(), || sched.compose(app::app, render::paint))
}

fn click(frame: &Frame, id: ViewId) {
    match frame.hit_regions.iter().find(|h| h.id == id) {
        Some(region) => match &region.on_click {
            Some(f) => f(),
            None => println!("({id}) '{}' is not clickable", region.label),
        },
        None => println!("no interactive view ({id}) in this frame"),
    }
}

fn type_into(frame: &Frame, id: ViewId, text: String) {
    match frame.hit_regions.iter().find(|h| h.id == id) {
        Some(region) => match &region.on_text_change {
            Some(f) => f(text),
            None => println!("({id}) '{}' does not accept text", region.label),
        },
        None => println!("no interactive view ({id}) in this frame"),
    }
}

fn print_semantics(frame: &Frame) {
    for node in &frame.semantics_nodes {
        println!(
            "({}) {:?} {:?}{}",
            node.id,
            node.role,
            node.label.as_deref().unwrap_or(""),
            if node.focused { " (focused)" } else { "" }
        );
    }
}

fn print_help() {
    println!("commands: click <id> | type <id> <text> | demo <key> | sem | frame | help | quit");
}
