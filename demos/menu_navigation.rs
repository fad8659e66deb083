//! Menu Navigation
//!
//! Menu screens as states, button clicks as triggerers. Each screen lists
//! the screens it can navigate to as neighbors; the character screen keeps
//! the chosen character in a shared preference.
//!
//! Key concepts:
//! - One-shot triggers consumed on evaluation
//! - Cyclic graphs (Main -> Help -> Main)
//! - Snapshots of the running machine
//!
//! Run with: cargo run --example menu_navigation

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tickstate::checkpoint::Snapshot;
use tickstate::core::{GraphError, StateGraph, StateId, StateValue, Triggerer};
use tickstate::driver::TickDriver;
use tickstate::state_enum;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Menu {
        Main,
        Help,
        Difficulty,
        Characters,
        Gameplay,
    }
}

/// The most recent button click, consumed by the first triggerer that
/// matches it.
#[derive(Clone, Default)]
struct Clicks(Rc<Cell<Option<Menu>>>);

impl Clicks {
    fn click(&self, target: Menu) {
        self.0.set(Some(target));
    }

    fn on(&self, target: Menu) -> Triggerer {
        let clicks = Rc::clone(&self.0);
        Triggerer::new(move || {
            if clicks.get() == Some(target) {
                clicks.set(None);
                true
            } else {
                false
            }
        })
    }
}

fn screen(
    graph: &mut StateGraph<Menu>,
    menu: Menu,
    clicks: &Clicks,
) -> Result<StateId, GraphError> {
    graph
        .state(menu)
        .triggerer(clicks.on(menu))
        .on_enter(move || println!("  show {}", menu.name()))
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Menu Navigation ===\n");

    let clicks = Clicks::default();
    let character = Rc::new(RefCell::new(String::from("Sebas")));

    let mut graph = StateGraph::new();
    let main_menu = screen(&mut graph, Menu::Main, &clicks)?;
    let help = screen(&mut graph, Menu::Help, &clicks)?;
    let difficulty = screen(&mut graph, Menu::Difficulty, &clicks)?;
    let characters = screen(&mut graph, Menu::Characters, &clicks)?;
    let gameplay = screen(&mut graph, Menu::Gameplay, &clicks)?;

    let selected = Rc::clone(&character);
    graph[characters].set_on_exit(move || println!("  selected character: {}", selected.borrow()));

    for (from, to) in [
        (main_menu, difficulty),
        (main_menu, help),
        (help, main_menu),
        (difficulty, characters),
        (difficulty, main_menu),
        (characters, gameplay),
    ] {
        graph.add_neighbor(from, to)?;
    }

    let mut driver = TickDriver::new(graph);
    driver.start(main_menu)?;

    let script: [(Option<Menu>, Option<&str>); 6] = [
        (Some(Menu::Help), None),
        (Some(Menu::Main), None),
        (Some(Menu::Difficulty), None),
        (Some(Menu::Characters), None),
        (None, Some("Lucia")),
        (Some(Menu::Gameplay), None),
    ];
    for (click, pick) in script {
        if let Some(target) = click {
            clicks.click(target);
        }
        if let Some(name) = pick {
            *character.borrow_mut() = name.to_string();
        }
        driver.tick()?;
    }

    let snapshot = Snapshot::from_driver(&driver);
    println!("\nSnapshot after {} ticks:", snapshot.tick);
    println!("{}", snapshot.to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
