//! Attack Control
//!
//! A character idles until the attack key goes down, plays an attack for a
//! fixed number of ticks, then falls back to idling.
//!
//! Key concepts:
//! - Input polling expressed as a triggerer
//! - A countdown keeping a self-deactivating state alive
//! - Animation playback from enter/exit hooks
//! - A fallback state for the driver
//!
//! Run with: RUST_LOG=tickstate=debug cargo run --example attack_control

use std::cell::Cell;
use std::rc::Rc;
use tickstate::core::{StateGraph, StateValue};
use tickstate::driver::{TickDriver, TickOutcome};
use tickstate::state_enum;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Action {
        Idle,
        Attack,
    }
}

const ATTACK_TICKS: u32 = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Attack Control ===\n");

    // Collaborators: a polled key and a tick-based timer.
    let key_down = Rc::new(Cell::new(false));
    let remaining = Rc::new(Cell::new(0u32));

    let mut graph = StateGraph::new();
    let idle = graph
        .state(Action::Idle)
        .on_enter(|| println!("  [animator] play Idling"))
        .build()?;

    let (pressed, holding, timer, countdown) = (
        Rc::clone(&key_down),
        Rc::clone(&remaining),
        Rc::clone(&remaining),
        Rc::clone(&remaining),
    );
    let attack = graph
        .state(Action::Attack)
        .when(move || pressed.get() || holding.get() > 0)
        .on_enter(move || {
            println!("  [animator] play Attack");
            timer.set(ATTACK_TICKS);
        })
        .action(move || countdown.set(countdown.get().saturating_sub(1)))
        .on_exit(|| println!("  [timer] attack finished"))
        .self_deactivating(true)
        .build()?;
    graph.add_neighbor(idle, attack)?;

    let mut driver = TickDriver::new(graph).with_fallback(idle)?;
    driver.start(idle)?;

    for frame in 0..16u64 {
        key_down.set(frame == 3);
        let outcome = driver.tick()?;
        let name = driver
            .current()
            .map(|id| driver.graph()[id].value().name().to_string())
            .unwrap_or_else(|| "-".to_string());
        match outcome {
            TickOutcome::Stayed(_) | TickOutcome::Idle => println!("frame {frame:2}: {name}"),
            other => println!("frame {frame:2}: {name} ({other:?})"),
        }
    }

    println!("\nPath: {:?}", driver.history().get_path());
    println!("\n=== Example Complete ===");
    Ok(())
}
