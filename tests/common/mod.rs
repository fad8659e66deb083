//! Stand-ins for the collaborators a game would plug into a state graph:
//! a polled input key, a fixed-duration countdown, and an event recorder
//! playing the part of the animation layer.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Polled key state shared between the "input system" and predicates.
#[derive(Clone, Default)]
pub struct Key(Rc<Cell<bool>>);

impl Key {
    pub fn press(&self) {
        self.0.set(true);
    }

    pub fn release(&self) {
        self.0.set(false);
    }

    pub fn is_down(&self) -> bool {
        self.0.get()
    }
}

/// Tick-based timer that runs for a fixed number of advances.
#[derive(Clone)]
pub struct Countdown {
    duration: u32,
    remaining: Rc<Cell<u32>>,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: Rc::new(Cell::new(0)),
        }
    }

    /// (Re)start from the full duration.
    pub fn run(&self) {
        self.remaining.set(self.duration);
    }

    pub fn advance(&self) {
        let remaining = self.remaining.get();
        if remaining > 0 {
            self.remaining.set(remaining - 1);
        }
    }

    pub fn running(&self) -> bool {
        self.remaining.get() > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining.get()
    }
}

/// Ordered log of callback invocations.
#[derive(Clone, Default)]
pub struct Events(Rc<RefCell<Vec<String>>>);

impl Events {
    pub fn recorder(&self, label: &str) -> impl FnMut() + 'static {
        let events = Rc::clone(&self.0);
        let label = label.to_string();
        move || events.borrow_mut().push(label.clone())
    }

    pub fn push(&self, label: &str) {
        self.0.borrow_mut().push(label.to_string());
    }

    pub fn count(&self, label: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == label).count()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}
