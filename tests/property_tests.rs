//! Property-based tests for the state graph.
//!
//! These tests use proptest to check node and graph contracts against
//! simple reference models over many random operation sequences.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use tickstate::core::{StateGraph, StateId, StateNode};

#[derive(Clone, Debug)]
enum EdgeOp {
    Add(usize),
    Remove(usize),
    Clear,
}

#[derive(Clone, Debug)]
enum LifecycleOp {
    Enter,
    Exit,
    Update,
    CheckTriggerer,
}

prop_compose! {
    fn edge_op(nodes: usize)(kind in 0..10u8, target in 0..nodes) -> EdgeOp {
        match kind {
            0..=4 => EdgeOp::Add(target),
            5..=8 => EdgeOp::Remove(target),
            _ => EdgeOp::Clear,
        }
    }
}

fn lifecycle_op() -> impl Strategy<Value = LifecycleOp> {
    prop_oneof![
        Just(LifecycleOp::Enter),
        Just(LifecycleOp::Exit),
        Just(LifecycleOp::Update),
        Just(LifecycleOp::CheckTriggerer),
    ]
}

fn counter(count: &Rc<Cell<usize>>) -> impl FnMut() + 'static {
    let count = Rc::clone(count);
    move || count.set(count.get() + 1)
}

proptest! {
    #[test]
    fn neighbors_behave_like_an_ordered_set(ops in prop::collection::vec(edge_op(6), 0..40)) {
        let mut graph = StateGraph::new();
        let ids: Vec<StateId> = (0..6).map(|i| graph.add_state(i)).collect();
        let origin = ids[0];
        let mut model: Vec<StateId> = Vec::new();

        for op in ops {
            match op {
                EdgeOp::Add(target) => {
                    let id = ids[target];
                    let expected = !model.contains(&id);
                    if expected {
                        model.push(id);
                    }
                    prop_assert_eq!(graph.add_neighbor(origin, id).unwrap(), expected);
                }
                EdgeOp::Remove(target) => {
                    let id = ids[target];
                    let position = model.iter().position(|n| *n == id);
                    if let Some(position) = position {
                        model.remove(position);
                    }
                    prop_assert_eq!(graph.remove_neighbor(origin, id).unwrap(), position.is_some());
                }
                EdgeOp::Clear => {
                    model.clear();
                    prop_assert!(graph.remove_all_neighbors(origin).unwrap());
                }
            }
            prop_assert_eq!(graph.neighbors(origin).unwrap(), model.as_slice());
        }
    }

    #[test]
    fn next_state_picks_first_triggered_neighbor(fires in prop::collection::vec(any::<bool>(), 0..8)) {
        let mut graph = StateGraph::new();
        let origin = graph.add_state(usize::MAX);
        let evaluated = Rc::new(Cell::new(0usize));
        let mut neighbors = Vec::new();

        for (i, fire) in fires.iter().copied().enumerate() {
            let id = graph.add_state(i);
            let seen = Rc::clone(&evaluated);
            graph[id].set_triggerer(move || {
                seen.set(seen.get() + 1);
                fire
            });
            graph.add_neighbor(origin, id).unwrap();
            neighbors.push(id);
        }

        let expected = fires.iter().position(|f| *f);
        let result = graph.next_state(origin).unwrap();
        prop_assert_eq!(result, expected.map(|i| neighbors[i]));
        prop_assert_eq!(evaluated.get(), expected.map_or(fires.len(), |i| i + 1));

        for (i, id) in neighbors.iter().enumerate() {
            prop_assert_eq!(graph[*id].is_active(), Some(i) == expected);
        }
        prop_assert!(!graph[origin].is_active());
    }

    #[test]
    fn lifecycle_matches_model(
        ops in prop::collection::vec(lifecycle_op(), 0..40),
        triggers in prop::collection::vec(any::<bool>(), 40),
        self_deactivates in any::<bool>(),
    ) {
        let enters = Rc::new(Cell::new(0));
        let exits = Rc::new(Cell::new(0));
        let runs = Rc::new(Cell::new(0));
        let holding = Rc::new(Cell::new(false));

        let mut node = StateNode::new(());
        let probe = Rc::clone(&holding);
        node.set_triggerer(move || probe.get());
        node.set_on_enter(counter(&enters));
        node.set_on_exit(counter(&exits));
        node.set_action(counter(&runs));
        node.set_self_deactivates(self_deactivates);

        let (mut active, mut model_enters, mut model_exits, mut model_runs) = (false, 0, 0, 0);

        for (op, trigger) in ops.into_iter().zip(triggers) {
            holding.set(trigger);
            match op {
                LifecycleOp::Enter => {
                    node.enter();
                    active = true;
                    model_enters += 1;
                }
                LifecycleOp::Exit => {
                    node.exit();
                    if active {
                        active = false;
                        model_exits += 1;
                    }
                }
                LifecycleOp::Update => {
                    node.update();
                    if active {
                        model_runs += 1;
                        if self_deactivates && !trigger {
                            active = false;
                            model_exits += 1;
                        }
                    }
                }
                LifecycleOp::CheckTriggerer => {
                    prop_assert_eq!(node.check_triggerer(), trigger);
                    if trigger {
                        active = true;
                        model_enters += 1;
                    }
                }
            }
            prop_assert_eq!(node.is_active(), active);
        }

        prop_assert_eq!(enters.get(), model_enters);
        prop_assert_eq!(exits.get(), model_exits);
        prop_assert_eq!(runs.get(), model_runs);
    }
}
