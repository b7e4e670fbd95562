//! Property tests: the graph-level edge list and every node's local edge
//! list stay mutually consistent under arbitrary mutation sequences.

use std::cell::RefCell;
use std::rc::Rc;

use digraph_core::{EdgeOptions, EventKind, Graph};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, prop_oneof, Just, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const ID_POOL: &[&str] = &["a", "b", "c", "d", "e", "f"];

#[derive(Debug, Clone)]
enum Op {
    AddNode(usize),
    AddEdge(usize, usize, u8),
    RemoveNode(usize),
    RemoveEdge(usize, usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let id = 0..ID_POOL.len();
    prop_oneof![
        3 => id.clone().prop_map(Op::AddNode),
        6 => (id.clone(), id.clone(), 0u8..10).prop_map(|(s, t, w)| Op::AddEdge(s, t, w)),
        2 => id.clone().prop_map(Op::RemoveNode),
        3 => (id.clone(), id).prop_map(|(s, t)| Op::RemoveEdge(s, t)),
        1 => Just(Op::Clear),
    ]
}

fn apply(graph: &mut Graph, op: &Op) {
    match *op {
        Op::AddNode(i) => {
            graph.add_node(ID_POOL[i]);
        }
        Op::AddEdge(s, t, w) => {
            graph.add_edge_with(ID_POOL[s], ID_POOL[t], EdgeOptions::weighted(f64::from(w)));
        }
        Op::RemoveNode(i) => graph.remove_node(ID_POOL[i]),
        Op::RemoveEdge(s, t) => graph.remove_edge(ID_POOL[s], ID_POOL[t]),
        Op::Clear => graph.clear(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn edge_lists_stay_consistent(ops in vec(op_strategy(), 0..60)) {
        let mut graph = Graph::new();
        for op in &ops {
            apply(&mut graph, op);

            for edge in graph.edges() {
                let source = graph.node(edge.source());
                let target = graph.node(edge.target());
                prop_assert!(source.is_some_and(|node| node.has_edge(edge)));
                prop_assert!(target.is_some_and(|node| node.has_edge(edge)));
            }
            for node in graph.nodes() {
                for edge in node.edges() {
                    prop_assert!(graph.contains_edge(edge));
                    prop_assert!(edge.touches(node.id()));
                }
            }
            for (i, edge) in graph.edges().iter().enumerate() {
                prop_assert!(!graph.edges()[i + 1..].contains(edge));
            }
        }
    }

    #[test]
    fn events_balance_with_final_state(ops in vec(op_strategy(), 0..60)) {
        let counts = Rc::new(RefCell::new([0i64; 4]));
        let mut graph = Graph::new();
        for (slot, kind) in EventKind::ALL.into_iter().enumerate() {
            let counts = Rc::clone(&counts);
            graph.on(kind, move |_| counts.borrow_mut()[slot] += 1);
        }

        for op in &ops {
            apply(&mut graph, op);
        }

        let [nodes_added, edges_added, nodes_removed, edges_removed] = *counts.borrow();
        prop_assert_eq!(nodes_added - nodes_removed, graph.node_count() as i64);
        prop_assert_eq!(edges_added - edges_removed, graph.edge_count() as i64);
    }
}
