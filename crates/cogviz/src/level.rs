//! Hierarchy levels for the DAG layout.
//!
//! Levels are computed by longest-path relaxation from the nodes without
//! incoming links: a node sits at least one level below every node linking to
//! it. Links inside a strongly connected component would make that
//! relaxation unbounded, so they are set aside before relaxing. They are
//! still drawn and still act as springs; they only stop influencing levels.

use std::collections::VecDeque;

use indexmap::IndexMap;
use log::{debug, trace, warn};
use petgraph::{
    Direction,
    algo::tarjan_scc,
    graph::{DiGraph, NodeIndex},
};

use cogviz_core::identifier::Id;

use crate::derive::Link;

/// Level of every node, in node order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Levels {
    levels: IndexMap<Id, u32>,
    cyclic_links: Vec<Link>,
}

impl Levels {
    /// Level of `id`; nodes that are not part of the graph sit at level 0.
    pub fn get(&self, id: Id) -> u32 {
        self.levels.get(&id).copied().unwrap_or(0)
    }

    /// Highest level of any node, 0 for an empty graph.
    pub fn max_level(&self) -> u32 {
        self.levels.values().copied().max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id, u32)> + '_ {
        self.levels.iter().map(|(id, level)| (*id, *level))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Links that were left out of leveling because they close a cycle.
    pub fn cyclic_links(&self) -> &[Link] {
        &self.cyclic_links
    }
}

/// Assigns a level to every node of `nodes` from the directed `links`.
///
/// # Examples
///
/// ```
/// use cogviz::{derive::Link, level::compute_levels};
/// use cogviz_core::identifier::Id;
///
/// let (a, b) = (Id::new("a"), Id::new("b"));
/// let levels = compute_levels(&[a, b], &[Link::new(b, a)]);
///
/// assert_eq!(levels.get(b), 0);
/// assert_eq!(levels.get(a), 1);
/// assert_eq!(levels.max_level(), 1);
/// ```
pub fn compute_levels(nodes: &[Id], links: &[Link]) -> Levels {
    let mut graph: DiGraph<Id, Link> = DiGraph::with_capacity(nodes.len(), links.len());
    let mut indices: IndexMap<Id, NodeIndex> = IndexMap::with_capacity(nodes.len());

    for &id in nodes {
        indices.entry(id).or_insert_with(|| graph.add_node(id));
    }

    for link in links {
        let (Some(&source), Some(&target)) =
            (indices.get(&link.source()), indices.get(&link.target()))
        else {
            trace!(link:?; "Skipping link to unknown node");
            continue;
        };
        graph.add_edge(source, target, *link);
    }

    // Both ends of a link in one component means the link lies on a cycle;
    // a self-link is a component of its own.
    let mut component = vec![0; graph.node_count()];
    for (index, scc) in tarjan_scc(&graph).into_iter().enumerate() {
        for node in scc {
            component[node.index()] = index;
        }
    }

    let mut cyclic_links = Vec::new();
    let acyclic = graph.filter_map(
        |_, id| Some(*id),
        |edge, link| {
            let (source, target) = graph.edge_endpoints(edge)?;
            if component[source.index()] == component[target.index()] {
                cyclic_links.push(*link);
                None
            } else {
                Some(())
            }
        },
    );

    if !cyclic_links.is_empty() {
        warn!(
            cyclic_link_count = cyclic_links.len();
            "Graph contains cycles, ignoring cyclic links for leveling"
        );
    }

    let mut level = vec![0u32; acyclic.node_count()];
    let mut queue: VecDeque<NodeIndex> = acyclic
        .node_indices()
        .filter(|&node| {
            acyclic
                .neighbors_directed(node, Direction::Incoming)
                .next()
                .is_none()
        })
        .collect();

    let budget = acyclic.node_count().saturating_mul(acyclic.node_count());
    let mut relaxations = 0usize;

    'relax: while let Some(node) = queue.pop_front() {
        let next = level[node.index()] + 1;
        for target in acyclic.neighbors_directed(node, Direction::Outgoing) {
            if level[target.index()] >= next {
                continue;
            }
            if relaxations >= budget {
                warn!(budget; "Leveling relaxation budget exhausted, keeping partial levels");
                break 'relax;
            }
            relaxations += 1;
            level[target.index()] = next;
            queue.push_back(target);
        }
    }

    let levels: IndexMap<Id, u32> = acyclic
        .node_indices()
        .map(|node| (acyclic[node], level[node.index()]))
        .collect();

    debug!(
        node_count = levels.len(),
        relaxations,
        max_level = levels.values().copied().max().unwrap_or(0);
        "Computed levels"
    );

    Levels {
        levels,
        cyclic_links,
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn node_ids(count: usize) -> Vec<Id> {
        (0..count).map(|i| Id::new(&format!("level-prop-{i}"))).collect()
    }

    proptest! {
        #[test]
        fn acyclic_links_are_monotone(
            count in 1usize..24,
            pairs in prop::collection::vec((0usize..24, 0usize..24), 0..60),
        ) {
            let nodes = node_ids(count);
            // Orient every pair from lower to higher index, which rules out cycles.
            let links: Vec<Link> = pairs
                .into_iter()
                .map(|(a, b)| (a % count, b % count))
                .filter(|(a, b)| a != b)
                .map(|(a, b)| Link::new(nodes[a.min(b)], nodes[a.max(b)]))
                .collect();

            let levels = compute_levels(&nodes, &links);

            prop_assert!(levels.cyclic_links().is_empty());
            for link in &links {
                prop_assert!(levels.get(link.target()) > levels.get(link.source()));
            }
        }

        #[test]
        fn arbitrary_links_terminate_and_stay_monotone_outside_cycles(
            count in 1usize..24,
            pairs in prop::collection::vec((0usize..24, 0usize..24), 0..80),
        ) {
            let nodes = node_ids(count);
            let links: Vec<Link> = pairs
                .into_iter()
                .map(|(a, b)| Link::new(nodes[a % count], nodes[b % count]))
                .collect();

            let levels = compute_levels(&nodes, &links);

            prop_assert_eq!(levels.len(), count);
            prop_assert!(levels.max_level() < count as u32);
            for link in &links {
                if !levels.cyclic_links().contains(link) {
                    prop_assert!(levels.get(link.target()) > levels.get(link.source()));
                }
            }
        }
    }
}
