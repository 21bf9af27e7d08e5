//! Adjacency set construction.

use std::collections::BTreeSet;

use crate::topology::graph::Topology;
use crate::topology::types::NodeId;

/// The node's neighbor identities plus the node itself, ascending and
/// deduplicated. This is a set view of the neighborhood, unrelated to port
/// order.
pub fn neighbor_set(topology: &Topology, id: NodeId) -> Vec<NodeId> {
    let mut set: BTreeSet<NodeId> = topology
        .links_of(id)
        .iter()
        .map(|link| link.neighbor)
        .collect();
    set.insert(id);
    set.into_iter().collect()
}
