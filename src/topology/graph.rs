//! Identity- and port-indexed topology graph.
//!
//! Labels are mapped to dense integer identities in order of first
//! appearance, starting at 1; the mapping is a bijection and is never
//! renumbered. Each node's outgoing links are numbered 1..k in the order
//! they first appear in the input, with port 0 reserved for the node itself.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::topology::types::{EdgeRecord, NodeId, Port, Relationship};

/// One outgoing link of a node. A node's links in port order are exactly
/// its `OutLink`s in slice order: the link at index `i` uses port `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutLink {
    pub neighbor: NodeId,
    pub relationship: Relationship,
}

/// The compiled multigraph: label/identity maps plus per-node link lists
#[derive(Debug, Default)]
pub struct Topology {
    ids: HashMap<String, NodeId>,
    labels: Vec<String>,
    links: Vec<Vec<OutLink>>,
    ports: Vec<HashMap<NodeId, Port>>,
}

impl Topology {
    /// Build the indexed topology from parsed edge records.
    ///
    /// Identities and ports are assigned in input order. Re-recording an
    /// already-known ordered pair is a no-op: the first relationship and
    /// port win, so parallel duplicate lines cannot shift port numbering.
    pub fn from_edges(edges: &[EdgeRecord]) -> Self {
        let mut topology = Topology::default();
        for edge in edges {
            let from = topology.assign(&edge.from);
            let to = topology.assign(&edge.to);
            topology.record_link(from, to, edge.relationship);
        }
        topology
    }

    /// Returns the identity for `label`, allocating the next one on first
    /// occurrence.
    fn assign(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len() as NodeId + 1;
        self.ids.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        self.links.push(Vec::new());
        self.ports.push(HashMap::new());
        id
    }

    /// Records the out-link `from -> to` and returns its port, which is the
    /// length of `from`'s link list at the moment the link is first seen.
    fn record_link(&mut self, from: NodeId, to: NodeId, relationship: Relationship) -> Port {
        let slot = (from - 1) as usize;
        if let Some(&port) = self.ports[slot].get(&to) {
            log::warn!(
                "Duplicate link {} -> {} ignored, keeping port {}",
                self.labels[slot],
                self.labels[(to - 1) as usize],
                port
            );
            return port;
        }
        self.links[slot].push(OutLink {
            neighbor: to,
            relationship,
        });
        let port = self.links[slot].len();
        self.ports[slot].insert(to, port);
        port
    }

    /// Number of distinct nodes seen in the input
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// All identities in assignment order
    pub fn node_ids(&self) -> RangeInclusive<NodeId> {
        1..=self.labels.len() as NodeId
    }

    /// Identity of `label`, if the label appeared in the input
    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// Original label of `id`
    pub fn label_of(&self, id: NodeId) -> Option<&str> {
        self.labels
            .get(id.checked_sub(1)? as usize)
            .map(String::as_str)
    }

    /// The node's outgoing links in port order (port p = index p - 1)
    pub fn links_of(&self, id: NodeId) -> &[OutLink] {
        id.checked_sub(1)
            .and_then(|slot| self.links.get(slot as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Out-degree of the node, i.e. its highest port number
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.links_of(id).len()
    }

    /// Port used by `id` to reach `neighbor`
    pub fn port_of(&self, id: NodeId, neighbor: NodeId) -> Option<Port> {
        self.ports
            .get(id.checked_sub(1)? as usize)?
            .get(&neighbor)
            .copied()
    }

    /// Relationship recorded on the link from `id` to `neighbor`
    pub fn relationship(&self, id: NodeId, neighbor: NodeId) -> Option<Relationship> {
        let port = self.port_of(id, neighbor)?;
        self.links_of(id).get(port - 1).map(|link| link.relationship)
    }
}
