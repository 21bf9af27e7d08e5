//! Neighbor processing order.
//!
//! Simulation workers process route updates in policy-priority order:
//! customer announcements first, then peers, then providers, which mirrors
//! best-path preference in the modeled policy.

use crate::topology::graph::Topology;
use crate::topology::types::{NodeId, Port, Relationship};

const CLASS_ORDER: [Relationship; 3] = [
    Relationship::ProviderToCustomer,
    Relationship::PeerToPeer,
    Relationship::CustomerToProvider,
];

/// The node's neighbors and the ports used to reach them, as two parallel
/// sequences: (self, port 0) first, then the p2c, p2p, and c2p blocks, each
/// internally in first-appearance (= port) order.
pub fn neighbor_order(topology: &Topology, id: NodeId) -> (Vec<NodeId>, Vec<Port>) {
    let links = topology.links_of(id);
    let mut nodes = Vec::with_capacity(links.len() + 1);
    let mut ports = Vec::with_capacity(links.len() + 1);
    nodes.push(id);
    ports.push(0);

    for class in CLASS_ORDER {
        for (idx, link) in links.iter().enumerate() {
            if link.relationship == class {
                nodes.push(link.neighbor);
                ports.push(idx + 1);
            }
        }
    }

    (nodes, ports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::parser::parse_topology;

    fn topology(input: &str) -> Topology {
        Topology::from_edges(&parse_topology(input).unwrap())
    }

    #[test]
    fn test_blocks_in_policy_order() {
        // Node 1's links in port order: provider 2, customer 3, peer 4,
        // customer 5. Ordering regroups them customer, peer, provider.
        let topo = topology(
            "1 2 c2p\n2 1 p2c\n\
             1 3 p2c\n3 1 c2p\n\
             1 4 p2p\n4 1 p2p\n\
             1 5 p2c\n5 1 c2p\n",
        );
        let (nodes, ports) = neighbor_order(&topo, 1);

        assert_eq!(nodes, vec![1, 3, 5, 4, 2]);
        assert_eq!(ports, vec![0, 2, 4, 3, 1]);
    }

    #[test]
    fn test_first_appearance_order_within_block() {
        // "7" and "4" receive their identities (2 and 3) from the provider
        // z's links; node "1" then links to them in the opposite order, so
        // its customer block is link-appearance order, not sorted by id.
        let topo = topology(
            "z 7 p2c\n7 z c2p\n\
             z 4 p2c\n4 z c2p\n\
             1 4 p2c\n4 1 c2p\n\
             1 7 p2c\n7 1 c2p\n",
        );
        let id = topo.id_of("1").unwrap();
        let (nodes, ports) = neighbor_order(&topo, id);

        assert_eq!(nodes, vec![id, 3, 2]);
        assert_eq!(ports, vec![0, 1, 2]);
    }

    #[test]
    fn test_self_only_for_sink_node() {
        let topo = topology("1 2 p2c\n");
        let (nodes, ports) = neighbor_order(&topo, 2);

        assert_eq!(nodes, vec![2]);
        assert_eq!(ports, vec![0]);
    }
}
