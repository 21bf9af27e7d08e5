//! Routing-table compilation.
//!
//! Identity and port assignment is an inherently sequential prepass (it is
//! driven by input order) and has already happened by the time a `Topology`
//! exists. Everything after that (adjacency sets, export tables, neighbor
//! orderings) depends only on a single node's own links, so the per-node
//! work is fanned out with rayon and joined in identity order before the
//! artifact is assembled. Output is byte-stable regardless of scheduling.

pub mod adjacency;
pub mod export;
pub mod ordering;

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::artifact::RoutingTables;
use crate::error::CompileError;
use crate::topology::graph::Topology;
use crate::topology::types::{NodeId, Port};

/// All compiled tables for a single node
struct NodeTables {
    id: NodeId,
    adjacency: Vec<NodeId>,
    port_to_node: Vec<NodeId>,
    node_to_port: BTreeMap<NodeId, Port>,
    export: Vec<Vec<u8>>,
    order_nodes: Vec<NodeId>,
    order_ports: Vec<Port>,
}

fn build_node_tables(topology: &Topology, id: NodeId) -> NodeTables {
    let links = topology.links_of(id);

    let mut port_to_node = Vec::with_capacity(links.len() + 1);
    port_to_node.push(id);
    port_to_node.extend(links.iter().map(|link| link.neighbor));

    let mut node_to_port = BTreeMap::new();
    node_to_port.insert(id, 0);
    for (idx, link) in links.iter().enumerate() {
        node_to_port.insert(link.neighbor, idx + 1);
    }

    let (order_nodes, order_ports) = ordering::neighbor_order(topology, id);

    NodeTables {
        id,
        adjacency: adjacency::neighbor_set(topology, id),
        port_to_node,
        node_to_port,
        export: export::export_table(topology, id),
        order_nodes,
        order_ports,
    }
}

/// Cross-check a node's tables against its port count. A mismatch means an
/// earlier stage is defective; it must abort rather than be papered over.
fn check_node_tables(tables: &NodeTables, out_degree: usize) -> Result<(), CompileError> {
    let width = out_degree + 1;

    if tables.port_to_node.len() != width {
        return Err(CompileError::InvariantViolation(format!(
            "node {}: port map covers {} ports, expected {}",
            tables.id,
            tables.port_to_node.len(),
            width
        )));
    }
    if tables.export.len() != width || tables.export.iter().any(|row| row.len() != width) {
        return Err(CompileError::InvariantViolation(format!(
            "node {}: export table is not {width}x{width}",
            tables.id
        )));
    }
    if tables.order_nodes.len() != width || tables.order_ports.len() != width {
        return Err(CompileError::InvariantViolation(format!(
            "node {}: neighbor ordering covers {} entries, expected {}",
            tables.id,
            tables.order_nodes.len(),
            width
        )));
    }

    Ok(())
}

/// Compile every node's local routing data into the output artifact
pub fn compile(topology: &Topology) -> Result<RoutingTables, CompileError> {
    let per_node: Vec<NodeTables> = topology
        .node_ids()
        .into_par_iter()
        .map(|id| build_node_tables(topology, id))
        .collect();

    let mut tables = RoutingTables::default();
    for node in per_node {
        check_node_tables(&node, topology.out_degree(node.id))?;
        tables.adjacency_matrix.insert(node.id, node.adjacency);
        tables.port_to_node_map.insert(node.id, node.port_to_node);
        tables.node_to_port_map.insert(node.id, node.node_to_port);
        tables.export_tables.insert(node.id, node.export);
        tables.indices_node.insert(node.id, node.order_nodes);
        tables.indices_link.insert(node.id, node.order_ports);
    }

    log::debug!("Compiled routing tables for {} nodes", topology.node_count());
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::parser::parse_topology;

    fn compiled(input: &str) -> RoutingTables {
        compile(&Topology::from_edges(&parse_topology(input).unwrap())).unwrap()
    }

    #[test]
    fn test_port_maps() {
        let tables = compiled("1 2 p2c\n2 1 c2p\n1 3 p2p\n3 1 p2p\n");

        assert_eq!(tables.port_to_node_map[&1], vec![1, 2, 3]);
        assert_eq!(tables.port_to_node_map[&2], vec![2, 1]);
        assert_eq!(tables.node_to_port_map[&1][&1], 0);
        assert_eq!(tables.node_to_port_map[&1][&2], 1);
        assert_eq!(tables.node_to_port_map[&1][&3], 2);
    }

    #[test]
    fn test_all_tables_cover_all_nodes() {
        let tables = compiled("1 2 p2c\n2 1 c2p\n1 3 p2p\n3 1 p2p\n");

        for id in 1..=3 {
            assert!(tables.adjacency_matrix.contains_key(&id));
            assert!(tables.port_to_node_map.contains_key(&id));
            assert!(tables.node_to_port_map.contains_key(&id));
            assert!(tables.export_tables.contains_key(&id));
            assert!(tables.indices_node.contains_key(&id));
            assert!(tables.indices_link.contains_key(&id));
        }
    }

    #[test]
    fn test_destination_only_node_compiles_to_self_tables() {
        let tables = compiled("1 2 p2c\n");

        assert_eq!(tables.adjacency_matrix[&2], vec![2]);
        assert_eq!(tables.port_to_node_map[&2], vec![2]);
        assert_eq!(tables.node_to_port_map[&2].len(), 1);
        assert_eq!(tables.export_tables[&2], vec![vec![1]]);
        assert_eq!(tables.indices_node[&2], vec![2]);
        assert_eq!(tables.indices_link[&2], vec![0]);
    }

    #[test]
    fn test_empty_topology() {
        let tables = compiled("");
        assert!(tables.adjacency_matrix.is_empty());
        assert!(tables.export_tables.is_empty());
    }
}
