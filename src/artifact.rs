//! The compiled routing-table artifact.
//!
//! One JSON document keyed by string-encoded node identity. Maps are kept
//! in `BTreeMap`s ordered by numeric identity, so serializing the same
//! compilation twice produces byte-identical output.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::topology::types::{NodeId, Port};

/// Per-node local routing data consumed by the propagation simulator
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingTables {
    /// Sorted neighbor identities plus the node itself
    #[serde(rename = "AdjacencyMatrix")]
    pub adjacency_matrix: BTreeMap<NodeId, Vec<NodeId>>,

    /// Index 0 is the node itself; index p is the identity reached via port p
    #[serde(rename = "PortToNodeMap")]
    pub port_to_node_map: BTreeMap<NodeId, Vec<NodeId>>,

    /// Neighbor identity to port number, with the node itself mapped to 0
    #[serde(rename = "NodeToPortMap")]
    pub node_to_port_map: BTreeMap<NodeId, BTreeMap<NodeId, Port>>,

    /// The (k+1) x (k+1) valley-free export-permission matrices
    #[serde(rename = "ExportTables")]
    pub export_tables: BTreeMap<NodeId, Vec<Vec<u8>>>,

    /// Neighbor identities in customers-then-peers-then-providers order,
    /// index 0 being the node itself
    #[serde(rename = "IndicesNode")]
    pub indices_node: BTreeMap<NodeId, Vec<NodeId>>,

    /// Ports paired with `IndicesNode`, index 0 being port 0
    #[serde(rename = "IndicesLink")]
    pub indices_link: BTreeMap<NodeId, Vec<Port>>,
}

impl RoutingTables {
    /// Serialize the artifact to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write the artifact to disk
pub fn write_routing_tables(tables: &RoutingTables, path: &Path) -> Result<()> {
    let json = tables
        .to_json()
        .wrap_err("Failed to serialize routing tables")?;
    fs::write(path, json)
        .wrap_err_with(|| format!("Failed to write routing tables to '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoutingTables {
        let mut tables = RoutingTables::default();
        tables.adjacency_matrix.insert(1, vec![1, 2]);
        tables.port_to_node_map.insert(1, vec![1, 2]);
        tables
            .node_to_port_map
            .insert(1, BTreeMap::from([(1, 0), (2, 1)]));
        tables.export_tables.insert(1, vec![vec![1, 0], vec![1, 0]]);
        tables.indices_node.insert(1, vec![1, 2]);
        tables.indices_link.insert(1, vec![0, 1]);
        tables
    }

    #[test]
    fn test_keys_are_string_encoded_identities() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["AdjacencyMatrix"]["1"].is_array());
        assert_eq!(value["NodeToPortMap"]["1"]["2"], 1);
        assert_eq!(value["ExportTables"]["1"][0][0], 1);
    }

    #[test]
    fn test_json_round_trip() {
        let tables = sample();
        let json = tables.to_json().unwrap();
        let back: RoutingTables = serde_json::from_str(&json).unwrap();

        assert_eq!(back, tables);
    }

    #[test]
    fn test_write_routing_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routing_tables.json");

        write_routing_tables(&sample(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, sample().to_json().unwrap());
    }
}
