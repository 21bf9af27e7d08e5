//! Valley-free export policy compilation.
//!
//! For each node this derives a square 0/1 matrix indexed by port: entry
//! `[i][j]` records whether a route learned on incoming port `i` may be
//! re-advertised on outgoing port `j`. The discipline is Gao–Rexford:
//! customer-learned routes are exported to everyone, peer- and
//! provider-learned routes only to customers, and nothing is re-advertised
//! back out the port it arrived on. The computation is purely local: it
//! only reads the node's own per-neighbor relationship labels.

use crate::topology::graph::Topology;
use crate::topology::types::{NodeId, Relationship};

/// Build the node's `(k+1) x (k+1)` export-permission matrix, `k` being its
/// out-degree.
///
/// Row 0 covers locally originated routes and is `[1, 0, ..., 0]`: they
/// terminate at the node itself and are exported to no neighbor in this
/// encoding. Column 0 of every other row is 1, since a learned route may
/// always reach the node itself.
pub fn export_table(topology: &Topology, id: NodeId) -> Vec<Vec<u8>> {
    let links = topology.links_of(id);
    let width = links.len() + 1;
    let mut table = Vec::with_capacity(width);

    let mut self_row = vec![0u8; width];
    self_row[0] = 1;
    table.push(self_row);

    for (ingress, link) in links.iter().enumerate() {
        let mut row = Vec::with_capacity(width);
        row.push(1);
        for (egress, out) in links.iter().enumerate() {
            let permitted = if egress == ingress {
                // never re-advertise on the ingress port
                0
            } else {
                match link.relationship {
                    Relationship::ProviderToCustomer => 1,
                    Relationship::PeerToPeer | Relationship::CustomerToProvider => {
                        u8::from(out.relationship == Relationship::ProviderToCustomer)
                    }
                }
            };
            row.push(permitted);
        }
        table.push(row);
    }

    table
}
