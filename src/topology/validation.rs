//! Relationship consistency validation.
//!
//! The compiler trusts its input: it never cross-checks that `A B p2c` is
//! accompanied by `B A c2p`. This module provides that check as an opt-in
//! pass over the raw edge records; it does not change the compiled output.

use std::collections::HashMap;

use crate::topology::types::{EdgeRecord, Relationship};

/// Validate that the edge list is mutually consistent
///
/// Checks for:
/// - The same ordered pair recorded twice with conflicting relationships
/// - A link whose mirrored direction is missing or does not carry the
///   reversed relationship (`p2c` ↔ `c2p`, `p2p` ↔ `p2p`)
///
/// # Arguments
/// * `edges` - The parsed edge records, in input order
///
/// # Returns
/// * `Ok(())` if validation succeeds
/// * `Err(String)` with an error message naming the first offending link
pub fn validate_edge_consistency(edges: &[EdgeRecord]) -> Result<(), String> {
    let mut recorded: HashMap<(&str, &str), Relationship> = HashMap::new();

    for edge in edges {
        let key = (edge.from.as_str(), edge.to.as_str());
        match recorded.get(&key) {
            Some(&first) if first != edge.relationship => {
                return Err(format!(
                    "Conflicting relationships for link {} -> {}: '{}' and '{}'",
                    edge.from,
                    edge.to,
                    first.tag(),
                    edge.relationship.tag()
                ));
            }
            Some(_) => {}
            None => {
                recorded.insert(key, edge.relationship);
            }
        }
    }

    // Second pass in input order so the reported violation is deterministic
    for edge in edges {
        let expected = edge.relationship.reversed();
        match recorded.get(&(edge.to.as_str(), edge.from.as_str())) {
            None => {
                return Err(format!(
                    "Link {} -> {} ('{}') has no reverse line {} -> {}",
                    edge.from,
                    edge.to,
                    edge.relationship.tag(),
                    edge.to,
                    edge.from
                ));
            }
            Some(&reverse) if reverse != expected => {
                return Err(format!(
                    "Link {} -> {} is '{}' but reverse is '{}' (expected '{}')",
                    edge.from,
                    edge.to,
                    edge.relationship.tag(),
                    reverse.tag(),
                    expected.tag()
                ));
            }
            Some(_) => {}
        }
    }

    Ok(())
}
