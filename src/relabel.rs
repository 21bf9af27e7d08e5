//! Result-file relabeling.
//!
//! Simulation workers emit result files that refer to nodes by their
//! compiled integer identities. This transform rewrites those columns back
//! to the original topology labels so downstream tabulation sees the input
//! namespace. Pure relabeling; no policy logic.
//!
//! The result-file format is line oriented: a header line whose columns may
//! each be an identity, followed by data lines whose first two columns are
//! identities and whose remaining columns are opaque measurements.

use std::fs;
use std::path::Path;

use crate::topology::graph::Topology;

/// Errors that can occur while relabeling a result file
#[derive(Debug, thiserror::Error)]
pub enum RelabelError {
    #[error("result file references identity {id}, which the topology never assigned")]
    UnknownIdentity { id: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Map one token: all-digit tokens are identities and become labels, every
/// other token passes through unchanged.
fn map_token<'a>(topology: &'a Topology, token: &'a str) -> Result<&'a str, RelabelError> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(id) = token.parse::<u32>() {
            return topology
                .label_of(id)
                .ok_or(RelabelError::UnknownIdentity { id });
        }
    }
    Ok(token)
}

/// Rewrite a result document's identity columns back to topology labels.
///
/// Every all-digit column of the header line is mapped; on the remaining
/// lines only the first two columns are, the rest passing through verbatim.
/// Lines with fewer than two columns are copied unchanged.
pub fn relabel_result(topology: &Topology, content: &str) -> Result<String, RelabelError> {
    let mut out = String::new();
    let mut lines = content.lines();

    if let Some(header) = lines.next() {
        let mapped = header
            .split_whitespace()
            .map(|token| map_token(topology, token))
            .collect::<Result<Vec<_>, _>>()?;
        out.push_str(&mapped.join(" "));
        out.push('\n');
    }

    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            out.push_str(line);
            out.push('\n');
            continue;
        }
        out.push_str(map_token(topology, tokens[0])?);
        out.push(' ');
        out.push_str(map_token(topology, tokens[1])?);
        for token in &tokens[2..] {
            out.push(' ');
            out.push_str(token);
        }
        out.push('\n');
    }

    Ok(out)
}

/// Relabel `input` and write the transformed document to `output`
pub fn relabel_result_file(
    topology: &Topology,
    input: &Path,
    output: &Path,
) -> Result<(), RelabelError> {
    let content = fs::read_to_string(input)?;
    let relabeled = relabel_result(topology, &content)?;
    fs::write(output, relabeled)?;
    Ok(())
}
