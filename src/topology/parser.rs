//! Edge-list parser.
//!
//! The topology input is a text file with one directed link per line:
//! `<fromLabel> <toLabel> <relationship>`, whitespace separated, with
//! `relationship` one of `p2c`, `c2p`, `p2p`. Both directions of a link are
//! expected as separate lines; the parser does not infer the reverse.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use crate::error::CompileError;
use crate::topology::types::{EdgeRecord, Relationship};

/// Parse edge-list text into raw edge records.
///
/// Parsing is fail-fast: the first line that does not split into exactly
/// three tokens, or whose relationship tag is unrecognized, aborts the parse
/// with the offending line reported. Line numbers are 1-based.
pub fn parse_topology(input: &str) -> Result<Vec<EdgeRecord>, CompileError> {
    let mut edges = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(CompileError::MalformedLine {
                line_no,
                line: line.to_string(),
            });
        }

        let relationship = Relationship::from_tag(tokens[2]).ok_or_else(|| {
            CompileError::UnknownRelationship {
                line_no,
                tag: tokens[2].to_string(),
                line: line.to_string(),
            }
        })?;

        edges.push(EdgeRecord {
            from: tokens[0].to_string(),
            to: tokens[1].to_string(),
            relationship,
        });
    }

    Ok(edges)
}

/// Read and parse a topology file
pub fn parse_topology_file(path: &Path) -> Result<Vec<EdgeRecord>> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read topology file '{}'", path.display()))?;
    Ok(parse_topology(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_simple_topology() {
        let edges = parse_topology("1 2 p2c\n2 1 c2p\n1 3 p2p\n3 1 p2p\n").unwrap();

        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].from, "1");
        assert_eq!(edges[0].to, "2");
        assert_eq!(edges[0].relationship, Relationship::ProviderToCustomer);
        assert_eq!(edges[1].relationship, Relationship::CustomerToProvider);
        assert_eq!(edges[2].relationship, Relationship::PeerToPeer);
    }

    #[test]
    fn test_labels_are_opaque() {
        let edges = parse_topology("as-64500 as-64501 p2c\n").unwrap();
        assert_eq!(edges[0].from, "as-64500");
        assert_eq!(edges[0].to, "as-64501");
    }

    #[test]
    fn test_extra_whitespace_is_tolerated() {
        let edges = parse_topology("  1\t 2   p2c \n").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to, "2");
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let err = parse_topology("1 2 p2c\n1 2\n").unwrap_err();
        match err {
            CompileError::MalformedLine { line_no, line } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "1 2");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_malformed() {
        assert!(parse_topology("1 2 p2c\n\n2 1 c2p\n").is_err());
    }

    #[test]
    fn test_unknown_relationship_reports_tag() {
        let err = parse_topology("1 2 s2s\n").unwrap_err();
        match err {
            CompileError::UnknownRelationship { line_no, tag, .. } => {
                assert_eq!(line_no, 1);
                assert_eq!(tag, "s2s");
            }
            other => panic!("expected UnknownRelationship, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_empty_topology() {
        assert!(parse_topology("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_topology_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "1 2 p2c\n2 1 c2p\n").unwrap();

        let edges = parse_topology_file(temp_file.path()).unwrap();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        assert!(parse_topology_file(Path::new("/nonexistent/topology.txt")).is_err());
    }
}
