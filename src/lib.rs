//! # ValleySim - Topology compiler for inter-domain route propagation simulations
//!
//! This library compiles an inter-domain network topology (autonomous
//! systems connected by commercial relationships) into the per-node local
//! routing data consumed by a distributed route-propagation simulator.
//!
//! ## Overview
//!
//! The input is a line-oriented edge list where each line records one
//! directed link between two ASes together with its commercial relationship
//! (provider-to-customer, customer-to-provider, or peer-to-peer). The
//! compiler assigns every AS a stable integer identity, numbers each node's
//! links as local ports, and derives for every node an export-permission
//! matrix implementing the valley-free (Gao–Rexford) export policy: routes
//! learned from a customer may be re-advertised to anyone, while routes
//! learned from a peer or a provider may only be re-advertised to customers.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `topology`: edge-list parsing, identity/port indexing, and the optional
//!   relationship-consistency validation pass
//! - `compiler`: per-node adjacency sets, export tables, and neighbor
//!   orderings, assembled into the output artifact
//! - `artifact`: the serialized routing-table document and its writer
//! - `relabel`: companion transform mapping simulation result files back to
//!   the original AS labels
//! - `error`: the compile error taxonomy
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use valleysim::compiler::compile;
//! use valleysim::topology::{parse_topology, Topology};
//!
//! let edges = parse_topology("64500 64501 p2c\n64501 64500 c2p\n")?;
//! let topology = Topology::from_edges(&edges);
//! let tables = compile(&topology)?;
//! println!("{}", tables.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Determinism
//!
//! Identities and ports are assigned in input first-appearance order, and
//! the artifact keys its maps by numeric identity, so compiling the same
//! topology file twice yields byte-identical output.

pub mod artifact;
pub mod compiler;
pub mod error;
pub mod relabel;
pub mod topology;
