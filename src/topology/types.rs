//! Topology type definitions.
//!
//! This file contains the commercial-relationship enum and the raw edge
//! record produced by the parser, before identities and ports are assigned.

/// Dense integer identity of an AS, assigned in first-appearance order
/// starting at 1.
pub type NodeId = u32;

/// Node-local link index. Port 0 always denotes the node itself; ports 1..k
/// denote its outgoing links in file-appearance order.
pub type Port = usize;

/// Commercial relationship recorded on a directed link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// The link's source is a provider of its destination (`p2c`)
    ProviderToCustomer,
    /// The link's source is a customer of its destination (`c2p`)
    CustomerToProvider,
    /// Both ends are peers (`p2p`)
    PeerToPeer,
}

impl Relationship {
    /// Parse an edge-list relationship tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p2c" => Some(Self::ProviderToCustomer),
            "c2p" => Some(Self::CustomerToProvider),
            "p2p" => Some(Self::PeerToPeer),
            _ => None,
        }
    }

    /// Returns the edge-list tag for this relationship
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ProviderToCustomer => "p2c",
            Self::CustomerToProvider => "c2p",
            Self::PeerToPeer => "p2p",
        }
    }

    /// The relationship expected on the mirrored direction of the same link
    pub fn reversed(&self) -> Self {
        match self {
            Self::ProviderToCustomer => Self::CustomerToProvider,
            Self::CustomerToProvider => Self::ProviderToCustomer,
            Self::PeerToPeer => Self::PeerToPeer,
        }
    }
}

/// One parsed edge-list line: a directed link between two AS labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub relationship: Relationship,
}
