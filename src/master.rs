//! Master endpoint descriptors.
//!
//! A client registers with one of the nodes of a master cluster. The cluster
//! is given as a comma-separated list of `host:port` entries, for example
//! `"10.0.0.1:8715,10.0.0.2:8715"`. [`MasterInfo`] is the parsed, normalized
//! form of that list.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{ClientError, ClientResult};
use crate::util::is_blank;

/// Address of a single master node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeAddr {
    host: String,
    port: u16,
}

impl NodeAddr {
    /// Creates a node address. The host must not be blank or contain
    /// whitespace, and the port must not be zero.
    pub fn new(host: &str, port: u16) -> ClientResult<NodeAddr> {
        let host = host.trim();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ClientError::invalid_argument(format!(
                "master host {:?} is malformed",
                host
            )));
        }
        if port == 0 {
            return Err(ClientError::invalid_argument(format!(
                "master port of {} must be in 1..=65535",
                host
            )));
        }
        Ok(NodeAddr {
            host: host.to_string(),
            port,
        })
    }

    /// Returns the host part of the address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port part of the address.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for NodeAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for NodeAddr {
    type Err = ClientError;

    fn from_str(s: &str) -> ClientResult<NodeAddr> {
        let entry = s.trim();
        let (host, port) = entry.rsplit_once(':').ok_or_else(|| {
            ClientError::invalid_argument(format!(
                "master address {:?} must be in host:port format",
                entry
            ))
        })?;
        let port = port.trim().parse::<u16>().map_err(|e| {
            ClientError::invalid_argument(format!(
                "master address {:?} has an invalid port: {}",
                entry, e
            ))
        })?;
        NodeAddr::new(host, port)
    }
}

/// Resolved master cluster descriptor.
///
/// Nodes are deduplicated and kept sorted so that descriptors built from the
/// same set of addresses share the same
/// [`cluster_str`](MasterInfo::cluster_str). The first node of the input
/// list is remembered separately as the preferred registration target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MasterInfo {
    first_node: NodeAddr,
    nodes: BTreeSet<NodeAddr>,
    cluster_str: String,
}

impl MasterInfo {
    /// Parses a comma-separated `host:port` list. Empty entries are ignored.
    pub fn new(master_addr_info: &str) -> ClientResult<MasterInfo> {
        if is_blank(master_addr_info) {
            return Err(ClientError::invalid_argument("masterAddrInfo is blank"));
        }
        let nodes = master_addr_info
            .split(',')
            .filter(|entry| !is_blank(entry))
            .map(NodeAddr::from_str)
            .collect::<ClientResult<Vec<_>>>()?;
        MasterInfo::from_nodes(nodes)
    }

    /// Builds a descriptor from already parsed node addresses.
    pub fn from_nodes<I>(nodes: I) -> ClientResult<MasterInfo>
    where
        I: IntoIterator<Item = NodeAddr>,
    {
        let mut nodes = nodes.into_iter();
        let first_node = nodes.next().ok_or_else(|| {
            ClientError::invalid_argument("masterAddrInfo contains no master address")
        })?;
        let mut set = BTreeSet::new();
        set.insert(first_node.clone());
        set.extend(nodes);
        let cluster_str = set
            .iter()
            .map(NodeAddr::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Ok(MasterInfo {
            first_node,
            nodes: set,
            cluster_str,
        })
    }

    /// Returns the first node of the address list as it was given.
    pub fn first_node(&self) -> &NodeAddr {
        &self.first_node
    }

    /// Returns an iterator over the distinct nodes, in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeAddr> {
        self.nodes.iter()
    }

    /// Returns the number of distinct nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a descriptor holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the sorted, comma-joined node list identifying the cluster.
    pub fn cluster_str(&self) -> &str {
        &self.cluster_str
    }
}

impl fmt::Display for MasterInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.cluster_str)
    }
}

impl FromStr for MasterInfo {
    type Err = ClientError;

    fn from_str(s: &str) -> ClientResult<MasterInfo> {
        MasterInfo::new(s)
    }
}

impl Serialize for MasterInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.cluster_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let info = MasterInfo::new(" 10.0.0.2:8715, ,10.0.0.1:8715,10.0.0.2:8715 ").unwrap();
        assert_eq!(info.len(), 2);
        assert_eq!(info.first_node().to_string(), "10.0.0.2:8715");
        assert_eq!(info.cluster_str(), "10.0.0.1:8715,10.0.0.2:8715");
        assert_eq!(info.to_string(), info.cluster_str());
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            "\"10.0.0.1:8715,10.0.0.2:8715\""
        );
    }

    #[test]
    fn test_same_cluster_compares_equal() {
        let a: MasterInfo = "127.0.0.1:8715,127.0.0.2:8715".parse().unwrap();
        let b: MasterInfo = "127.0.0.2:8715,127.0.0.1:8715".parse().unwrap();
        assert_eq!(a.cluster_str(), b.cluster_str());
        assert_ne!(a.first_node(), b.first_node());
    }

    #[test]
    fn test_malformed() {
        for input in ["", "  ", ",,", "host", "host:", ":8715", "host:0", "host:70000", "a b:1"] {
            let err = MasterInfo::new(input).unwrap_err();
            assert!(err.is_invalid_argument(), "{:?} -> {:?}", input, err);
        }
    }

    #[test]
    fn test_from_nodes() {
        assert!(MasterInfo::from_nodes(Vec::new()).is_err());
        let info = MasterInfo::from_nodes(vec![NodeAddr::new("localhost", 8715).unwrap()]).unwrap();
        assert_eq!(info.first_node().host(), "localhost");
        assert_eq!(info.first_node().port(), 8715);
        assert!(!info.is_empty());
    }
}
