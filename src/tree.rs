use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use log::{debug, trace};

use crate::frequency::FrequencyTable;
use crate::symbol_label;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    Leaf(u8),
    Internal(Box<Node>, Box<Node>),
}

/// A node of a Huffman tree. Internal nodes always have both children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    node_type: NodeType,
    freq: usize,
}

impl Node {
    fn new_leaf(symbol: u8, freq: usize) -> Self {
        Node {
            node_type: NodeType::Leaf(symbol),
            freq,
        }
    }

    fn new_internal(left: Node, right: Node) -> Self {
        Node {
            freq: left.freq + right.freq,
            node_type: NodeType::Internal(Box::new(left), Box::new(right)),
        }
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn freq(&self) -> usize {
        self.freq
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_type, NodeType::Leaf(_))
    }

    pub fn symbol(&self) -> Option<u8> {
        match self.node_type {
            NodeType::Leaf(symbol) => Some(symbol),
            NodeType::Internal(..) => None,
        }
    }
}

/// Priority queue entry.
///
/// Lowest frequency pops first; equal frequencies pop in insertion order.
/// Leaves are queued in ascending symbol order and every merged node is
/// queued after all nodes that already exist, so the resulting tree only
/// depends on the frequency table.
struct Queued {
    node: Node,
    seq: usize,
}

impl Eq for Queued {}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .freq
            .cmp(&self.node.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A Huffman tree, absent when built from an empty frequency table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<Node>,
}

impl HuffmanTree {
    pub fn from_frequencies(freqs: &FrequencyTable) -> Self {
        let mut pqueue = BinaryHeap::with_capacity(freqs.len());
        let mut seq = 0;
        for (symbol, freq) in freqs.iter() {
            pqueue.push(Queued {
                node: Node::new_leaf(symbol, freq),
                seq,
            });
            seq += 1;
        }

        // The first node popped becomes the left child.
        let root = loop {
            let Some(left) = pqueue.pop() else {
                break None;
            };
            let Some(right) = pqueue.pop() else {
                break Some(left.node);
            };

            trace!(
                "merging weights {} and {} into node #{}",
                left.node.freq,
                right.node.freq,
                seq
            );
            pqueue.push(Queued {
                node: Node::new_internal(left.node, right.node),
                seq,
            });
            seq += 1;
        };

        if let Some(root) = &root {
            debug!(
                "built tree over {} symbols, root weight {}",
                freqs.len(),
                root.freq
            );
        }

        Self { root }
    }

    pub fn from_bytes(input: &[u8]) -> Self {
        Self::from_frequencies(&FrequencyTable::from_bytes(input))
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total frequency held by the tree, i.e. the input length.
    pub fn weight(&self) -> usize {
        self.root.as_ref().map_or(0, Node::freq)
    }

    pub fn leaf_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match &node.node_type {
                NodeType::Leaf(_) => 1,
                NodeType::Internal(left, right) => count(left) + count(right),
            }
        }
        self.root.as_ref().map_or(0, count)
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write_node(f, root, 0, "root"),
            None => writeln!(f, "(empty tree)"),
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize, label: &str) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match &node.node_type {
        NodeType::Leaf(symbol) => writeln!(
            f,
            "{indent}{label}-> Leaf {} [weight: {}]",
            symbol_label(*symbol),
            node.freq
        ),
        NodeType::Internal(left, right) => {
            writeln!(f, "{indent}{label}-> Internal [weight: {}]", node.freq)?;
            write_node(f, left, depth + 1, "L")?;
            write_node(f, right, depth + 1, "R")
        }
    }
}
