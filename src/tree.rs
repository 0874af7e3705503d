use crate::code::{CodeTable, ReverseCodeTable};
use crate::frequency::FrequencyTable;
use bitvec::prelude::*;
use derivative::Derivative;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<Symbol> {
    Leaf {
        symbol: Symbol,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: usize,
        right: usize,
    },
}

impl<Symbol> Node<Symbol> {
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Priority key for a node waiting in the queue. The lightest node pops
/// first; among equal weights the one created earliest wins.
#[derive(Debug, Clone, Copy, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Queued {
    weight: Reverse<usize>,
    created: Reverse<usize>,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: usize,
}

impl Queued {
    fn new(weight: usize, node: usize, created: usize) -> Self {
        Self {
            weight: Reverse(weight),
            created: Reverse(created),
            node,
        }
    }
}

/// A Huffman tree stored as an arena of nodes. Children are referenced by
/// their index in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<Symbol> {
    nodes: Vec<Node<Symbol>>,
    root: usize,
}

impl<Symbol> HuffmanTree<Symbol>
where
    Symbol: Hash + Eq + Clone,
{
    /// Returns `None` for an empty table.
    pub fn from_frequencies(table: &FrequencyTable<Symbol>) -> Option<Self> {
        let mut nodes = Vec::with_capacity((2 * table.len()).saturating_sub(1));
        let mut pq = BinaryHeap::with_capacity(table.len());

        for (symbol, weight) in table.iter() {
            pq.push(Queued::new(weight, nodes.len(), nodes.len()));
            nodes.push(Node::Leaf {
                symbol: symbol.clone(),
                weight,
            });
        }

        let root = loop {
            let left = pq.pop()?;
            let Some(right) = pq.pop() else {
                break left.node;
            };

            let weight = left.weight.0 + right.weight.0;
            pq.push(Queued::new(weight, nodes.len(), nodes.len()));
            nodes.push(Node::Internal {
                weight,
                left: left.node,
                right: right.node,
            });
        };

        tracing::debug!(
            symbols = table.len(),
            nodes = nodes.len(),
            weight = nodes[root].weight(),
            "built huffman tree"
        );

        Some(Self { nodes, root })
    }

    /// Walks the tree from the root, `0` going left and `1` going right.
    /// A lone leaf gets the code `0`.
    pub fn code_table(&self) -> CodeTable<Symbol> {
        let mut codes = HashMap::with_capacity(self.leaf_count());

        if let Node::Leaf { symbol, .. } = &self.nodes[self.root] {
            codes.insert(symbol.clone(), bitvec![0].into_boxed_bitslice());
            return CodeTable::from_tree_codes(codes);
        }

        let mut stack: Vec<(usize, BitVec)> = vec![(self.root, BitVec::new())];
        while let Some((index, path)) = stack.pop() {
            match &self.nodes[index] {
                Node::Leaf { symbol, .. } => {
                    tracing::trace!(len = path.len(), "assigned code");
                    codes.insert(symbol.clone(), path.into_boxed_bitslice());
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((*right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((*left, left_path));
                }
            }
        }

        CodeTable::from_tree_codes(codes)
    }

    pub fn into_code_tables(self) -> (CodeTable<Symbol>, ReverseCodeTable<Symbol>) {
        let codes = self.code_table();
        let reverse = codes.invert();
        (codes, reverse)
    }
}

impl<Symbol> HuffmanTree<Symbol> {
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn node(&self, index: usize) -> Option<&Node<Symbol>> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node<Symbol>] {
        &self.nodes
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Total weight of the tree, i.e. the number of symbols it was built from.
    pub fn weight(&self) -> usize {
        self.nodes[self.root].weight()
    }

    /// Sum over leaves of weight times depth. A tree made of a single leaf
    /// counts that leaf at depth 1, matching its one-bit code.
    pub fn weighted_path_length(&self) -> usize {
        if let Node::Leaf { weight, .. } = &self.nodes[self.root] {
            return *weight;
        }

        let mut total = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((index, depth)) = stack.pop() {
            match &self.nodes[index] {
                Node::Leaf { weight, .. } => total += weight * depth,
                Node::Internal { left, right, .. } => {
                    stack.push((*left, depth + 1));
                    stack.push((*right, depth + 1));
                }
            }
        }
        total
    }
}
