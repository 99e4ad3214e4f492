use log::trace;

use crate::tools::freq_count::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// A node of the huffman tree. `seq` is the order in which the node entered the queue
/// and breaks ties between equal weights.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: usize,
    pub seq: usize,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: usize, seq: usize, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.depth().max(right.depth()),
            NodeData::Leaf(_) => 0,
        }
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing sequence, so the BinaryHeap pops
    /// the lightest, oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the huffman tree for a frequency table. Returns None if the table is empty.
///
/// Leaves enter the queue in ascending symbol order. Each merge pops the two lightest
/// nodes; the first popped becomes the left (0) branch and the second the right (1)
/// branch. A table with one symbol gives back a lone leaf.
pub fn build_tree(freqs: &FrequencyTable) -> Option<Node> {
    let mut heap: BinaryHeap<Node> = freqs
        .iter()
        .enumerate()
        .map(|(seq, (sym, weight))| Node::new(weight, seq, NodeData::Leaf(sym)))
        .collect();
    let mut next_seq = heap.len();

    while heap.len() > 1 {
        // Both pops are safe, the loop guard guarantees two nodes.
        let left_child = heap.pop()?;
        let right_child = heap.pop()?;
        trace!(
            "Merging weights {} (seq {}) and {} (seq {})",
            left_child.weight,
            left_child.seq,
            right_child.weight,
            right_child.seq
        );
        heap.push(Node::new(
            left_child.weight + right_child.weight,
            next_seq,
            NodeData::Kids(Box::new(left_child), Box::new(right_child)),
        ));
        next_seq += 1;
    }
    heap.pop()
}

#[cfg(test)]
mod test {
    use super::{build_tree, Node, NodeData};
    use crate::tools::freq_count::analyze;

    fn leaf_sym(node: &Node) -> u8 {
        match node.node_data {
            NodeData::Leaf(sym) => sym,
            _ => panic!("expected a leaf"),
        }
    }

    #[test]
    fn empty_table_test() {
        assert_eq!(build_tree(&analyze(b"")), None);
    }

    #[test]
    fn single_symbol_test() {
        let root = build_tree(&analyze(b"aaaaa")).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.weight, 5);
        assert_eq!(leaf_sym(&root), b'a');
    }

    #[test]
    fn tie_break_shape_test() {
        // a:2 and c:2 tie, a entered first so it is popped first and goes left.
        let root = build_tree(&analyze(b"aabbbcc")).unwrap();
        assert_eq!(root.weight, 7);
        let NodeData::Kids(left, right) = &root.node_data else {
            panic!("root must be internal")
        };
        assert_eq!(leaf_sym(left), b'b');
        assert_eq!(right.weight, 4);
        let NodeData::Kids(rl, rr) = &right.node_data else {
            panic!("right must be internal")
        };
        assert_eq!(leaf_sym(rl), b'a');
        assert_eq!(leaf_sym(rr), b'c');
    }

    #[test]
    fn weights_sum_test() {
        fn check(node: &Node) -> usize {
            match &node.node_data {
                NodeData::Kids(l, r) => {
                    let sum = check(l) + check(r);
                    assert_eq!(node.weight, sum);
                    sum
                }
                NodeData::Leaf(_) => node.weight,
            }
        }
        let text = b"the quick brown fox jumps over the lazy dog";
        let root = build_tree(&analyze(text)).unwrap();
        assert_eq!(check(&root), text.len());
    }

    #[test]
    fn skewed_depth_test() {
        // Fibonacci weights give the deepest possible tree.
        let mut text = vec![];
        let (mut a, mut b) = (1_usize, 1_usize);
        for sym in 0..12_u8 {
            text.extend(std::iter::repeat(sym).take(a));
            let next = a + b;
            a = b;
            b = next;
        }
        let root = build_tree(&analyze(&text)).unwrap();
        assert_eq!(root.depth(), 11);
    }
}
