use std::collections::VecDeque;
use std::iter::Iterator;

use super::TreeNode;

/// Level-order (BFT) iterator of nodes in a decision tree
pub struct NodeIter<'a> {
    nodes: &'a [TreeNode],
    queue: VecDeque<usize>,
}

impl<'a> NodeIter<'a> {
    /// Iterates the arena `nodes` starting from its root at index 0
    pub fn new(nodes: &'a [TreeNode]) -> Self {
        let queue = if nodes.is_empty() {
            VecDeque::new()
        } else {
            VecDeque::from(vec![0])
        };

        NodeIter { nodes, queue }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|idx| {
            let node = &self.nodes[idx];
            if let Some((false_branch, true_branch)) = node.branches() {
                self.queue.push_back(false_branch);
                self.queue.push_back(true_branch);
            }

            node
        })
    }
}
