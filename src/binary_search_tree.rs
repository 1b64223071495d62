use crate::Value;
use crate::diagram::{LevelTable, print_tree_structure};
use std::collections::VecDeque;

/// Unbalanced binary search tree.
///
/// Values smaller than a node go to its left subtree, everything else
/// (including duplicates) goes to the right.
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
}

#[derive(Clone, Debug)]
struct TreeNode {
    value: Value,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting `values` one at a time, in order.
    pub fn from_values(values: &[Value]) -> Self {
        let mut bst = Self::new();
        for &value in values {
            bst.insert(value);
        }
        bst
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        Self::len_recursive(&self.root)
    }

    fn len_recursive(node: &Option<Box<TreeNode>>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + Self::len_recursive(&n.left) + Self::len_recursive(&n.right),
        }
    }

    /// Number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        Self::height_recursive(&self.root)
    }

    fn height_recursive(node: &Option<Box<TreeNode>>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + Self::height_recursive(&n.left).max(Self::height_recursive(&n.right)),
        }
    }

    pub fn insert(&mut self, value: Value) {
        Self::insert_recursive(&mut self.root, value);
    }

    fn insert_recursive(node: &mut Option<Box<TreeNode>>, value: Value) {
        match node {
            None => {
                *node = Some(Box::new(TreeNode {
                    value,
                    left: None,
                    right: None,
                }));
            }
            Some(n) => {
                if value < n.value {
                    Self::insert_recursive(&mut n.left, value);
                } else {
                    Self::insert_recursive(&mut n.right, value);
                }
            }
        }
    }

    pub fn in_order(&self) -> Vec<Value> {
        let mut out = Vec::new();
        Self::in_order_recursive(&self.root, &mut out);
        out
    }

    fn in_order_recursive(node: &Option<Box<TreeNode>>, out: &mut Vec<Value>) {
        if let Some(n) = node {
            Self::in_order_recursive(&n.left, out);
            out.push(n.value);
            Self::in_order_recursive(&n.right, out);
        }
    }

    /// Breadth-first level table with `""` in every slot that holds no node.
    ///
    /// Level `k` always has `2^k` slots: a missing node still schedules two
    /// missing children. Collection stops at the first level made only of
    /// empty slots, which is not included.
    pub fn collect_levels(&self) -> LevelTable {
        let mut levels = LevelTable::new();
        if self.root.is_none() {
            return levels;
        }

        let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::new();
        queue.push_back(self.root.as_deref());

        while !queue.is_empty() {
            let level_size = queue.len();
            let mut level = Vec::with_capacity(level_size);

            for _ in 0..level_size {
                let Some(slot) = queue.pop_front() else {
                    break;
                };
                match slot {
                    Some(n) => {
                        level.push(n.value.to_string());
                        queue.push_back(n.left.as_deref());
                        queue.push_back(n.right.as_deref());
                    }
                    None => {
                        level.push(String::new());
                        queue.push_back(None);
                        queue.push_back(None);
                    }
                }
            }

            if level.iter().all(String::is_empty) {
                break;
            }
            levels.push(level);
        }

        log::debug!("collected {} bst levels", levels.len());
        levels
    }

    /// Renders the tree diagram as text.
    pub fn diagram(&self) -> String {
        print_tree_structure(&self.collect_levels())
    }

    pub fn pretty_print(&self) {
        println!("\n=== Binary Search Tree ===");
        if self.root.is_none() {
            println!("  (empty tree)");
        } else {
            print!("{}", self.diagram());
        }
        println!("=========================\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn labels(level: &[&str]) -> Vec<String> {
        level.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tree_insertion() {
        let mut bst = BinarySearchTree::new();
        assert!(bst.is_empty());
        for value in [1, 2, 3, 20, 30, 4, 5, 6, 7] {
            bst.insert(value);
        }
        assert_eq!(bst.len(), 9);
        assert_eq!(bst.in_order(), vec![1, 2, 3, 4, 5, 6, 7, 20, 30]);
    }

    #[test]
    fn test_duplicates_go_right() {
        let bst = BinarySearchTree::from_values(&[5, 5, 5]);
        // 5 -> right 5 -> right 5
        assert_eq!(bst.height(), 3);
        let levels = bst.collect_levels();
        assert_eq!(levels[1], labels(&["", "5"]));
        assert_eq!(levels[2], labels(&["", "", "", "5"]));
    }

    #[test]
    fn test_height() {
        assert_eq!(BinarySearchTree::new().height(), 0);
        assert_eq!(BinarySearchTree::from_values(&[1]).height(), 1);
        assert_eq!(BinarySearchTree::from_values(&[2, 1, 3]).height(), 2);
        assert_eq!(BinarySearchTree::from_values(&[1, 2, 3, 4]).height(), 4);
    }

    #[test]
    fn test_collect_levels_empty() {
        let bst = BinarySearchTree::new();
        assert!(bst.collect_levels().is_empty());
        assert_eq!(bst.diagram(), "");
    }

    #[test]
    fn test_collect_levels_single_node() {
        let bst = BinarySearchTree::from_values(&[42]);
        assert_eq!(bst.collect_levels(), vec![labels(&["42"])]);
    }

    #[test]
    fn test_collect_levels_pads_missing_children() {
        let bst = BinarySearchTree::from_values(&[5, 3, 8, 1]);
        let levels = bst.collect_levels();
        assert_eq!(
            levels,
            vec![
                labels(&["5"]),
                labels(&["3", "8"]),
                labels(&["1", "", "", ""]),
            ]
        );
    }

    #[test]
    fn test_collect_levels_negative_values() {
        let bst = BinarySearchTree::from_values(&[0, -7, 7]);
        assert_eq!(
            bst.collect_levels(),
            vec![labels(&["0"]), labels(&["-7", "7"])]
        );
    }

    #[test]
    fn test_diagram() {
        let bst = BinarySearchTree::from_values(&[5, 3, 8, 1]);
        // depth 3: gaps 7, 3, 1 and indents 3, 1, 0
        assert_eq!(bst.diagram(), "   5\n 3   8\n1   \n");
    }

    proptest! {
        #[test]
        fn prop_in_order_is_sorted(xs in proptest::collection::vec(any::<i32>(), 0..256)) {
            let bst = BinarySearchTree::from_values(&xs);
            let mut expected = xs.clone();
            expected.sort();
            prop_assert_eq!(bst.in_order(), expected);
            prop_assert_eq!(bst.len(), xs.len());
        }

        #[test]
        fn prop_levels_double_in_width(xs in proptest::collection::vec(-50i32..50, 1..12)) {
            let bst = BinarySearchTree::from_values(&xs);
            let levels = bst.collect_levels();
            prop_assert_eq!(levels.len(), bst.height());
            for (k, level) in levels.iter().enumerate() {
                prop_assert_eq!(level.len(), 1usize << k);
                prop_assert!(level.iter().any(|label| !label.is_empty()));
            }
            let filled: usize = levels
                .iter()
                .map(|level| level.iter().filter(|label| !label.is_empty()).count())
                .sum();
            prop_assert_eq!(filled, xs.len());
        }
    }
}
