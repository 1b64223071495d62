use crate::Value;
use crate::binary_search_tree::BinarySearchTree;
use crate::diagram::print_tree_structure;
use crate::error::{Error, Result};
use crate::max_heap::MaxHeap;

pub const BST_HEADER: &str = "Binary Search Tree (tree diagram):";
pub const HEAP_HEADER: &str = "Max-Heap (tree diagram):";

/// Deepest BST drawn by default. Level `k` holds `2^k` slots, so a sorted
/// input of a few dozen values would not fit in memory.
pub const DEFAULT_MAX_DEPTH: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub max_depth: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

pub fn bst_diagram(bst: &BinarySearchTree, max_depth: usize) -> Result<String> {
    let height = bst.height();
    if height > max_depth {
        return Err(Error::TooDeep {
            height,
            limit: max_depth,
        });
    }
    Ok(print_tree_structure(&bst.collect_levels()))
}

/// Builds both structures from `values` and renders the two diagrams under
/// their headers, separated by a blank line.
pub fn render_report(values: &[Value], config: &ReportConfig) -> String {
    let bst = BinarySearchTree::from_values(values);
    let heap = MaxHeap::from_values(values);
    log::info!(
        "built bst of height {} and heap of {} values",
        bst.height(),
        heap.len()
    );

    let mut out = String::new();

    out.push_str(BST_HEADER);
    out.push('\n');
    match bst_diagram(&bst, config.max_depth) {
        Ok(diagram) => out.push_str(&diagram),
        Err(e) => {
            log::warn!("{e}");
            out.push_str(&format!("({e})\n"));
        }
    }

    out.push('\n');
    out.push_str(HEAP_HEADER);
    out.push('\n');
    out.push_str(&heap.diagram());

    out
}
