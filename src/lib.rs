pub mod binary_search_tree;
pub mod data_gen;
pub mod diagram;
pub mod error;
pub mod input;
pub mod max_heap;
pub mod report;

pub use binary_search_tree::BinarySearchTree;
pub use diagram::{LevelTable, print_tree_structure};
pub use error::{Error, Result};
pub use max_heap::MaxHeap;
pub use report::{ReportConfig, render_report};

pub type Value = i32;
