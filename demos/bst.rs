use tree_diagram::BinarySearchTree;

fn main() {
    let bst = BinarySearchTree::from_values(&[5, 3, 8, 1]);
    bst.pretty_print();

    let mut bst2 = BinarySearchTree::new();
    bst2.pretty_print();
    for &value in &[50, 25, 75, 12, 37, 62, 87] {
        bst2.insert(value);
    }
    bst2.pretty_print();

    // duplicates go right
    let bst3 = BinarySearchTree::from_values(&[4, 4, 2, 4]);
    bst3.pretty_print();

    // unbalanced tree
    let mut bst4 = BinarySearchTree::new();
    for &value in &[1, 2, 3, 4, 5] {
        bst4.insert(value);
    }
    bst4.pretty_print();
}
