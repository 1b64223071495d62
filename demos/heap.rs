use tree_diagram::MaxHeap;
use tree_diagram::data_gen::{self, Distribution, GenConfig};

fn main() {
    let heap = MaxHeap::from_values(&[5, 3, 8, 1]);
    heap.pretty_print();

    let values = data_gen::generate(&GenConfig {
        count: 20,
        distribution: Distribution::Normal,
        min: 0,
        max: 99,
        seed: Some(42),
    })
    .expect("valid range");
    println!("values: {:?}", values);

    let heap = MaxHeap::from_values(&values);
    println!("heap:   {:?}", heap.as_slice());
    heap.pretty_print();
}
