use crate::Value;
use crate::diagram::{LevelTable, print_tree_structure};

fn left(i: usize) -> usize {
    i * 2 + 1
}

fn right(i: usize) -> usize {
    i * 2 + 2
}

/// Array-backed max-heap, built once from a value sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaxHeap {
    data: Vec<Value>,
}

impl MaxHeap {
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            data: build_max_heap(values.to_vec()),
        }
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Level table read off the array: level `k` is the index range
    /// `[2^k - 1, 2^(k+1) - 2]`, cut short by the end of the array.
    pub fn collect_levels(&self) -> LevelTable {
        collect_heap_levels(&self.data)
    }

    pub fn diagram(&self) -> String {
        print_tree_structure(&self.collect_levels())
    }

    pub fn pretty_print(&self) {
        println!("\n=== Max-Heap ===");
        if self.data.is_empty() {
            println!("  (empty heap)");
        } else {
            print!("{}", self.diagram());
        }
        println!("================\n");
    }
}

/// Rearranges `values` into max-heap order in linear time.
pub fn build_max_heap(mut values: Vec<Value>) -> Vec<Value> {
    let n = values.len();
    for i in (0..n / 2).rev() {
        sift_down(&mut values, i);
    }
    values
}

fn sift_down(data: &mut [Value], mut i: usize) {
    let n = data.len();
    loop {
        if left(i) >= n {
            break;
        }

        // prefer the right child on ties
        let mut child = left(i);
        if right(i) < n && data[right(i)] >= data[child] {
            child = right(i);
        }

        if data[i] >= data[child] {
            break;
        }
        data.swap(i, child);
        i = child;
    }
}

pub fn is_max_heap(data: &[Value]) -> bool {
    (1..data.len()).all(|i| data[(i - 1) / 2] >= data[i])
}

pub fn collect_heap_levels(heap: &[Value]) -> LevelTable {
    let mut levels = LevelTable::new();
    let mut start = 0usize;
    let mut width = 1usize;

    while start < heap.len() {
        let end = start.saturating_add(width).min(heap.len());
        levels.push(heap[start..end].iter().map(Value::to_string).collect());
        start = end;
        width = width.saturating_mul(2);
    }

    log::debug!("collected {} heap levels from {} values", levels.len(), heap.len());
    levels
}
