/// Labels of one tree depth, left to right.
pub type Level = Vec<String>;

/// One [`Level`] per depth, root first.
pub type LevelTable = Vec<Level>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spacing {
    /// Spaces between two neighbouring labels.
    pub gap: usize,
    /// Spaces before the first label.
    pub indent: usize,
}

/// `2^n - 1`, saturating at `usize::MAX`.
fn pow2_minus_one(n: usize) -> usize {
    u32::try_from(n)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .map_or(usize::MAX, |p| p - 1)
}

/// Width of a perfectly balanced tree with `depth` levels.
pub fn max_width(depth: usize) -> usize {
    pow2_minus_one(depth)
}

/// Spacing of `level` in a table of `depth` levels.
pub fn spacing(depth: usize, level: usize) -> Spacing {
    let gap = pow2_minus_one(depth.saturating_sub(level));
    Spacing {
        gap,
        indent: gap / 2,
    }
}

/// Renders a level table as a pyramid, one line per level.
///
/// Spacing depends only on the depth of the table and the index of the
/// level, not on where each label sits in the tree, so one-sided trees come
/// out only roughly aligned.
pub fn print_tree_structure(levels: &[Level]) -> String {
    let depth = levels.len();
    log::debug!("rendering {depth} levels, grid width {}", max_width(depth));
    let mut out = String::new();

    for (i, level) in levels.iter().enumerate() {
        let Spacing { gap, indent } = spacing(depth, i);
        let separator = " ".repeat(gap);

        out.push_str(&" ".repeat(indent));
        out.push_str(&level.join(&separator));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(levels: &[&[&str]]) -> LevelTable {
        levels
            .iter()
            .map(|level| level.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_table_prints_nothing() {
        assert_eq!(print_tree_structure(&[]), "");
    }

    #[test]
    fn test_single_level() {
        assert_eq!(spacing(1, 0), Spacing { gap: 1, indent: 0 });
        assert_eq!(print_tree_structure(&table(&[&["7"]])), "7\n");
        assert_eq!(print_tree_structure(&table(&[&["1", "2", "3"]])), "1 2 3\n");
    }

    #[test]
    fn test_spacing() {
        assert_eq!(spacing(3, 0), Spacing { gap: 7, indent: 3 });
        assert_eq!(spacing(3, 1), Spacing { gap: 3, indent: 1 });
        assert_eq!(spacing(3, 2), Spacing { gap: 1, indent: 0 });
        assert_eq!(spacing(4, 0), Spacing { gap: 15, indent: 7 });
    }

    #[test]
    fn test_spacing_saturates() {
        assert_eq!(spacing(200, 0).gap, usize::MAX);
        assert_eq!(spacing(0, 0), Spacing { gap: 0, indent: 0 });
    }

    #[test]
    fn test_max_width() {
        assert_eq!(max_width(0), 0);
        assert_eq!(max_width(1), 1);
        assert_eq!(max_width(4), 15);
    }

    #[test]
    fn test_two_levels() {
        let out = print_tree_structure(&table(&[&["10"], &["4", "12"]]));
        assert_eq!(out, " 10\n4 12\n");
    }

    #[test]
    fn test_empty_labels_keep_spacing() {
        let out = print_tree_structure(&table(&[&["1"], &["", "2"]]));
        assert_eq!(out, " 1\n 2\n");
    }

    #[test]
    fn test_one_sided_chain() {
        let out = print_tree_structure(&table(&[&["1"], &["", "2"], &["", "", "", "3"]]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["   1", "    2", "   3"]);
    }
}
