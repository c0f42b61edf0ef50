use super::{OrderedTree, Slot};
use std::fmt;

impl<T: Ord + Clone + fmt::Display> OrderedTree<T> {
    /// Indented dump of the tree shape, one node or bucket per line.
    ///
    /// ```text
    /// Root: (b, c)
    ///   Leaf: a
    ///   Leaf: b
    ///   Leaf: c, d, e
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fmt_level(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        if level == 0 {
            f.write_str("Root: ")?;
        }
        writeln!(f, "({})", join(&self.keys))?;

        for slot in &self.slots {
            f.write_str(&"  ".repeat(level + 1))?;
            match slot {
                Slot::Subtree(child) => child.fmt_level(f, level + 1)?,
                Slot::Bucket(tokens) => writeln!(f, "Leaf: {}", join(tokens))?,
            }
        }
        Ok(())
    }
}

impl<T: Ord + Clone + fmt::Display> fmt::Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_level(f, 0)
    }
}

fn join<T: fmt::Display>(tokens: &[T]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let tree: OrderedTree<String> = OrderedTree::new(3);
        assert_eq!(tree.render(), "Root: ()\n");
    }

    #[test]
    fn test_render_flat_root() {
        let mut tree = OrderedTree::new(5);
        for token in ["pear", "apple", "fig"] {
            tree.insert(token).unwrap();
        }
        assert_eq!(tree.render(), "Root: (apple, fig, pear)\n");
    }

    #[test]
    fn test_render_three_levels() {
        let mut tree = OrderedTree::new(3);
        for i in 0..7 {
            tree.insert(i).unwrap();
        }
        let expected = "\
Root: (2)
  (1)
    Leaf: 0
    Leaf: 1
  (3, 4)
    Leaf: 2
    Leaf: 3
    Leaf: 4, 5, 6
";
        assert_eq!(tree.render(), expected);
        assert_eq!(format!("{}", tree), expected);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut tree = OrderedTree::new(4);
        for i in 0..12 {
            tree.insert(i).unwrap();
        }
        let before = tree.clone();
        let first = tree.render();
        let second = tree.render();
        assert_eq!(first, second);
        assert_eq!(tree, before);
    }
}
