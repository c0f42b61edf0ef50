mod slot;
mod insert;
mod remove;
mod render;
mod iter;

pub use slot::Slot;
pub use remove::Rebalance;
pub use iter::Iter;

/// A multi-way ordered tree of distinct tokens.
///
/// Every node is an `OrderedTree`. A node without slots stores its tokens
/// directly in `keys`; only the root is ever in that state. A node with slots
/// uses `keys` as separators: tokens under `slots[i]` are `< keys[i]`, tokens
/// under `slots[i + 1]` are `>= keys[i]`. The deepest slots are buckets that
/// hold the stored tokens in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTree<T> {
    degree: usize,
    keys: Vec<T>,
    slots: Vec<Slot<T>>,
}

impl<T: Ord + Clone> OrderedTree<T> {
    /// Creates an empty tree. `degree` is the largest key count a node may
    /// keep before it splits; it is not validated here (see
    /// [`TreeConfig`](crate::TreeConfig)).
    pub fn new(degree: usize) -> Self {
        OrderedTree {
            degree,
            keys: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    pub fn is_leaf(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of stored tokens. Separators are not counted.
    pub fn len(&self) -> usize {
        if self.slots.is_empty() {
            return self.keys.len();
        }
        self.slots.iter().map(Slot::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Levels from this node down to its buckets, counting both ends.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self;
        while let Some(slot) = node.slots.first() {
            height += 1;
            match slot {
                Slot::Subtree(child) => node = child,
                Slot::Bucket(_) => break,
            }
        }
        height
    }

    pub fn contains(&self, value: &T) -> bool {
        if self.slots.is_empty() {
            return self.keys.binary_search(value).is_ok();
        }
        self.slots[self.route(value)].contains(value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    fn min_keys(&self) -> usize {
        self.degree / 2
    }

    // First slot whose separator is greater than `value`, or the last slot.
    fn route(&self, value: &T) -> usize {
        self.keys.partition_point(|k| k <= value)
    }
}

impl<'a, T: Ord + Clone> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
