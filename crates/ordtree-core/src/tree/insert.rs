use super::slot::bucket_insert;
use super::{OrderedTree, Slot};
use crate::error::{Error, Result};
use tracing::{debug, trace};

impl<T: Ord + Clone> OrderedTree<T> {
    /// Inserts `value`, splitting any node or bucket that grows past the
    /// degree. Fails without touching the tree if `value` is already stored.
    pub fn insert(&mut self, value: T) -> Result<()> {
        if self.contains(&value) {
            trace!("insert rejected, value already present");
            return Err(Error::DuplicateValue);
        }

        self.insert_recursive(value);

        if self.keys.len() > self.degree {
            self.split_root();
        }
        Ok(())
    }

    fn insert_recursive(&mut self, value: T) {
        if self.slots.is_empty() {
            bucket_insert(&mut self.keys, value);
            return;
        }

        let idx = self.route(&value);
        match &mut self.slots[idx] {
            Slot::Subtree(child) => child.insert_recursive(value),
            Slot::Bucket(tokens) => bucket_insert(tokens, value),
        }

        if self.slots[idx].len() > self.degree {
            self.split(idx);
        }
    }

    /// Splits the overflowing slot at `idx` in two, adding one separator to
    /// this node.
    pub(super) fn split(&mut self, idx: usize) {
        let degree = self.degree;
        let mid = degree / 2;

        let (separator, right) = match &mut self.slots[idx] {
            Slot::Subtree(child) => {
                let right_keys = child.keys.split_off(mid + 1);
                let right_slots = child.slots.split_off(mid + 1);
                let separator = child.keys.remove(mid);
                let right = OrderedTree {
                    degree,
                    keys: right_keys,
                    slots: right_slots,
                };
                (separator, Slot::Subtree(Box::new(right)))
            }
            Slot::Bucket(tokens) => {
                // buckets hold the data, so the boundary token is copied up
                let right = tokens.split_off(mid);
                (right[0].clone(), Slot::Bucket(right))
            }
        };

        trace!(index = idx, "split child");
        self.keys.insert(idx, separator);
        self.slots.insert(idx + 1, right);
    }

    fn split_root(&mut self) {
        let degree = self.degree;
        let old = std::mem::replace(self, OrderedTree::new(degree));
        let slot = if old.slots.is_empty() {
            Slot::Bucket(old.keys)
        } else {
            Slot::Subtree(Box::new(old))
        };
        self.slots.push(slot);
        self.split(0);
        debug!(height = self.height(), "root split");
    }
}
