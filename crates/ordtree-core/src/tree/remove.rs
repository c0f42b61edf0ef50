use super::slot::bucket_remove;
use super::{OrderedTree, Slot};
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// How an underflowing slot was repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rebalance {
    BorrowLeft,
    BorrowRight,
    MergeLeft,
    MergeRight,
}

impl<T: Ord + Clone> OrderedTree<T> {
    /// Removes `value`, borrowing from or merging with siblings wherever a
    /// node or bucket drops below half the degree. Fails without touching the
    /// tree if `value` is not stored.
    pub fn delete(&mut self, value: &T) -> Result<()> {
        if !self.contains(value) {
            trace!("delete rejected, value not present");
            return Err(Error::ValueNotFound);
        }

        self.delete_recursive(value);
        self.collapse_root();
        Ok(())
    }

    fn delete_recursive(&mut self, value: &T) {
        if self.slots.is_empty() {
            bucket_remove(&mut self.keys, value);
            return;
        }

        let idx = self.route(value);
        match &mut self.slots[idx] {
            Slot::Subtree(child) => child.delete_recursive(value),
            Slot::Bucket(tokens) => {
                bucket_remove(tokens, value);
            }
        }

        if self.slots[idx].len() < self.min_keys() {
            self.borrow_or_merge(idx);
        }
    }

    /// Restores the minimum occupancy of the slot at `idx`. Siblings are
    /// tried in the order left donor, right donor, left merge, right merge.
    pub(super) fn borrow_or_merge(&mut self, idx: usize) -> Rebalance {
        let min = self.min_keys();
        let outcome = if idx > 0 && self.slots[idx - 1].len() > min {
            self.borrow_from_left(idx);
            Rebalance::BorrowLeft
        } else if idx + 1 < self.slots.len() && self.slots[idx + 1].len() > min {
            self.borrow_from_right(idx);
            Rebalance::BorrowRight
        } else if idx > 0 {
            self.merge(idx - 1);
            Rebalance::MergeLeft
        } else {
            self.merge(idx);
            Rebalance::MergeRight
        };
        debug!(index = idx, ?outcome, "rebalanced child");
        outcome
    }

    fn borrow_from_left(&mut self, idx: usize) {
        let (head, tail) = self.slots.split_at_mut(idx);
        match (&mut head[idx - 1], &mut tail[0]) {
            (Slot::Subtree(left), Slot::Subtree(child)) => {
                let (Some(key), Some(slot)) = (left.keys.pop(), left.slots.pop()) else {
                    return;
                };
                let separator = std::mem::replace(&mut self.keys[idx - 1], key);
                child.keys.insert(0, separator);
                child.slots.insert(0, slot);
            }
            (Slot::Bucket(left), Slot::Bucket(child)) => {
                let Some(token) = left.pop() else {
                    return;
                };
                self.keys[idx - 1] = token.clone();
                child.insert(0, token);
            }
            _ => unreachable!("sibling slots share a height"),
        }
    }

    fn borrow_from_right(&mut self, idx: usize) {
        let (head, tail) = self.slots.split_at_mut(idx + 1);
        match (&mut head[idx], &mut tail[0]) {
            (Slot::Subtree(child), Slot::Subtree(right)) => {
                if right.keys.is_empty() {
                    return;
                }
                let key = right.keys.remove(0);
                let slot = right.slots.remove(0);
                let separator = std::mem::replace(&mut self.keys[idx], key);
                child.keys.push(separator);
                child.slots.push(slot);
            }
            (Slot::Bucket(child), Slot::Bucket(right)) => {
                if right.is_empty() {
                    return;
                }
                child.push(right.remove(0));
                if let Some(first) = right.first() {
                    self.keys[idx] = first.clone();
                }
            }
            _ => unreachable!("sibling slots share a height"),
        }
    }

    /// Folds the slot at `idx + 1` into the slot at `idx` and drops the
    /// separator between them.
    fn merge(&mut self, idx: usize) {
        let separator = self.keys.remove(idx);
        let absorbed = self.slots.remove(idx + 1);
        match (&mut self.slots[idx], absorbed) {
            (Slot::Subtree(left), Slot::Subtree(right)) => {
                let right = *right;
                left.keys.push(separator);
                left.keys.extend(right.keys);
                left.slots.extend(right.slots);
            }
            (Slot::Bucket(left), Slot::Bucket(right)) => {
                left.extend(right);
            }
            _ => unreachable!("sibling slots share a height"),
        }
    }

    fn collapse_root(&mut self) {
        if !self.keys.is_empty() || self.slots.len() != 1 {
            return;
        }
        match self.slots.pop() {
            Some(Slot::Subtree(child)) => *self = *child,
            Some(Slot::Bucket(tokens)) => self.keys = tokens,
            None => {}
        }
        debug!(height = self.height(), "root collapsed");
    }
}
