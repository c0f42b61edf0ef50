use super::{OrderedTree, Slot};
use std::slice;

/// In-order iterator over the tokens of an [`OrderedTree`].
pub struct Iter<'a, T> {
    stack: Vec<slice::Iter<'a, Slot<T>>>,
    bucket: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a OrderedTree<T>) -> Self {
        if tree.slots.is_empty() {
            Iter {
                stack: Vec::new(),
                bucket: tree.keys.iter(),
            }
        } else {
            Iter {
                stack: vec![tree.slots.iter()],
                bucket: Default::default(),
            }
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.bucket.next() {
                return Some(token);
            }

            let slots = self.stack.last_mut()?;
            match slots.next() {
                Some(Slot::Bucket(tokens)) => self.bucket = tokens.iter(),
                Some(Slot::Subtree(child)) => self.stack.push(child.slots.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
