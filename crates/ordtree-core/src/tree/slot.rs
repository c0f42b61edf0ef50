use super::OrderedTree;

/// One child position of an [`OrderedTree`] node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Subtree(Box<OrderedTree<T>>),
    Bucket(Vec<T>),
}

impl<T: Ord + Clone> Slot<T> {
    /// Occupancy measured against the degree: key count for a subtree,
    /// token count for a bucket.
    pub fn len(&self) -> usize {
        match self {
            Slot::Subtree(node) => node.keys.len(),
            Slot::Bucket(tokens) => tokens.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_subtree(&self) -> Option<&OrderedTree<T>> {
        match self {
            Slot::Subtree(node) => Some(node),
            Slot::Bucket(_) => None,
        }
    }

    pub fn as_bucket(&self) -> Option<&[T]> {
        match self {
            Slot::Bucket(tokens) => Some(tokens),
            Slot::Subtree(_) => None,
        }
    }

    pub(super) fn contains(&self, value: &T) -> bool {
        match self {
            Slot::Subtree(node) => node.contains(value),
            Slot::Bucket(tokens) => tokens.binary_search(value).is_ok(),
        }
    }

    pub(super) fn count(&self) -> usize {
        match self {
            Slot::Subtree(node) => node.len(),
            Slot::Bucket(tokens) => tokens.len(),
        }
    }
}

pub(super) fn bucket_insert<T: Ord>(tokens: &mut Vec<T>, value: T) {
    let pos = tokens.partition_point(|t| t < &value);
    tokens.insert(pos, value);
}

pub(super) fn bucket_remove<T: Ord>(tokens: &mut Vec<T>, value: &T) -> bool {
    match tokens.binary_search(value) {
        Ok(pos) => {
            tokens.remove(pos);
            true
        }
        Err(_) => false,
    }
}
