use crate::config::TreeConfig;
use crate::error::{Error, Result};
use crate::tree::OrderedTree;
use std::fmt;
use tracing::info;

/// User-facing outcome of a session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created { degree: usize },
    Inserted(String),
    Duplicate(String),
    Deleted(String),
    NotFound(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Created { degree } => write!(f, "Tree created with degree {}", degree),
            Notice::Inserted(value) => write!(f, "Value '{}' inserted", value),
            Notice::Duplicate(value) => write!(f, "Value '{}' already exists in the tree", value),
            Notice::Deleted(value) => write!(f, "Value '{}' deleted", value),
            Notice::NotFound(value) => write!(f, "Value '{}' does not exist in the tree", value),
        }
    }
}

/// Owns the one tree an interactive user works against and turns raw input
/// into tree calls.
#[derive(Debug, Default)]
pub struct Session {
    tree: Option<OrderedTree<String>>,
}

impl Session {
    pub fn new() -> Self {
        Session { tree: None }
    }

    pub fn tree(&self) -> Option<&OrderedTree<String>> {
        self.tree.as_ref()
    }

    /// Replaces any existing tree with an empty one of the given degree.
    pub fn create(&mut self, degree: &str) -> Result<Notice> {
        let config = TreeConfig::parse(degree)?;
        self.tree = Some(config.build());
        info!(degree = config.degree, "tree created");
        Ok(Notice::Created {
            degree: config.degree,
        })
    }

    pub fn insert(&mut self, value: &str) -> Result<Notice> {
        let (tree, value) = self.prepare(value)?;
        match tree.insert(value.clone()) {
            Ok(()) => Ok(Notice::Inserted(value)),
            Err(Error::DuplicateValue) => Ok(Notice::Duplicate(value)),
            Err(e) => Err(e),
        }
    }

    pub fn delete(&mut self, value: &str) -> Result<Notice> {
        let (tree, value) = self.prepare(value)?;
        match tree.delete(&value) {
            Ok(()) => Ok(Notice::Deleted(value)),
            Err(Error::ValueNotFound) => Ok(Notice::NotFound(value)),
            Err(e) => Err(e),
        }
    }

    pub fn view(&self) -> Result<String> {
        self.tree
            .as_ref()
            .map(OrderedTree::render)
            .ok_or(Error::NoTree)
    }

    fn prepare(&mut self, value: &str) -> Result<(&mut OrderedTree<String>, String)> {
        let tree = self.tree.as_mut().ok_or(Error::NoTree)?;
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::EmptyValue);
        }
        Ok((tree, value.to_string()))
    }
}
