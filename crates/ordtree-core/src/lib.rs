pub mod error;
pub mod config;

pub mod tree;
pub mod session;

pub use error::{Error, Result};
pub use config::{TreeConfig, MAX_DEGREE, MIN_DEGREE};
pub use tree::{Iter, OrderedTree, Rebalance, Slot};
pub use session::{Notice, Session};
