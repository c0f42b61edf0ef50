use crate::error::{Error, Result};
use crate::tree::OrderedTree;

pub const MIN_DEGREE: usize = 3;
pub const MAX_DEGREE: usize = 10;

/// Construction parameters for an [`OrderedTree`].
///
/// The tree itself accepts any degree; this is the layer that keeps callers
/// inside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    pub degree: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig { degree: 4 }
    }
}

impl TreeConfig {
    pub fn new(degree: usize) -> Self {
        TreeConfig { degree }
    }

    /// Parses raw user input, e.g. the text of a degree prompt.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let degree = trimmed
            .parse::<usize>()
            .map_err(|_| Error::InvalidDegree(trimmed.to_string()))?;
        let config = TreeConfig::new(degree);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&self.degree) {
            return Err(Error::InvalidDegree(self.degree.to_string()));
        }
        Ok(())
    }

    pub fn build<T: Ord + Clone>(&self) -> OrderedTree<T> {
        OrderedTree::new(self.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TreeConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_degree_bounds() {
        assert!(TreeConfig::new(MIN_DEGREE).validate().is_ok());
        assert!(TreeConfig::new(MAX_DEGREE).validate().is_ok());
        assert_eq!(
            TreeConfig::new(2).validate(),
            Err(Error::InvalidDegree("2".to_string()))
        );
        assert!(TreeConfig::new(11).validate().is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(TreeConfig::parse(" 5 ").unwrap(), TreeConfig::new(5));
        assert_eq!(
            TreeConfig::parse("five"),
            Err(Error::InvalidDegree("five".to_string()))
        );
        assert!(TreeConfig::parse("-3").is_err());
        assert!(TreeConfig::parse("").is_err());
    }

    #[test]
    fn test_build() {
        let tree: OrderedTree<i32> = TreeConfig::new(7).build();
        assert_eq!(tree.degree(), 7);
        assert!(tree.is_empty());
    }
}
