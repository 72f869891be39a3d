// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Utils to build IOS configuration documents

use std::fmt::Display;
use std::ops::AddAssign;

/// Line delimiting blocks and sections in an IOS configuration
pub const MARKER: &str = "!";

#[derive(Debug, Default)]
/// Object to ease building IOS configs. Lines are kept as they are added:
/// consecutive markers are significant and are never merged.
pub struct ConfigBuilder {
    lines: Vec<String>,
}

/// Impl Display for [`ConfigBuilder`]. This provides to_string().
impl Display for ConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in &self.lines {
            writeln!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Main operations on a [`ConfigBuilder`]
impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    fn append(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
    fn merge(&mut self, other: &mut Self) {
        self.lines.append(&mut other.lines);
    }
}

/// Make it very easy to add config lines to a [`ConfigBuilder`]
impl AddAssign<Self> for ConfigBuilder {
    fn add_assign(&mut self, mut rhs: Self) {
        self.merge(&mut rhs);
    }
}
impl AddAssign<String> for ConfigBuilder {
    fn add_assign(&mut self, rhs: String) {
        self.append(&rhs);
    }
}
impl AddAssign<&str> for ConfigBuilder {
    fn add_assign(&mut self, rhs: &str) {
        self.append(rhs);
    }
}

/// Main trait to build IOS configs
pub(crate) trait Render {
    type Context; /* context passed to renderer */
    type Output; /* type of output produced */
    fn render(&self, ctx: &Self::Context) -> Self::Output;
}

/// Keyword form of model values
pub(crate) trait Rendered {
    fn rendered(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markers_are_kept() {
        let mut config = ConfigBuilder::new();
        config += MARKER;
        config += MARKER;
        config += "hostname R1".to_string();
        let mut section = ConfigBuilder::new();
        section += MARKER;
        config += section;
        assert_eq!(config.lines().len(), 4);
        assert_eq!(config.to_string(), "!\n!\nhostname R1\n!\n");
    }

    #[test]
    fn test_empty_builder() {
        let config = ConfigBuilder::new();
        assert!(config.is_empty());
        assert_eq!(config.to_string(), "");
    }
}
