//! Indentation unit for emitted source.

const SPACES: &str = "        ";

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces, the Prettier default for JavaScript and JSX.
    pub const JS: Self = Self("  ");

    pub const TAB: Self = Self("\t");

    /// `width` spaces, between one and eight.
    pub fn spaces(width: usize) -> Self {
        Self(&SPACES[..width.clamp(1, SPACES.len())])
    }

    /// Text of a single level.
    pub fn unit(self) -> &'static str {
        self.0
    }

    /// Leading whitespace for a line at `level`.
    pub fn prefix(self, level: usize) -> String {
        self.0.repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(Indent::JS.unit(), "  ");
        assert_eq!(Indent::spaces(4).unit(), "    ");
        assert_eq!(Indent::spaces(0).unit(), " ");
        assert_eq!(Indent::spaces(20).unit().len(), 8);
        assert_eq!(Indent::TAB.prefix(2), "\t\t");
    }

    #[test]
    fn test_prefix() {
        assert_eq!(Indent::JS.prefix(0), "");
        assert_eq!(Indent::JS.prefix(3), "      ");
    }
}
