//! Line-level pieces of generated source.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) lays
//! them out at the right depth. Fragments never carry indentation
//! themselves, so the same node renders correctly inside a component body
//! or at module level.

/// A piece of generated source.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line; an empty line is emitted without indentation.
    Line(String),
    Blank,
    /// An opening line, a body one level deeper, and an optional closing line,
    /// e.g. `const load = () => {` … `};` or `<TableRow>` … `</TableRow>`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments one level deeper without their own header.
    Indent(Vec<CodeFragment>),
    /// A `//` comment line.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: impl Into<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// A syntax node that can be laid out as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
