use miette::Diagnostic;
use thiserror::Error;

/// The included sections do not form a closed program.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompositionError {
    #[error("section '{section}' references '{symbol}', which nothing included declares")]
    #[diagnostic(
        code(pagegen::dangling_reference),
        help("the section that declares '{symbol}' was skipped for these options")
    )]
    DanglingReference {
        section: &'static str,
        symbol: String,
    },

    #[error("'{symbol}' is declared by both '{first}' and '{second}'")]
    #[diagnostic(code(pagegen::duplicate_declaration))]
    DuplicateDeclaration {
        symbol: String,
        first: String,
        second: String,
    },
}
