use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing {kind}")]
    Empty { kind: &'static str },
    #[error("unrecognized {kind} '{value}'")]
    Unrecognized { kind: &'static str, value: String },
}
