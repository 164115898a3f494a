use thiserror::Error;

/// Error raised while validating inputs or reading textual expressions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KmapError {
    /// A minterm or don't-care value is outside the range of a four-variable map
    #[error("The value {0} is outside the range 0-15")]
    InvalidRange(i64),

    /// A value is used both as a minterm and as a don't-care term
    #[error("The value {0} is both a minterm and a don't-care term")]
    OverlappingSets(u8),

    /// No minterm was provided
    #[error("Minterm list cannot be empty")]
    EmptyMintermSet,

    /// The expression is invalid
    #[error("Not a valid expression")]
    InvalidExpression,

    /// The name can not be used as an identifier
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error in the textual representation of a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token could not be interpreted as the expected kind of value
    #[error("Could not parse '{0}' as {1}")]
    SimpleParseError(String, &'static str),

    /// The same variable appears several times in a product term
    #[error("Variable {0} is repeated in the term '{1}'")]
    RepeatedVariable(char, String),
}
