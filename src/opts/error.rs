use thiserror::Error;

/// Reasons a command line is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An option taking an argument was last, or followed by another option
    #[error("option '{option}' requires an argument{}", describe_next(.followed_by))]
    MissingArgument {
        option: String,
        followed_by: Option<String>,
    },

    /// A token matched no registered option
    #[error("unrecognized option '{token}'")]
    UnknownOption { token: String },

    /// A token is not valid UTF-8; `token` holds its lossy rendering
    #[error("option '{token}' is not valid UTF-8")]
    InvalidEncoding { token: String },
}

/// A name that is not the table name of any option
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option name: {0}")]
pub struct UnknownOptionName(pub String);

impl ParseError {
    /// The command line token the error is about
    pub fn token(&self) -> &str {
        match self {
            ParseError::MissingArgument { option, .. } => option,
            ParseError::UnknownOption { token } => token,
            ParseError::InvalidEncoding { token } => token,
        }
    }
}

fn describe_next(next: &Option<String>) -> String {
    match next {
        Some(next) => format!(" but was followed by option '{next}'"),
        None => " but none was given".to_string(),
    }
}
