//! Input validation limits for identifiers

/// Maximum length for a canonical artist id (256 chars)
pub const MAX_IDENTIFIER_LEN: usize = 256;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyIdentifier,
    IdentifierTooLong { len: usize, max: usize },
    InvalidCharacter { ch: char, position: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyIdentifier => write!(f, "Identifier cannot be empty"),
            Self::IdentifierTooLong { len, max } => {
                write!(f, "Identifier too long: {} chars (max {})", len, max)
            }
            Self::InvalidCharacter { ch, position } => {
                write!(f, "Invalid character {:?} at position {}", ch, position)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Characters allowed in a canonical id
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

/// Validate a canonical artist id
pub fn validate_identifier(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }
    let len = id.chars().count();
    if len > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::IdentifierTooLong {
            len,
            max: MAX_IDENTIFIER_LEN,
        });
    }
    if let Some((position, ch)) = id.chars().enumerate().find(|(_, c)| !is_identifier_char(*c)) {
        return Err(ValidationError::InvalidCharacter { ch, position });
    }
    Ok(())
}
