use super::token::TokenType;

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParserError {
    UnexpectedToken { expected: TokenType, got: TokenType },
    NoPrefixParseFn(TokenType),
}

pub type ParserResult<T> = Result<T, ParserError>;

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParserError::UnexpectedToken { expected, got } => {
                write!(
                    f,
                    "expected next token to be {}, got {} instead",
                    expected, got
                )
            }
            ParserError::NoPrefixParseFn(token_type) => {
                write!(f, "no prefix parse function for {} found", token_type)
            }
        }
    }
}
