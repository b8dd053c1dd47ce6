pub mod ast;
mod cursor;
pub mod errors;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::Parser;
