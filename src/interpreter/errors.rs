use super::object::Object;
use crate::frontend::operator::{InfixOperator, PrefixOperator};

use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum RuntimeError {
    /// Control-flow carrier for `return`: unwrapped at the nearest function
    /// call boundary (or the top of the program) and never observable as a
    /// final result. Every other variant is the language's error value.
    Return(Object),

    TypeMismatch(InfixOperator, Object, Object),
    UnknownInfixOperator(InfixOperator, Object, Object),
    UnknownPrefixOperator(PrefixOperator, Object),
    DivisionByZero,
    IdentifierNotFound(String),
    NotCallable(Object),
    WrongNumberOfArguments { want: usize, got: usize },
    IndexNotSupported(Object),
    UnusableHashKey(Object),
    UnsupportedArgument(&'static str, Object),
    ArgumentNotArray(&'static str, Object),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuntimeError::Return(object) => write!(f, "{}", object),
            RuntimeError::TypeMismatch(op, lhs, rhs) => {
                write!(
                    f,
                    "type mismatch: {} {} {}",
                    lhs.type_name(),
                    op.symbol(),
                    rhs.type_name()
                )
            }
            RuntimeError::UnknownInfixOperator(op, lhs, rhs) => {
                write!(
                    f,
                    "unknown operator: {} {} {}",
                    lhs.type_name(),
                    op.symbol(),
                    rhs.type_name()
                )
            }
            RuntimeError::UnknownPrefixOperator(op, operand) => {
                write!(f, "unknown operator: {}{}", op.symbol(), operand.type_name())
            }
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::IdentifierNotFound(name) => {
                write!(f, "identifier not found: {}", name)
            }
            RuntimeError::NotCallable(object) => {
                write!(f, "not a function: {}", object.type_name())
            }
            RuntimeError::WrongNumberOfArguments { want, got } => {
                write!(f, "wrong number of arguments. got={}, want={}", got, want)
            }
            RuntimeError::IndexNotSupported(object) => {
                write!(f, "index operator not supported: {}", object.type_name())
            }
            RuntimeError::UnusableHashKey(object) => {
                write!(f, "unusable as hash key: {}", object.type_name())
            }
            RuntimeError::UnsupportedArgument(builtin, argument) => {
                write!(
                    f,
                    "argument to `{}` not supported, got {}",
                    builtin,
                    argument.type_name()
                )
            }
            RuntimeError::ArgumentNotArray(builtin, argument) => {
                write!(
                    f,
                    "argument to `{}` must be ARRAY, got {}",
                    builtin,
                    argument.type_name()
                )
            }
        }
    }
}
