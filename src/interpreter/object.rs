use super::errors::{RuntimeError, RuntimeResult};
use super::function::MonkeyFn;
use super::native_funcs::NativeFn;
use crate::frontend::operator::{InfixOperator, PrefixOperator};

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    Array(Rc<Vec<Object>>),
    Hash(Rc<HashMap<HashKey, Object>>),
    Function(MonkeyFn),
    NativeFunc(NativeFn),
}

/// The hashable subset of `Object`, usable as a hash literal key.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::NativeFunc(_) => "BUILTIN",
        }
    }

    /// Everything is truthy except boolean false and null.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    pub fn hash_key(&self) -> RuntimeResult<HashKey> {
        match self {
            Object::Integer(n) => Ok(HashKey::Integer(*n)),
            Object::Boolean(b) => Ok(HashKey::Boolean(*b)),
            Object::String(s) => Ok(HashKey::String(s.clone())),
            other => Err(RuntimeError::UnusableHashKey(other.clone())),
        }
    }

    pub fn apply_infix_op(op: InfixOperator, lhs: Object, rhs: Object) -> RuntimeResult<Object> {
        match (lhs, rhs) {
            (Object::Integer(a), Object::Integer(b)) => integer_binop(op, a, b),
            (Object::String(a), Object::String(b)) => string_binop(op, a, b),
            (lhs, rhs) => {
                // `==`/`!=` on the boolean and null singletons compares by
                // value; everything else unhandled so far is an error.
                let comparable = matches!(
                    (&lhs, &rhs),
                    (Object::Boolean(_), Object::Boolean(_)) | (Object::Null, Object::Null)
                );
                match op {
                    InfixOperator::EqualTo if comparable => Ok(Object::Boolean(lhs == rhs)),
                    InfixOperator::NotEqualTo if comparable => Ok(Object::Boolean(lhs != rhs)),
                    _ if lhs.type_name() != rhs.type_name() => {
                        Err(RuntimeError::TypeMismatch(op, lhs, rhs))
                    }
                    _ => Err(RuntimeError::UnknownInfixOperator(op, lhs, rhs)),
                }
            }
        }
    }

    pub fn apply_prefix_op(op: PrefixOperator, value: Object) -> RuntimeResult<Object> {
        match op {
            PrefixOperator::Not => Ok(Object::Boolean(!value.is_truthy())),
            PrefixOperator::Negate => match value {
                Object::Integer(n) => Ok(Object::Integer(-n)),
                value => Err(RuntimeError::UnknownPrefixOperator(op, value)),
            },
        }
    }
}

fn integer_binop(op: InfixOperator, a: i64, b: i64) -> RuntimeResult<Object> {
    let object = match op {
        InfixOperator::Add => Object::Integer(a + b),
        InfixOperator::Subtract => Object::Integer(a - b),
        InfixOperator::Multiply => Object::Integer(a * b),
        InfixOperator::Divide => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Object::Integer(a / b)
        }
        InfixOperator::LessThan => Object::Boolean(a < b),
        InfixOperator::GreaterThan => Object::Boolean(a > b),
        InfixOperator::EqualTo => Object::Boolean(a == b),
        InfixOperator::NotEqualTo => Object::Boolean(a != b),
    };
    Ok(object)
}

fn string_binop(op: InfixOperator, a: String, b: String) -> RuntimeResult<Object> {
    match op {
        InfixOperator::Add => Ok(Object::String(a + &b)),
        _ => Err(RuntimeError::UnknownInfixOperator(
            op,
            Object::String(a),
            Object::String(b),
        )),
    }
}

impl HashKey {
    pub fn to_object(&self) -> Object {
        match self {
            HashKey::Integer(n) => Object::Integer(*n),
            HashKey::Boolean(b) => Object::Boolean(*b),
            HashKey::String(s) => Object::String(s.clone()),
        }
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_object())
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{}", n),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::String(s) => write!(f, "{}", s),
            Object::Null => write!(f, "null"),
            Object::Array(elements) => {
                let elements: Vec<_> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Object::Hash(pairs) => {
                let pairs: Vec<_> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Object::Function(function) => write!(f, "{}", function),
            Object::NativeFunc(_) => write!(f, "builtin function"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Object::Integer(0).is_truthy());
        assert!(Object::String(String::new()).is_truthy());
        assert!(Object::Boolean(true).is_truthy());
        assert!(!Object::Boolean(false).is_truthy());
        assert!(!Object::Null.is_truthy());
    }

    #[test]
    fn test_integer_operators() {
        assert_eq!(
            Object::apply_infix_op(InfixOperator::Add, Object::Integer(2), Object::Integer(3)),
            Ok(Object::Integer(5))
        );
        assert_eq!(
            Object::apply_infix_op(
                InfixOperator::Divide,
                Object::Integer(7),
                Object::Integer(2)
            ),
            Ok(Object::Integer(3))
        );
        assert_eq!(
            Object::apply_infix_op(
                InfixOperator::Divide,
                Object::Integer(7),
                Object::Integer(0)
            ),
            Err(RuntimeError::DivisionByZero)
        );
        assert_eq!(
            Object::apply_infix_op(
                InfixOperator::LessThan,
                Object::Integer(1),
                Object::Integer(2)
            ),
            Ok(Object::Boolean(true))
        );
    }

    #[test]
    fn test_mixed_operand_errors() {
        let err = Object::apply_infix_op(InfixOperator::Add, Object::Integer(5), Object::Boolean(true))
            .unwrap_err();
        assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");

        let err = Object::apply_infix_op(
            InfixOperator::Subtract,
            Object::String("a".to_owned()),
            Object::String("b".to_owned()),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown operator: STRING - STRING");

        let err =
            Object::apply_prefix_op(PrefixOperator::Negate, Object::Boolean(true)).unwrap_err();
        assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
    }

    #[test]
    fn test_singleton_equality() {
        assert_eq!(
            Object::apply_infix_op(InfixOperator::EqualTo, Object::Null, Object::Null),
            Ok(Object::Boolean(true))
        );
        assert_eq!(
            Object::apply_infix_op(
                InfixOperator::NotEqualTo,
                Object::Boolean(true),
                Object::Boolean(false)
            ),
            Ok(Object::Boolean(true))
        );
    }

    #[test]
    fn test_hash_keys() {
        assert_eq!(
            Object::Integer(5).hash_key(),
            Ok(HashKey::Integer(5))
        );
        assert_eq!(
            Object::String("a".to_owned()).hash_key(),
            Ok(HashKey::String("a".to_owned()))
        );
        let err = Object::Null.hash_key().unwrap_err();
        assert_eq!(err.to_string(), "unusable as hash key: NULL");
    }

    #[test]
    fn test_display_forms() {
        let array = Object::Array(Rc::new(vec![
            Object::Integer(1),
            Object::String("two".to_owned()),
            Object::Boolean(true),
        ]));
        assert_eq!(array.to_string(), "[1, two, true]");
        assert_eq!(Object::Null.to_string(), "null");
    }
}
