use super::errors::{RuntimeError, RuntimeResult};
use super::object::Object;

use std::fmt;
use std::io::Write;
use std::rc::Rc;

type NativeFnPtr = fn(Vec<Object>, &mut dyn Write) -> RuntimeResult<Object>;

/// A built-in function. Builtins validate their own argument counts and
/// types and surface problems as runtime errors.
#[derive(Clone, Copy)]
pub struct NativeFn {
    pub name: &'static str,
    func: NativeFnPtr,
}

impl NativeFn {
    pub fn execute(&self, args: Vec<Object>, output: &mut dyn Write) -> RuntimeResult<Object> {
        (self.func)(args, output)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<native-func {}>", self.name)
    }
}

impl PartialEq<NativeFn> for NativeFn {
    // You cannot derive Eq for function pointers in Rust. Also, LLVM
    // can combine two different functions into one that have identical
    // bodies. Safest option is to compare by name for native funcs.
    fn eq(&self, other: &NativeFn) -> bool {
        self.name == other.name
    }
}

impl Eq for NativeFn {}

/// Looks a builtin up by name. Consulted only after the environment chain
/// misses, so `let` bindings shadow builtins.
pub fn lookup(name: &str) -> Option<NativeFn> {
    let native = match name {
        "len" => NativeFn {
            name: "len",
            func: native_len,
        },
        "first" => NativeFn {
            name: "first",
            func: native_first,
        },
        "last" => NativeFn {
            name: "last",
            func: native_last,
        },
        "rest" => NativeFn {
            name: "rest",
            func: native_rest,
        },
        "push" => NativeFn {
            name: "push",
            func: native_push,
        },
        "puts" => NativeFn {
            name: "puts",
            func: native_puts,
        },
        _ => return None,
    };
    Some(native)
}

fn native_len(args: Vec<Object>, _output: &mut dyn Write) -> RuntimeResult<Object> {
    match args.as_slice() {
        [Object::String(s)] => Ok(Object::Integer(s.chars().count() as i64)),
        [Object::Array(elements)] => Ok(Object::Integer(elements.len() as i64)),
        [other] => Err(RuntimeError::UnsupportedArgument("len", other.clone())),
        _ => Err(RuntimeError::WrongNumberOfArguments {
            want: 1,
            got: args.len(),
        }),
    }
}

fn native_first(args: Vec<Object>, _output: &mut dyn Write) -> RuntimeResult<Object> {
    match args.as_slice() {
        [Object::Array(elements)] => Ok(elements.first().cloned().unwrap_or(Object::Null)),
        [other] => Err(RuntimeError::ArgumentNotArray("first", other.clone())),
        _ => Err(RuntimeError::WrongNumberOfArguments {
            want: 1,
            got: args.len(),
        }),
    }
}

fn native_last(args: Vec<Object>, _output: &mut dyn Write) -> RuntimeResult<Object> {
    match args.as_slice() {
        [Object::Array(elements)] => Ok(elements.last().cloned().unwrap_or(Object::Null)),
        [other] => Err(RuntimeError::ArgumentNotArray("last", other.clone())),
        _ => Err(RuntimeError::WrongNumberOfArguments {
            want: 1,
            got: args.len(),
        }),
    }
}

fn native_rest(args: Vec<Object>, _output: &mut dyn Write) -> RuntimeResult<Object> {
    match args.as_slice() {
        // All but the first element; an empty array yields an empty array.
        [Object::Array(elements)] => {
            let rest: Vec<_> = elements.iter().skip(1).cloned().collect();
            Ok(Object::Array(Rc::new(rest)))
        }
        [other] => Err(RuntimeError::ArgumentNotArray("rest", other.clone())),
        _ => Err(RuntimeError::WrongNumberOfArguments {
            want: 1,
            got: args.len(),
        }),
    }
}

fn native_push(args: Vec<Object>, _output: &mut dyn Write) -> RuntimeResult<Object> {
    match args.as_slice() {
        // Copy-on-write: the appended-to array is a fresh value, so aliases
        // of the original never observe the push.
        [Object::Array(elements), value] => {
            let mut pushed = elements.as_ref().clone();
            pushed.push(value.clone());
            Ok(Object::Array(Rc::new(pushed)))
        }
        [other, _] => Err(RuntimeError::ArgumentNotArray("push", other.clone())),
        _ => Err(RuntimeError::WrongNumberOfArguments {
            want: 2,
            got: args.len(),
        }),
    }
}

fn native_puts(args: Vec<Object>, output: &mut dyn Write) -> RuntimeResult<Object> {
    for arg in &args {
        // The output sink is REPL/test plumbing; a failed write has no
        // language-level meaning.
        let _ = writeln!(output, "{}", arg);
    }
    Ok(Object::Null)
}
