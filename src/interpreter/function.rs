use super::environment::Environment;
use super::errors::{RuntimeError, RuntimeResult};
use super::interpreter::Interpreter;
use super::object::Object;
use crate::frontend::ast::Block;

use std::fmt;
use std::io::Write;
use std::rc::Rc;

struct FnData {
    parameters: Vec<String>,
    body: Block,
    closure: Environment,
}

/// A function value: parameter list, body, and the environment that was
/// active when the literal was evaluated. Cloning shares the data.
#[derive(Clone)]
pub struct MonkeyFn(Rc<FnData>);

impl MonkeyFn {
    pub fn new(parameters: Vec<String>, body: Block, closure: Environment) -> Self {
        let data = FnData {
            parameters,
            body,
            closure,
        };
        MonkeyFn(Rc::new(data))
    }

    pub fn execute<W: Write>(
        &self,
        args: Vec<Object>,
        interpreter: &mut Interpreter<W>,
    ) -> RuntimeResult<Object> {
        if args.len() != self.0.parameters.len() {
            return Err(RuntimeError::WrongNumberOfArguments {
                want: self.0.parameters.len(),
                got: args.len(),
            });
        }

        // A new scope chained to the defining environment, not the caller's.
        let env = Environment::with_enclosing(&self.0.closure);
        for (param, arg) in self.0.parameters.iter().zip(args.into_iter()) {
            env.define(param.clone(), arg);
        }

        let prev_env = interpreter.swap_env(env);
        let result = match interpreter.eval_block(&self.0.body) {
            // A `return` unwinds exactly to this boundary.
            Err(RuntimeError::Return(object)) => Ok(object),
            other => other,
        };
        interpreter.swap_env(prev_env);

        result
    }
}

impl fmt::Display for MonkeyFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "fn({}) {}",
            self.0.parameters.join(", "),
            self.0.body.render()
        )
    }
}

impl fmt::Debug for MonkeyFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<function fn({})>", self.0.parameters.join(", "))
    }
}

impl PartialEq<MonkeyFn> for MonkeyFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MonkeyFn {}
