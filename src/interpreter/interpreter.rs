use super::environment::Environment;
use super::errors::{RuntimeError, RuntimeResult};
use super::function::MonkeyFn;
use super::native_funcs;
use super::object::Object;
use crate::frontend::ast::{Block, Expr, Program, Stmt};

use std::collections::HashMap;
use std::io::{self, Write};
use std::mem;
use std::rc::Rc;

/// Tree-walking evaluator. Output from `puts` goes to the sink `W`, which
/// defaults to stdout; tests substitute a buffer.
pub struct Interpreter<W: Write = io::Stdout> {
    env: Environment,
    output: W,
}

impl Interpreter<io::Stdout> {
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
            output: io::stdout(),
        }
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl<W: Write> Interpreter<W> {
    pub fn new_with_output(output: W) -> Self {
        Interpreter {
            env: Environment::new(),
            output,
        }
    }

    pub(super) fn swap_env(&mut self, env: Environment) -> Environment {
        mem::replace(&mut self.env, env)
    }

    /// Evaluates a program in the interpreter's persistent environment and
    /// yields the value of its last statement. A top-level `return` stops
    /// evaluation and yields the returned value.
    pub fn eval_program(&mut self, program: &Program) -> RuntimeResult<Object> {
        match self.eval_statements(&program.statements) {
            Err(RuntimeError::Return(object)) => Ok(object),
            other => other,
        }
    }

    /// Evaluates a block in the current environment. `return` propagates
    /// out as an error; the caller decides where it stops.
    pub(super) fn eval_block(&mut self, block: &Block) -> RuntimeResult<Object> {
        self.eval_statements(&block.statements)
    }

    /// Evaluates a block in a fresh scope chained to the current one, so
    /// `let` bindings inside an `if` arm do not leak out.
    fn eval_block_scoped(&mut self, block: &Block) -> RuntimeResult<Object> {
        let env = Environment::with_enclosing(&self.env);
        let prev_env = self.swap_env(env);
        let result = self.eval_block(block);
        self.swap_env(prev_env);
        result
    }

    fn eval_statements(&mut self, statements: &[Stmt]) -> RuntimeResult<Object> {
        let mut result = Object::Null;
        for stmt in statements {
            result = self.eval_statement(stmt)?;
        }
        Ok(result)
    }

    fn eval_statement(&mut self, stmt: &Stmt) -> RuntimeResult<Object> {
        match stmt {
            Stmt::Let(name, expr) => {
                let value = self.eval_expression(expr)?;
                self.env.define(name.clone(), value);
                Ok(Object::Null)
            }
            Stmt::Return(expr) => {
                let value = match expr {
                    Some(expr) => self.eval_expression(expr)?,
                    None => Object::Null,
                };
                Err(RuntimeError::Return(value))
            }
            Stmt::Expression(expr) => self.eval_expression(expr),
        }
    }

    fn eval_expression(&mut self, expr: &Expr) -> RuntimeResult<Object> {
        match expr {
            Expr::Identifier(name) => self.lookup_identifier(name),
            Expr::Integer(n) => Ok(Object::Integer(*n)),
            Expr::Str(s) => Ok(Object::String(s.clone())),
            Expr::Boolean(b) => Ok(Object::Boolean(*b)),
            Expr::Prefix(op, operand) => {
                let value = self.eval_expression(operand)?;
                Object::apply_prefix_op(*op, value)
            }
            Expr::Infix(op, lhs, rhs) => {
                let lhs = self.eval_expression(lhs)?;
                let rhs = self.eval_expression(rhs)?;
                Object::apply_infix_op(*op, lhs, rhs)
            }
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition)?;
                if condition.is_truthy() {
                    self.eval_block_scoped(consequence)
                } else {
                    match alternative {
                        Some(block) => self.eval_block_scoped(block),
                        None => Ok(Object::Null),
                    }
                }
            }
            Expr::Function { parameters, body } => {
                let function = MonkeyFn::new(parameters.clone(), body.clone(), self.env.clone());
                Ok(Object::Function(function))
            }
            Expr::Call { callee, arguments } => {
                let callee = self.eval_expression(callee)?;
                let mut args = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    args.push(self.eval_expression(arg)?);
                }
                self.eval_call(callee, args)
            }
            Expr::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expression(element)?);
                }
                Ok(Object::Array(Rc::new(values)))
            }
            Expr::Index(collection, index) => {
                let collection = self.eval_expression(collection)?;
                let index = self.eval_expression(index)?;
                eval_index_expression(collection, index)
            }
            Expr::Hash(pairs) => {
                let mut map = HashMap::with_capacity(pairs.len());
                for (key, value) in pairs {
                    let key = self.eval_expression(key)?.hash_key()?;
                    let value = self.eval_expression(value)?;
                    map.insert(key, value);
                }
                Ok(Object::Hash(Rc::new(map)))
            }
        }
    }

    fn lookup_identifier(&self, name: &str) -> RuntimeResult<Object> {
        if let Some(object) = self.env.get(name) {
            return Ok(object);
        }
        match native_funcs::lookup(name) {
            Some(native) => Ok(Object::NativeFunc(native)),
            None => Err(RuntimeError::IdentifierNotFound(name.to_owned())),
        }
    }

    fn eval_call(&mut self, callee: Object, args: Vec<Object>) -> RuntimeResult<Object> {
        match callee {
            Object::Function(function) => function.execute(args, self),
            Object::NativeFunc(native) => native.execute(args, &mut self.output),
            other => Err(RuntimeError::NotCallable(other)),
        }
    }
}

fn eval_index_expression(collection: Object, index: Object) -> RuntimeResult<Object> {
    match (collection, index) {
        // Out-of-range and negative indices yield null, not an error.
        (Object::Array(elements), Object::Integer(i)) => {
            let element = usize::try_from(i)
                .ok()
                .and_then(|i| elements.get(i).cloned());
            Ok(element.unwrap_or(Object::Null))
        }
        (Object::Hash(pairs), index) => {
            let key = index.hash_key()?;
            Ok(pairs.get(&key).cloned().unwrap_or(Object::Null))
        }
        (collection, _) => Err(RuntimeError::IndexNotSupported(collection)),
    }
}
