use super::object::Object;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A chained name-to-value scope. Cloning an `Environment` clones the
/// handle, not the bindings, so every closure capturing a scope sees the
/// same storage.
#[derive(Clone)]
pub struct Environment {
    env_ptr: Rc<RefCell<EnvironmentData>>,
}

struct EnvironmentData {
    values: HashMap<String, Object>,
    enclosing: Option<Environment>,
}

impl Environment {
    /// Fresh top-level scope with no outer environment.
    pub fn new() -> Self {
        let env_data = EnvironmentData {
            values: HashMap::new(),
            enclosing: None,
        };
        Environment {
            env_ptr: Rc::new(RefCell::new(env_data)),
        }
    }

    /// Fresh scope chained to an enclosing one. The outer environment is
    /// shared, never copied.
    pub fn with_enclosing(env: &Environment) -> Self {
        let env_data = EnvironmentData {
            values: HashMap::new(),
            enclosing: Some(env.clone()),
        };
        Environment {
            env_ptr: Rc::new(RefCell::new(env_data)),
        }
    }

    pub fn define(&self, name: String, value: Object) {
        self.env_ptr.borrow_mut().values.insert(name, value);
    }

    /// Looks the name up in this scope, then walks outward.
    pub fn get(&self, name: &str) -> Option<Object> {
        let data = self.env_ptr.borrow();
        match data.values.get(name) {
            Some(object) => Some(object.clone()),
            None => data.enclosing.as_ref().and_then(|outer| outer.get(name)),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
