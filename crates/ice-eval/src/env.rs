//! Lexically-scoped environments.

use std::cell::RefCell;
use std::rc::Rc;

use ice_util::RuntimeError;
use rustc_hash::FxHashMap;

use crate::value::Value;

/// One scope: a name→value table plus an optional enclosing scope.
///
/// Environments are shared (`Rc`): a closure keeps its captured scope alive
/// for as long as the closure itself lives. Scopes never form cycles, so
/// plain reference counting suffices.
pub struct Environment {
    values: RefCell<FxHashMap<String, Value>>,
    enclosing: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a root scope.
    pub fn global() -> Rc<Self> {
        Rc::new(Self {
            values: RefCell::new(FxHashMap::default()),
            enclosing: None,
        })
    }

    /// Creates a child scope of `enclosing`.
    pub fn with_enclosing(enclosing: &Rc<Environment>) -> Rc<Self> {
        Rc::new(Self {
            values: RefCell::new(FxHashMap::default()),
            enclosing: Some(Rc::clone(enclosing)),
        })
    }

    /// Creates a binding in this scope, shadowing any outer binding.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.values.borrow_mut().insert(name.into(), value);
    }

    /// Returns true if this scope itself (not an enclosing one) binds `name`.
    pub fn has_local(&self, name: &str) -> bool {
        self.values.borrow().contains_key(name)
    }

    /// Rebinds the nearest enclosing binding of `name`.
    ///
    /// Assignment never creates a binding; a missing name is a runtime
    /// error.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), RuntimeError> {
        let mut env = self;
        loop {
            if env.values.borrow().contains_key(name) {
                env.values.borrow_mut().insert(name.to_string(), value);
                return Ok(());
            }
            match &env.enclosing {
                Some(enclosing) => env = enclosing,
                None => return Err(undefined(name)),
            }
        }
    }

    /// Reads the nearest binding of `name`, or fails.
    pub fn get(&self, name: &str) -> Result<Value, RuntimeError> {
        self.lookup(name).ok_or_else(|| undefined(name))
    }

    /// Reads the nearest binding of `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut env = self;
        loop {
            if let Some(value) = env.values.borrow().get(name) {
                return Some(value.clone());
            }
            match &env.enclosing {
                Some(enclosing) => env = enclosing,
                None => return None,
            }
        }
    }
}

fn undefined(name: &str) -> RuntimeError {
    RuntimeError::new(format!("Variabel tidak didefinisikan: {name}"))
}
