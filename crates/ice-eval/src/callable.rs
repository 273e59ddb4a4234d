//! User-declared functions.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ice_par::{Block, FunctionDecl};

use crate::class::{Class, Instance};
use crate::env::Environment;
use crate::value::Value;

/// A user function: declared parameters, body, and the environment captured
/// at declaration time.
///
/// Methods additionally carry their owning class, stamped when the class
/// declaration is evaluated. The owner link is weak so the
/// class → method → class loop cannot leak.
pub struct Function {
    name: String,
    params: Vec<String>,
    body: Rc<Block>,
    closure: Rc<Environment>,
    owner: RefCell<Option<Weak<Class>>>,
}

impl Function {
    /// Creates a function from its declaration, capturing `closure`.
    pub fn new(decl: &FunctionDecl, closure: Rc<Environment>) -> Rc<Self> {
        Self::from_parts(decl.name.clone(), decl.params.clone(), decl.body.clone(), closure)
    }

    /// Creates a function from loose parts (used for the synthetic
    /// `get_<p>` / `set_<p>` accessor methods).
    pub fn from_parts(
        name: impl Into<String>,
        params: Vec<String>,
        body: Block,
        closure: Rc<Environment>,
    ) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            params,
            body: Rc::new(body),
            closure,
            owner: RefCell::new(None),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter count.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub(crate) fn params(&self) -> &[String] {
        &self.params
    }

    pub(crate) fn body(&self) -> &Block {
        &self.body
    }

    pub(crate) fn closure(&self) -> &Rc<Environment> {
        &self.closure
    }

    /// Stamps the owning class. Called once per method right after the
    /// class object is constructed.
    pub(crate) fn set_owner(&self, class: &Rc<Class>) {
        *self.owner.borrow_mut() = Some(Rc::downgrade(class));
    }

    /// The owning class, if this function is a method of a live class.
    pub fn owner(&self) -> Option<Rc<Class>> {
        self.owner.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Returns a copy of this function whose closure defines `ini` as the
    /// given instance (and `__class__` as the owning class, when present),
    /// so that method bodies resolve both names lexically.
    pub fn bind(&self, instance: &Rc<Instance>) -> Rc<Function> {
        let env = Environment::with_enclosing(&self.closure);
        env.define("ini", Value::Instance(Rc::clone(instance)));
        if let Some(owner) = self.owner() {
            env.define("__class__", Value::Class(owner));
        }
        Rc::new(Function {
            name: self.name.clone(),
            params: self.params.clone(),
            body: Rc::clone(&self.body),
            closure: env,
            owner: RefCell::new(self.owner.borrow().clone()),
        })
    }
}
