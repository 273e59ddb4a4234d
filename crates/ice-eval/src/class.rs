//! Classes and instances.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::callable::Function;
use crate::value::Value;

/// A class: name, member table and optional superclass.
///
/// The member table maps method names to user functions, including a
/// declared `__init__` and the synthetic `get_<p>` / `set_<p>` accessor
/// entries expanded from property declarations.
pub struct Class {
    name: String,
    methods: IndexMap<String, Rc<Function>>,
    superclass: Option<Rc<Class>>,
}

impl Class {
    pub fn new(
        name: String,
        methods: IndexMap<String, Rc<Function>>,
        superclass: Option<Rc<Class>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            name,
            methods,
            superclass,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass(&self) -> Option<&Rc<Class>> {
        self.superclass.as_ref()
    }

    /// Looks `name` up in this class, then along the superclass chain.
    /// The first match wins.
    pub fn find_method(&self, name: &str) -> Option<Rc<Function>> {
        if let Some(method) = self.methods.get(name) {
            return Some(Rc::clone(method));
        }
        self.superclass.as_ref().and_then(|s| s.find_method(name))
    }

    /// Identity walk over the superclass chain; a class is a subclass of
    /// itself.
    pub fn is_subclass_of(self: &Rc<Self>, other: &Rc<Class>) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if Rc::ptr_eq(class, other) {
                return true;
            }
            current = class.superclass.as_ref();
        }
        false
    }

    /// Constructor arity: `__init__`'s parameter count if declared (or
    /// inherited), else 0.
    pub fn arity(&self) -> usize {
        self.find_method("__init__").map_or(0, |init| init.arity())
    }

    /// Stamps every own method with this class as its owner.
    pub(crate) fn stamp_owner(self: &Rc<Self>) {
        for method in self.methods.values() {
            method.set_owner(self);
        }
    }
}

/// An instance: a class reference plus a mutable field map.
pub struct Instance {
    class: Rc<Class>,
    fields: RefCell<FxHashMap<String, Value>>,
}

impl Instance {
    pub fn new(class: Rc<Class>) -> Rc<Self> {
        Rc::new(Self {
            class,
            fields: RefCell::new(FxHashMap::default()),
        })
    }

    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Reads a stored field, if present.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    /// Stores a field, creating or overwriting it.
    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        self.fields.borrow_mut().insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;
    use ice_par::Block;

    fn method(name: &str) -> Rc<Function> {
        Function::from_parts(
            name,
            Vec::new(),
            Block {
                statements: Vec::new(),
            },
            Environment::global(),
        )
    }

    fn class_with(name: &str, methods: &[&str], superclass: Option<Rc<Class>>) -> Rc<Class> {
        let mut table = IndexMap::new();
        for m in methods {
            table.insert(m.to_string(), method(m));
        }
        let class = Class::new(name.to_string(), table, superclass);
        class.stamp_owner();
        class
    }

    #[test]
    fn test_find_method_own_table_first() {
        let base = class_with("A", &["f"], None);
        let derived = class_with("B", &["f"], Some(Rc::clone(&base)));

        let from_derived = derived.find_method("f").unwrap();
        let from_base = base.find_method("f").unwrap();
        assert!(!Rc::ptr_eq(&from_derived, &from_base));
    }

    #[test]
    fn test_find_method_walks_chain() {
        let base = class_with("A", &["hanya_di_a"], None);
        let derived = class_with("B", &[], Some(Rc::clone(&base)));
        assert!(derived.find_method("hanya_di_a").is_some());
        assert!(derived.find_method("tidak_ada").is_none());
    }

    #[test]
    fn test_is_subclass_of() {
        let a = class_with("A", &[], None);
        let b = class_with("B", &[], Some(Rc::clone(&a)));
        let c = class_with("C", &[], Some(Rc::clone(&b)));
        let other = class_with("Lain", &[], None);

        assert!(a.is_subclass_of(&a));
        assert!(c.is_subclass_of(&a));
        assert!(c.is_subclass_of(&b));
        assert!(!a.is_subclass_of(&c));
        assert!(!c.is_subclass_of(&other));
    }

    #[test]
    fn test_arity_uses_inherited_init() {
        let init = Function::from_parts(
            "__init__",
            vec!["x".to_string(), "y".to_string()],
            Block {
                statements: Vec::new(),
            },
            Environment::global(),
        );
        let mut table = IndexMap::new();
        table.insert("__init__".to_string(), init);
        let base = Class::new("A".to_string(), table, None);
        let derived = class_with("B", &[], Some(Rc::clone(&base)));

        assert_eq!(base.arity(), 2);
        assert_eq!(derived.arity(), 2);
    }

    #[test]
    fn test_instance_fields() {
        let class = class_with("K", &[], None);
        let instance = Instance::new(class);
        assert!(instance.field("x").is_none());
        instance.set_field("x", Value::Int(1));
        assert!(instance.field("x").unwrap().ice_eq(&Value::Int(1)));
    }

    #[test]
    fn test_stamp_owner_reaches_methods() {
        let class = class_with("K", &["m"], None);
        let m = class.find_method("m").unwrap();
        assert!(Rc::ptr_eq(&m.owner().unwrap(), &class));
    }
}
