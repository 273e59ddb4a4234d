//! The tree-walking evaluator.

use std::rc::Rc;

use ice_par::{
    BinaryOp, Block, ClassDecl, ClassMember, Expr, ForRangeStmt, LiteralValue, LogicalOp, Stmt,
    SuperGetExpr, UnaryExpr, UnaryOp,
};
use ice_util::RuntimeError;
use indexmap::IndexMap;

use crate::builtins::{range_from_values, Builtin};
use crate::callable::Function;
use crate::class::{Class, Instance};
use crate::env::Environment;
use crate::io::{PrintWriter, StdPrint};
use crate::value::Value;

/// Control-flow discriminator threaded through statement execution.
///
/// `Return` unwinds to the innermost active function call, where it is
/// converted back into a plain value; it never reaches the user.
pub(crate) enum Flow {
    Normal,
    Return(Value),
}

/// The evaluator: a root environment with the builtins installed, plus the
/// output writer.
///
/// One interpreter can run many programs in sequence against the same
/// globals, which is what the REPL does.
pub struct Interpreter {
    globals: Rc<Environment>,
    print: Box<dyn PrintWriter>,
}

impl Interpreter {
    /// Creates an interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print(Box::new(StdPrint))
    }

    /// Creates an interpreter with a custom output writer.
    pub fn with_print(print: Box<dyn PrintWriter>) -> Self {
        let globals = Environment::global();
        Builtin::install(&globals);
        Self { globals, print }
    }

    /// Runs a program in the global scope.
    pub fn interpret(&mut self, program: &[Stmt]) -> Result<(), RuntimeError> {
        let globals = Rc::clone(&self.globals);
        for stmt in program {
            match self.execute(stmt, &globals)? {
                Flow::Normal => {},
                Flow::Return(_) => {
                    return Err(RuntimeError::new("'kembalikan' di luar fungsi."));
                },
            }
        }
        Ok(())
    }

    pub(crate) fn print_line(&mut self, text: &str) {
        self.print.write_line(text);
    }

    // Statements

    fn execute(&mut self, stmt: &Stmt, env: &Rc<Environment>) -> Result<Flow, RuntimeError> {
        match stmt {
            Stmt::Expr(expr) => {
                self.evaluate(expr, env)?;
                Ok(Flow::Normal)
            },
            Stmt::VarDecl(decl) => {
                let value = match &decl.init {
                    Some(init) => self.evaluate(init, env)?,
                    None => Value::Nil,
                };
                env.define(decl.name.clone(), value);
                Ok(Flow::Normal)
            },
            Stmt::Block(block) => self.execute_block(block, Environment::with_enclosing(env)),
            Stmt::If(stmt) => {
                for branch in &stmt.branches {
                    if self.evaluate(&branch.condition, env)?.is_truthy() {
                        return self.execute_block(&branch.body, Environment::with_enclosing(env));
                    }
                }
                match &stmt.else_branch {
                    Some(body) => self.execute_block(body, Environment::with_enclosing(env)),
                    None => Ok(Flow::Normal),
                }
            },
            Stmt::While(stmt) => {
                while self.evaluate(&stmt.condition, env)?.is_truthy() {
                    if let Flow::Return(value) =
                        self.execute_block(&stmt.body, Environment::with_enclosing(env))?
                    {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            },
            Stmt::ForRange(stmt) => self.execute_for_range(stmt, env),
            Stmt::Return(value) => {
                let value = match value {
                    Some(expr) => self.evaluate(expr, env)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            },
            Stmt::Function(decl) => {
                let function = Function::new(decl, Rc::clone(env));
                env.define(decl.name.clone(), Value::Function(function));
                Ok(Flow::Normal)
            },
            Stmt::Class(decl) => {
                self.execute_class_decl(decl, env)?;
                Ok(Flow::Normal)
            },
        }
    }

    fn execute_block(&mut self, block: &Block, env: Rc<Environment>) -> Result<Flow, RuntimeError> {
        for stmt in &block.statements {
            if let Flow::Return(value) = self.execute(stmt, &env)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluates the range header, then drives the body once per element.
    ///
    /// The loop variable lives in the *current* scope: defined on the first
    /// iteration when absent, assigned otherwise, so it survives the loop.
    fn execute_for_range(
        &mut self,
        stmt: &ForRangeStmt,
        env: &Rc<Environment>,
    ) -> Result<Flow, RuntimeError> {
        let args = stmt
            .args
            .iter()
            .map(|arg| self.evaluate(arg, env))
            .collect::<Result<Vec<_>, _>>()?;
        let range = range_from_values(&args)?;

        let mut first = true;
        for element in range.iter() {
            if first && !env.has_local(&stmt.var) {
                env.define(stmt.var.clone(), Value::Int(element));
            } else {
                env.assign(&stmt.var, Value::Int(element))?;
            }
            first = false;

            if let Flow::Return(value) =
                self.execute_block(&stmt.body, Environment::with_enclosing(env))?
            {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Builds the class object: resolves the superclass, collects methods,
    /// expands properties into `get_<p>` / `set_<p>` entries, then stamps
    /// every method with its owning class.
    fn execute_class_decl(
        &mut self,
        decl: &ClassDecl,
        env: &Rc<Environment>,
    ) -> Result<(), RuntimeError> {
        let superclass = match &decl.superclass {
            Some(name) => match env.get(name)? {
                Value::Class(class) => Some(class),
                _ => return Err(RuntimeError::new("Superclass harus berupa kelas.")),
            },
            None => None,
        };

        let mut methods: IndexMap<String, Rc<Function>> = IndexMap::new();
        for member in &decl.members {
            match member {
                ClassMember::Method(decl) => {
                    methods.insert(decl.name.clone(), Function::new(decl, Rc::clone(env)));
                },
                ClassMember::Property(property) => {
                    if let Some(getter) = &property.getter {
                        let name = format!("get_{}", property.name);
                        let function =
                            Function::from_parts(&name, Vec::new(), getter.clone(), Rc::clone(env));
                        methods.insert(name, function);
                    }
                    if let Some(setter) = &property.setter {
                        let name = format!("set_{}", property.name);
                        let params: Vec<String> = setter.param.iter().cloned().collect();
                        let function = Function::from_parts(
                            &name,
                            params,
                            setter.body.clone(),
                            Rc::clone(env),
                        );
                        methods.insert(name, function);
                    }
                },
            }
        }

        let class = Class::new(decl.name.clone(), methods, superclass);
        class.stamp_owner();
        env.define(decl.name.clone(), Value::Class(class));
        Ok(())
    }

    // Expressions

    pub(crate) fn evaluate(
        &mut self,
        expr: &Expr,
        env: &Rc<Environment>,
    ) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(literal_value(literal)),
            Expr::Variable(name) => env.get(name),
            Expr::This => env.get("ini"),
            Expr::Grouping(inner) => self.evaluate(inner, env),
            Expr::Assign(assign) => {
                let value = self.evaluate(&assign.value, env)?;
                env.assign(&assign.name, value.clone())?;
                Ok(value)
            },
            Expr::Unary(unary) => self.eval_unary(unary, env),
            Expr::Binary(binary) => {
                let left = self.evaluate(&binary.left, env)?;
                let right = self.evaluate(&binary.right, env)?;
                eval_binary(binary.op, &left, &right)
            },
            Expr::Logical(logical) => {
                let left = self.evaluate(&logical.left, env)?;
                match logical.op {
                    LogicalOp::Or if left.is_truthy() => Ok(left),
                    LogicalOp::And if !left.is_truthy() => Ok(left),
                    _ => self.evaluate(&logical.right, env),
                }
            },
            Expr::Call(call) => {
                let callee = self.evaluate(&call.callee, env)?;
                let args = call
                    .args
                    .iter()
                    .map(|arg| self.evaluate(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call_value(&callee, args)
            },
            Expr::Get(get) => {
                let object = self.evaluate(&get.object, env)?;
                match object {
                    Value::Instance(instance) => self.instance_get(&instance, &get.name, env),
                    _ => Err(RuntimeError::new("Akses properti pada non-objek.")),
                }
            },
            Expr::Set(set) => {
                let object = self.evaluate(&set.object, env)?;
                let value = self.evaluate(&set.value, env)?;
                match object {
                    Value::Instance(instance) => {
                        self.instance_set(&instance, &set.name, value, env)
                    },
                    _ => Err(RuntimeError::new("Penetapan properti pada non-objek.")),
                }
            },
            Expr::New(new) => {
                let class = env.get(&new.class_name)?;
                let args = new
                    .args
                    .iter()
                    .map(|arg| self.evaluate(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                match class {
                    Value::Class(class) => self.call_class(&class, args),
                    _ => Err(RuntimeError::new(
                        "Target \"baru\" bukan kelas yang dapat diinstansiasi.",
                    )),
                }
            },
            Expr::SuperGet(super_get) => self.eval_super_get(super_get, env),
        }
    }

    fn eval_unary(
        &mut self,
        unary: &UnaryExpr,
        env: &Rc<Environment>,
    ) -> Result<Value, RuntimeError> {
        let right = self.evaluate(&unary.right, env)?;
        match unary.op {
            UnaryOp::Neg => match right {
                Value::Int(v) => v
                    .checked_neg()
                    .map(Value::Int)
                    .ok_or_else(overflow_error),
                Value::Float(v) => Ok(Value::Float(-v)),
                _ => Err(RuntimeError::new("unary '-' membutuhkan angka")),
            },
            UnaryOp::Not => Ok(Value::Bool(!right.is_truthy())),
        }
    }

    // Calls

    /// Invokes any callable value, enforcing arity when it is declared.
    pub(crate) fn call_value(
        &mut self,
        callee: &Value,
        args: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        match callee {
            Value::Builtin(builtin) => {
                check_arity(builtin.arity(), args.len())?;
                builtin.call(self, &args)
            },
            Value::Function(function) => {
                check_arity(Some(function.arity()), args.len())?;
                self.call_function(function, args)
            },
            Value::Class(class) => {
                check_arity(Some(class.arity()), args.len())?;
                self.call_class(class, args)
            },
            _ => Err(RuntimeError::new(
                "Objek tidak dapat dipanggil sebagai fungsi.",
            )),
        }
    }

    /// Runs a user function: fresh frame over the closure, parameters
    /// bound, the return signal caught here.
    fn call_function(
        &mut self,
        function: &Rc<Function>,
        args: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        let env = Environment::with_enclosing(function.closure());
        for (param, value) in function.params().iter().zip(args) {
            env.define(param.clone(), value);
        }
        match self.execute_block(function.body(), env)? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }

    /// Allocates an instance and runs `__init__` bound to it, if declared.
    fn call_class(&mut self, class: &Rc<Class>, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let instance = Instance::new(Rc::clone(class));
        if let Some(init) = class.find_method("__init__") {
            let bound = init.bind(&instance);
            if bound.arity() != args.len() {
                return Err(RuntimeError::new(format!(
                    "Constructor __init__ mengharapkan {} argumen, diberi {}.",
                    bound.arity(),
                    args.len()
                )));
            }
            self.call_function(&bound, args)?;
        }
        Ok(Value::Instance(instance))
    }

    /// `super.nama`: resolve against the *statically* owning class's
    /// superclass chain, via the `__class__` binding established at bind
    /// time, and return the method bound to the current `ini`.
    fn eval_super_get(
        &mut self,
        super_get: &SuperGetExpr,
        env: &Rc<Environment>,
    ) -> Result<Value, RuntimeError> {
        let instance = match env.lookup("ini") {
            Some(Value::Instance(instance)) => instance,
            _ => {
                return Err(RuntimeError::new(
                    "'super' hanya dapat digunakan di dalam method.",
                ))
            },
        };
        let current_class = match env.lookup("__class__") {
            Some(Value::Class(class)) => class,
            _ => Rc::clone(instance.class()),
        };
        let superclass = current_class
            .superclass()
            .cloned()
            .ok_or_else(|| RuntimeError::new("Tidak ada superclass untuk 'super'."))?;
        let method = superclass.find_method(&super_get.name).ok_or_else(|| {
            RuntimeError::new(format!(
                "Method '{}' tidak ditemukan pada superclass.",
                super_get.name
            ))
        })?;
        Ok(Value::Function(method.bind(&instance)))
    }

    // Instance member access

    /// The `ini` visible from the access site, if any; absent means the
    /// access is external.
    fn current_instance(env: &Rc<Environment>) -> Option<Rc<Instance>> {
        match env.lookup("ini") {
            Some(Value::Instance(instance)) => Some(instance),
            _ => None,
        }
    }

    /// Enforces the prefix visibility rules: `__nama` is protected (same
    /// class or subclass), `_nama` is private (exactly the same class),
    /// anything else is public.
    fn check_access(
        instance: &Rc<Instance>,
        name: &str,
        env: &Rc<Environment>,
    ) -> Result<(), RuntimeError> {
        if name.starts_with("__") {
            let allowed = Self::current_instance(env)
                .is_some_and(|current| current.class().is_subclass_of(instance.class()));
            if !allowed {
                return Err(RuntimeError::new(format!(
                    "Anggota terproteksi '{}' tidak dapat diakses dari luar kelas {}.",
                    name,
                    instance.class().name()
                )));
            }
        } else if name.starts_with('_') {
            let allowed = Self::current_instance(env)
                .is_some_and(|current| Rc::ptr_eq(current.class(), instance.class()));
            if !allowed {
                return Err(RuntimeError::new(format!(
                    "Anggota privat '{}' hanya dapat diakses dari dalam kelas {}.",
                    name,
                    instance.class().name()
                )));
            }
        }
        Ok(())
    }

    /// Member read: field, then `get_<nama>` accessor, then bound method.
    fn instance_get(
        &mut self,
        instance: &Rc<Instance>,
        name: &str,
        env: &Rc<Environment>,
    ) -> Result<Value, RuntimeError> {
        Self::check_access(instance, name, env)?;

        if let Some(value) = instance.field(name) {
            return Ok(value);
        }
        if let Some(getter) = instance.class().find_method(&format!("get_{name}")) {
            let bound = getter.bind(instance);
            return self.call_function(&bound, Vec::new());
        }
        if let Some(method) = instance.class().find_method(name) {
            return Ok(Value::Function(method.bind(instance)));
        }
        Err(RuntimeError::new(format!(
            "Properti atau method tidak ditemukan: {name}"
        )))
    }

    /// Member write: `set_<nama>` accessor when present, else the field
    /// map. The accessor bypasses field storage entirely.
    fn instance_set(
        &mut self,
        instance: &Rc<Instance>,
        name: &str,
        value: Value,
        env: &Rc<Environment>,
    ) -> Result<Value, RuntimeError> {
        Self::check_access(instance, name, env)?;

        if let Some(setter) = instance.class().find_method(&format!("set_{name}")) {
            let bound = setter.bind(instance);
            self.call_function(&bound, vec![value.clone()])?;
            return Ok(value);
        }
        instance.set_field(name, value.clone());
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn literal_value(literal: &LiteralValue) -> Value {
    match literal {
        LiteralValue::Nil => Value::Nil,
        LiteralValue::Bool(b) => Value::Bool(*b),
        LiteralValue::Int(v) => Value::Int(*v),
        LiteralValue::Float(v) => Value::Float(*v),
        LiteralValue::Str(s) => Value::Str(s.as_str().into()),
    }
}

fn check_arity(expected: Option<usize>, given: usize) -> Result<(), RuntimeError> {
    match expected {
        Some(expected) if expected != given => Err(RuntimeError::new(format!(
            "Jumlah argumen tidak cocok. Diharapkan {expected}, diberi {given}."
        ))),
        _ => Ok(()),
    }
}

fn overflow_error() -> RuntimeError {
    RuntimeError::new("Hasil aritmatika di luar jangkauan bilangan.")
}

/// Numeric operand pair, promoted to floats when the kinds mix.
enum NumPair {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn numeric_pair(left: &Value, right: &Value) -> Option<NumPair> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(NumPair::Ints(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Some(NumPair::Floats(*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Some(NumPair::Floats(*a, *b as f64)),
        (Value::Float(a), Value::Float(b)) => Some(NumPair::Floats(*a, *b)),
        _ => None,
    }
}

fn eval_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => {
            let pair = numeric_pair(left, right)
                .ok_or_else(|| RuntimeError::new(format!("'{}' butuh angka", op.symbol())))?;
            eval_arithmetic(op, pair)
        },
        BinaryOp::EqEq => Ok(Value::Bool(left.ice_eq(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.ice_eq(right))),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let pair = numeric_pair(left, right)
                .ok_or_else(|| RuntimeError::new(format!("'{}' butuh angka", op.symbol())))?;
            Ok(Value::Bool(eval_comparison(op, pair)))
        },
    }
}

/// `+` adds numbers; if either side is a string, both are stringified and
/// concatenated.
fn eval_add(left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    if let Some(pair) = numeric_pair(left, right) {
        return match pair {
            NumPair::Ints(a, b) => a.checked_add(b).map(Value::Int).ok_or_else(overflow_error),
            NumPair::Floats(a, b) => Ok(Value::Float(a + b)),
        };
    }
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return Ok(Value::Str(format!("{left}{right}").into()));
    }
    Err(RuntimeError::new("Operator '+': tipe tidak cocok."))
}

/// Integer arithmetic is checked; division and remainder reject a zero
/// divisor for both kinds. Both-int division truncates toward zero;
/// remainder keeps the dividend's sign.
fn eval_arithmetic(op: BinaryOp, pair: NumPair) -> Result<Value, RuntimeError> {
    match pair {
        NumPair::Ints(a, b) => {
            let result = match op {
                BinaryOp::Sub => a.checked_sub(b),
                BinaryOp::Mul => a.checked_mul(b),
                BinaryOp::Div => {
                    if b == 0 {
                        return Err(division_by_zero());
                    }
                    a.checked_div(b)
                },
                _ => {
                    if b == 0 {
                        return Err(division_by_zero());
                    }
                    a.checked_rem(b)
                },
            };
            result.map(Value::Int).ok_or_else(overflow_error)
        },
        NumPair::Floats(a, b) => {
            let result = match op {
                BinaryOp::Sub => a - b,
                BinaryOp::Mul => a * b,
                BinaryOp::Div => {
                    if b == 0.0 {
                        return Err(division_by_zero());
                    }
                    a / b
                },
                _ => {
                    if b == 0.0 {
                        return Err(division_by_zero());
                    }
                    a % b
                },
            };
            Ok(Value::Float(result))
        },
    }
}

fn eval_comparison(op: BinaryOp, pair: NumPair) -> bool {
    match pair {
        NumPair::Ints(a, b) => match op {
            BinaryOp::Lt => a < b,
            BinaryOp::LtEq => a <= b,
            BinaryOp::Gt => a > b,
            _ => a >= b,
        },
        NumPair::Floats(a, b) => match op {
            BinaryOp::Lt => a < b,
            BinaryOp::LtEq => a <= b,
            BinaryOp::Gt => a > b,
            _ => a >= b,
        },
    }
}

fn division_by_zero() -> RuntimeError {
    RuntimeError::new("Pembagian dengan nol.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_binary_integer_division_truncates() {
        let v = eval_binary(BinaryOp::Div, &Value::Int(3), &Value::Int(2)).unwrap();
        assert!(v.ice_eq(&Value::Int(1)));
        let v = eval_binary(BinaryOp::Div, &Value::Int(-3), &Value::Int(2)).unwrap();
        assert!(v.ice_eq(&Value::Int(-1)));
    }

    #[test]
    fn test_eval_binary_mixed_division_is_float() {
        let v = eval_binary(BinaryOp::Div, &Value::Float(3.0), &Value::Int(2)).unwrap();
        assert!(v.ice_eq(&Value::Float(1.5)));
    }

    #[test]
    fn test_eval_binary_remainder_sign() {
        let v = eval_binary(BinaryOp::Rem, &Value::Int(7), &Value::Int(3)).unwrap();
        assert!(v.ice_eq(&Value::Int(1)));
        let v = eval_binary(BinaryOp::Rem, &Value::Int(-7), &Value::Int(3)).unwrap();
        assert!(v.ice_eq(&Value::Int(-1)));
    }

    #[test]
    fn test_eval_binary_division_by_zero() {
        let err = eval_binary(BinaryOp::Div, &Value::Int(1), &Value::Int(0)).unwrap_err();
        assert_eq!(err.message, "Pembagian dengan nol.");
        let err = eval_binary(BinaryOp::Rem, &Value::Float(1.0), &Value::Float(0.0)).unwrap_err();
        assert_eq!(err.message, "Pembagian dengan nol.");
    }

    #[test]
    fn test_eval_binary_overflow_is_error() {
        let err =
            eval_binary(BinaryOp::Mul, &Value::Int(i64::MAX), &Value::Int(2)).unwrap_err();
        assert_eq!(err.message, "Hasil aritmatika di luar jangkauan bilangan.");
        let err =
            eval_binary(BinaryOp::Div, &Value::Int(i64::MIN), &Value::Int(-1)).unwrap_err();
        assert_eq!(err.message, "Hasil aritmatika di luar jangkauan bilangan.");
    }

    #[test]
    fn test_eval_add_concatenates_with_either_string() {
        let v = eval_add(&Value::Str("a".into()), &Value::Int(1)).unwrap();
        assert!(v.ice_eq(&Value::Str("a1".into())));
        let v = eval_add(&Value::Int(1), &Value::Str("a".into())).unwrap();
        assert!(v.ice_eq(&Value::Str("1a".into())));
    }

    #[test]
    fn test_eval_add_rejects_booleans() {
        let err = eval_add(&Value::Bool(true), &Value::Int(1)).unwrap_err();
        assert_eq!(err.message, "Operator '+': tipe tidak cocok.");
    }

    #[test]
    fn test_comparison_requires_numbers() {
        let err = eval_binary(BinaryOp::Lt, &Value::Str("a".into()), &Value::Str("b".into()))
            .unwrap_err();
        assert_eq!(err.message, "'<' butuh angka");
    }

    #[test]
    fn test_check_arity() {
        assert!(check_arity(None, 7).is_ok());
        assert!(check_arity(Some(2), 2).is_ok());
        let err = check_arity(Some(2), 3).unwrap_err();
        assert_eq!(
            err.message,
            "Jumlah argumen tidak cocok. Diharapkan 2, diberi 3."
        );
    }
}
