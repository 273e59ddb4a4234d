//! The fixed builtin registry installed into the root environment.

use ice_util::RuntimeError;

use crate::env::Environment;
use crate::interp::Interpreter;
use crate::value::{Range, Value};

/// A builtin callable.
///
/// The set is closed; each variant dispatches to host code in [`Builtin::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Tampilkan,
    Rentang,
    Panjang,
    Tipe,
    Int,
    Float,
    Str,
}

const ALL: [Builtin; 7] = [
    Builtin::Tampilkan,
    Builtin::Rentang,
    Builtin::Panjang,
    Builtin::Tipe,
    Builtin::Int,
    Builtin::Float,
    Builtin::Str,
];

impl Builtin {
    /// Installs every builtin into the root environment.
    ///
    /// `cetak` is a true alias of `tampilkan`, matching the keyword synonym.
    pub fn install(globals: &Environment) {
        for builtin in ALL {
            globals.define(builtin.name(), Value::Builtin(builtin));
        }
        globals.define("cetak", Value::Builtin(Builtin::Tampilkan));
    }

    /// The global name this builtin is installed under.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Tampilkan => "tampilkan",
            Builtin::Rentang => "rentang",
            Builtin::Panjang => "panjang",
            Builtin::Tipe => "tipe",
            Builtin::Int => "int",
            Builtin::Float => "float",
            Builtin::Str => "str",
        }
    }

    /// Builtins are variadic at the call site (`None`): each validates its
    /// own argument count and reports a violation in its own words.
    pub fn arity(self) -> Option<usize> {
        None
    }

    pub(crate) fn call(
        self,
        interp: &mut Interpreter,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        match self {
            Builtin::Tampilkan => {
                let line = args
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                interp.print_line(&line);
                Ok(Value::Nil)
            },
            Builtin::Rentang => range_from_values(args).map(Value::Range),
            Builtin::Panjang => {
                let arg = one_arg(args, "panjang(x) membutuhkan 1 argumen")?;
                match arg {
                    Value::Str(s) => Ok(Value::Int(s.chars().count() as i64)),
                    Value::Range(r) => Ok(Value::Int(r.len())),
                    other => Err(RuntimeError::new(format!(
                        "panjang(x) tidak mendukung tipe {}",
                        other.type_name()
                    ))),
                }
            },
            Builtin::Tipe => {
                let arg = one_arg(args, "tipe(x) membutuhkan 1 argumen")?;
                Ok(Value::Str(arg.type_name().into()))
            },
            Builtin::Int => {
                let arg = one_arg(args, "int(x) membutuhkan 1 argumen")?;
                coerce_int(arg).map(Value::Int)
            },
            Builtin::Float => {
                let arg = one_arg(args, "float(x) membutuhkan 1 argumen")?;
                coerce_float(arg).map(Value::Float)
            },
            Builtin::Str => {
                let arg = one_arg(args, "str(x) membutuhkan 1 argumen")?;
                Ok(Value::Str(arg.to_string().into()))
            },
        }
    }
}

fn one_arg<'a>(args: &'a [Value], message: &str) -> Result<&'a Value, RuntimeError> {
    if args.len() == 1 {
        Ok(&args[0])
    } else {
        Err(RuntimeError::new(message))
    }
}

/// Builds the half-open integer range described by 1–3 argument values,
/// coercing each through the `int` builtin's rules.
///
/// The for-range statement shares these semantics with the `rentang`
/// builtin.
pub(crate) fn range_from_values(args: &[Value]) -> Result<Range, RuntimeError> {
    if args.is_empty() || args.len() > 3 {
        return Err(RuntimeError::new("rentang membutuhkan 1..3 argumen"));
    }
    let ints = args
        .iter()
        .map(coerce_int)
        .collect::<Result<Vec<i64>, _>>()?;

    let (start, stop, step) = match ints.len() {
        1 => (0, ints[0], 1),
        2 => (ints[0], ints[1], 1),
        _ => (ints[0], ints[1], ints[2]),
    };
    if step == 0 {
        return Err(RuntimeError::new("rentang: langkah tidak boleh nol"));
    }
    Ok(Range { start, stop, step })
}

/// Integer coercion: floats truncate toward zero, booleans map to 0/1,
/// strings parse.
pub(crate) fn coerce_int(value: &Value) -> Result<i64, RuntimeError> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::Float(f) if f.is_finite() => Ok(*f as i64),
        Value::Float(_) => Err(RuntimeError::new("int(x): nilai tidak terhingga")),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Str(s) => s.trim().parse().map_err(|_| {
            RuntimeError::new(format!("int(x): teks tidak dapat diubah menjadi bilangan: '{s}'"))
        }),
        other => Err(RuntimeError::new(format!(
            "int(x) tidak mendukung tipe {}",
            other.type_name()
        ))),
    }
}

/// Float coercion, mirroring [`coerce_int`].
pub(crate) fn coerce_float(value: &Value) -> Result<f64, RuntimeError> {
    match value {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        Value::Bool(b) => Ok(f64::from(u8::from(*b))),
        Value::Str(s) => s.trim().parse().map_err(|_| {
            RuntimeError::new(format!("float(x): teks tidak dapat diubah menjadi desimal: '{s}'"))
        }),
        other => Err(RuntimeError::new(format!(
            "float(x) tidak mendukung tipe {}",
            other.type_name()
        ))),
    }
}
