use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::{
    error::DomainError,
    interpreter::evaluator::{
        core::{EvalResult, Interpreter},
        function::{aggregate, constants, factorial, log, sqrt, trig},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated arguments, already checked against
/// its arity, and the source position of the call.
type BuiltinFn = fn(&[Decimal], usize) -> EvalResult<Decimal>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Debug, Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Every function and constant name the interpreter resolves.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "pi"        => { arity: Arity::Exact(0), func: constants::pi },
    "PI"        => { arity: Arity::Exact(0), func: constants::pi },
    "π"         => { arity: Arity::Exact(0), func: constants::pi },
    "tau"       => { arity: Arity::Exact(0), func: constants::tau },
    "TAU"       => { arity: Arity::Exact(0), func: constants::tau },
    "τ"         => { arity: Arity::Exact(0), func: constants::tau },
    "e"         => { arity: Arity::Exact(0), func: constants::e },
    "euler"     => { arity: Arity::Exact(0), func: constants::e },
    "sin"       => { arity: Arity::Exact(1), func: trig::sin },
    "cos"       => { arity: Arity::Exact(1), func: trig::cos },
    "tan"       => { arity: Arity::Exact(1), func: trig::tan },
    "asin"      => { arity: Arity::Exact(1), func: trig::asin },
    "acos"      => { arity: Arity::Exact(1), func: trig::acos },
    "atan"      => { arity: Arity::Exact(1), func: trig::atan },
    "sinh"      => { arity: Arity::Exact(1), func: trig::sinh },
    "cosh"      => { arity: Arity::Exact(1), func: trig::cosh },
    "tanh"      => { arity: Arity::Exact(1), func: trig::tanh },
    "asinh"     => { arity: Arity::Exact(1), func: trig::asinh },
    "acosh"     => { arity: Arity::Exact(1), func: trig::acosh },
    "atanh"     => { arity: Arity::Exact(1), func: trig::atanh },
    "atan2"     => { arity: Arity::Exact(2), func: trig::atan2 },
    "rad"       => { arity: Arity::Exact(1), func: trig::rad },
    "deg"       => { arity: Arity::Exact(1), func: trig::deg },
    "sqrt"      => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "√"         => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "isqrt"     => { arity: Arity::Exact(1), func: sqrt::isqrt },
    "ln"        => { arity: Arity::Exact(1), func: log::ln },
    "log10"     => { arity: Arity::Exact(1), func: log::log10 },
    "log"       => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "factorial" => { arity: Arity::Exact(1), func: |args, position| factorial::factorial("factorial", args, position) },
    "fact"      => { arity: Arity::Exact(1), func: |args, position| factorial::factorial("fact", args, position) },
    "gamma"     => { arity: Arity::Exact(1), func: |args, position| factorial::factorial("gamma", args, position) },
    "Γ"         => { arity: Arity::Exact(1), func: |args, position| factorial::factorial("Γ", args, position) },
    "max"       => { arity: Arity::AtLeast(1), func: aggregate::max },
    "min"       => { arity: Arity::AtLeast(1), func: aggregate::min },
    "sums"      => { arity: Arity::AtLeast(1), func: aggregate::sums },
    "sum"       => { arity: Arity::Exact(2), func: aggregate::sum },
}

/// Name lookup over [`BUILTIN_TABLE`], built on first use.
static BUILTIN_INDEX: Lazy<HashMap<&'static str, &'static BuiltinDef>> =
    Lazy::new(|| BUILTIN_TABLE.iter().map(|def| (def.name, def)).collect());

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

/// Describes the accepted counts, as used in argument count errors.
impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
        }
    }
}

impl Interpreter {
    /// Evaluates a function call or a named constant.
    ///
    /// The name is looked up in the builtin table, the argument count is
    /// checked against the builtin's arity, and the builtin is executed.
    /// Results of calls with arguments are rounded to the context precision;
    /// constants are returned exactly.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    ///
    /// # Example
    /// ```
    /// use inline_calc::interpreter::{context::Context, evaluator::core::Interpreter};
    /// use rust_decimal::Decimal;
    ///
    /// let interpreter = Interpreter::new(Context::default());
    ///
    /// let max = interpreter.eval_function("max", &[Decimal::ONE, Decimal::TEN], 0);
    /// assert_eq!(max.unwrap(), Decimal::TEN);
    ///
    /// assert!(interpreter.eval_function("foo", &[Decimal::ONE], 0).is_err());
    /// ```
    pub fn eval_function(&self, name: &str, args: &[Decimal], position: usize) -> EvalResult<Decimal> {
        let builtin = BUILTIN_INDEX.get(name)
                                   .ok_or_else(|| DomainError::UnknownFunction { name: name.to_string(),
                                                                                  position })?;

        if !builtin.arity.check(args.len()) {
            return Err(DomainError::ArgumentCountMismatch { name: name.to_string(),
                                                            expected: builtin.arity.to_string(),
                                                            found: args.len(),
                                                            position });
        }

        tracing::trace!(name, ?args, position, "calling builtin");
        let value = (builtin.func)(args, position)?;

        if args.is_empty() {
            Ok(value)
        } else {
            self.context().round(value, position)
        }
    }
}
