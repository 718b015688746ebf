use std::collections::HashMap;

use rand::{RngCore, SeedableRng, rngs::StdRng};

use crate::{
    error::{EvalError, RuntimeError},
    interpreter::{parser::core::Parser, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All value computations return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The variable every successful statement binds its result to.
pub const ANSWER: &str = "ans";

/// Stores the state of one interactive session.
///
/// ## Usage
///
/// A `Session` is created once and fed one statement at a time through
/// [`Session::execute`]. Variables persist across statements. A statement that
/// fails leaves every binding exactly as it was.
///
/// The session owns the random source used by the roll operator `?`. It is
/// injected at construction so tests can substitute a deterministic one.
pub struct Session {
    /// Variable name to value.
    pub(crate) variables: HashMap<String, Value>,
    pub(crate) rng:       Box<dyn RngCore>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
         .field("variables", &self.variables)
         .finish_non_exhaustive()
    }
}

impl Session {
    /// Creates a session with no variables and an entropy-seeded random
    /// source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a session whose roll operator is driven by a generator seeded
    /// with `seed`. Two sessions with the same seed roll the same numbers.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a session using `rng` as its random source.
    #[must_use]
    pub fn with_rng<R>(rng: R) -> Self
        where R: RngCore + 'static
    {
        Self { variables: HashMap::new(),
               rng:       Box::new(rng), }
    }

    /// Looks up a bound variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Iterates over every bound variable, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Evaluates exactly one statement.
    ///
    /// On success, assignments made by the statement are committed, the
    /// result is bound to `ans` and returned. On failure nothing is
    /// committed.
    ///
    /// # Errors
    /// Returns an [`EvalError`] if the statement cannot be scanned, does not
    /// parse, references an unbound variable, combines incompatible vector
    /// lengths, or violates an operator's domain. An empty line is a syntax
    /// error.
    ///
    /// # Example
    /// ```
    /// use aplish::{Session, Value};
    ///
    /// let mut session = Session::new();
    ///
    /// assert_eq!(session.execute("5 - 3 - 1").unwrap(), Value::from(3));
    /// assert_eq!(session.execute("x = 1 2 3 * 2").unwrap().to_text(), "2 4 6");
    /// assert_eq!(session.execute("ans +.* x").unwrap(), Value::from(56));
    /// assert!(session.execute("x = y").is_err());
    /// assert_eq!(session.variable("x"), Some(&Value::from(vec![2, 4, 6])));
    /// ```
    pub fn execute(&mut self, line: &str) -> Result<Value, EvalError> {
        let mut parser = Parser::new(line, self);
        let value = parser.parse_statement()?;
        let staged = parser.into_staged();

        self.variables.extend(staged);
        self.variables.insert(ANSWER.to_owned(), value.clone());
        Ok(value)
    }
}
