use std::rc::Rc;

use num::{BigInt, Zero};

/// Represents a runtime value in the interpreter.
///
/// A value is either a single arbitrary-precision integer or a non-empty,
/// ordered vector of them. Vectors of length one only exist transiently:
/// operator results pass through [`Value::shrink`] before anyone sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single integer.
    Scalar(BigInt),
    /// One or more integers, in index order.
    Vector(Rc<Vec<BigInt>>),
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Self::Scalar(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<Vec<BigInt>> for Value {
    /// Wraps the elements as a vector. Callers never pass an empty vector.
    fn from(elements: Vec<BigInt>) -> Self {
        debug_assert!(!elements.is_empty(), "vectors are never empty");
        Self::Vector(Rc::new(elements))
    }
}

impl From<Vec<i64>> for Value {
    fn from(elements: Vec<i64>) -> Self {
        elements.into_iter().map(BigInt::from).collect::<Vec<_>>().into()
    }
}

impl Value {
    /// Returns this value in the shape of `peer`.
    ///
    /// Promotion only ever broadens: a scalar meeting a vector becomes a
    /// length-1 vector, every other combination is returned unchanged.
    ///
    /// # Example
    /// ```
    /// use aplish::interpreter::value::core::Value;
    ///
    /// let s = Value::from(3);
    /// let v = Value::from(vec![1, 2]);
    ///
    /// assert_eq!(s.promote_to(&v), Value::from(vec![3]));
    /// assert_eq!(v.promote_to(&s), v);
    /// ```
    #[must_use]
    pub fn promote_to(&self, peer: &Self) -> Self {
        match (self, peer) {
            (Self::Scalar(n), Self::Vector(_)) => Self::Vector(Rc::new(vec![n.clone()])),
            _ => self.clone(),
        }
    }

    /// Promotes two values against each other so they share a variant.
    ///
    /// Each side is promoted against the *original* other side.
    #[must_use]
    pub fn same(left: &Self, right: &Self) -> (Self, Self) {
        (left.promote_to(right), right.promote_to(left))
    }

    /// Collapses a length-1 vector into a scalar. Anything else is returned
    /// as-is.
    #[must_use]
    pub fn shrink(self) -> Self {
        match self {
            Self::Vector(elements) if elements.len() == 1 => Self::Scalar(elements[0].clone()),
            other => other,
        }
    }

    /// Returns the elements in index order. A scalar is its own single
    /// element.
    #[must_use]
    pub fn elements(&self) -> &[BigInt] {
        match self {
            Self::Scalar(n) => std::slice::from_ref(n),
            Self::Vector(elements) => elements.as_slice(),
        }
    }

    /// Returns the number of elements; 1 for a scalar.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements().len()
    }

    /// Values always hold at least one element.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Negates every element.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Scalar(n) => Self::Scalar(-n),
            Self::Vector(elements) => {
                Self::from(elements.iter().map(|n| -n).collect::<Vec<_>>()).shrink()
            },
        }
    }

    /// Folds the elements with `+` into a scalar.
    ///
    /// # Example
    /// ```
    /// use aplish::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(vec![4, 10, 18]).sum_reduce(), Value::from(32));
    /// ```
    #[must_use]
    pub fn sum_reduce(&self) -> Self {
        Self::Scalar(self.elements().iter().fold(BigInt::zero(), |acc, n| acc + n))
    }

    /// Renders the value the way the shell prints it: a scalar as its decimal
    /// digits, a vector as its elements separated by single spaces.
    ///
    /// # Example
    /// ```
    /// use aplish::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(-7).to_text(), "-7");
    /// assert_eq!(Value::from(vec![2, -4, 6]).to_text(), "2 -4 6");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if the value is [`Value::Scalar`].
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(..))
    }

    /// Returns `true` if the value is [`Value::Vector`].
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(n) => write!(f, "{n}"),
            Self::Vector(elements) => {
                for (index, n) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{n}")?;
                }

                Ok(())
            },
        }
    }
}
