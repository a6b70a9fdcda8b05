use crate::{error::RuntimeError,
            interpreter::evaluator::core::EvalResult,
            util::num::{decimal_digits, gcd}};

/// An exact rational number.
///
/// The value is always stored in normal form: lowest terms, positive
/// denominator, sign carried by the numerator. Because of this, the derived
/// equality is exact value equality; `2/4` and `1/2` are the same fraction.
///
/// # Example
/// ```
/// use fracta::interpreter::value::fraction::Fraction;
///
/// let half = Fraction::new(2, 4, 1).unwrap();
/// assert_eq!(half.numerator(), 1);
/// assert_eq!(half.denominator(), 2);
/// assert_eq!(half, Fraction::new(1, 2, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Builds a fraction from a numerator and a denominator.
    ///
    /// # Parameters
    /// - `num`: The numerator.
    /// - `den`: The denominator.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` if `den` is 0.
    /// - `Overflow` if the normalized value does not fit an `i64`.
    ///
    /// # Example
    /// ```
    /// use fracta::interpreter::value::fraction::Fraction;
    ///
    /// // The sign always moves into the numerator.
    /// let f = Fraction::new(6, -8, 1).unwrap();
    /// assert_eq!((f.numerator(), f.denominator()), (-3, 4));
    ///
    /// assert!(Fraction::new(1, 0, 1).is_err());
    /// ```
    pub fn new(num: i64, den: i64, line: usize) -> EvalResult<Self> {
        if den == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        Self::from_wide(i128::from(num), i128::from(den), line)
    }

    /// Builds the fraction `value/1`.
    #[must_use]
    pub const fn from_integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    /// Joins an integer part and a decimal part into a fraction, the way the
    /// `.` operator does for `3.25`-style expressions.
    ///
    /// The denominator is `10^(digit count of the decimal part)` and the
    /// numerator is `integer_part * denominator + decimal_part`.
    ///
    /// # Errors
    /// - `TypeError` if the decimal part is negative.
    /// - `Overflow` if the joined value does not fit an `i64`.
    ///
    /// # Example
    /// ```
    /// use fracta::interpreter::value::fraction::Fraction;
    ///
    /// let f = Fraction::from_decimal(1, 5, 1).unwrap();
    /// assert_eq!((f.numerator(), f.denominator()), (3, 2));
    /// ```
    pub fn from_decimal(integer_part: i64, decimal_part: i64, line: usize) -> EvalResult<Self> {
        if decimal_part < 0 {
            return Err(RuntimeError::TypeError { details: "the decimal part of a fraction must not be negative".to_string(),
                                                 line });
        }
        let den = 10_i128.pow(decimal_digits(decimal_part));
        let num = i128::from(integer_part) * den + i128::from(decimal_part);
        Self::from_wide(num, den, line)
    }

    /// Returns the numerator; it carries the sign of the fraction.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// Returns the denominator; always positive.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    /// Adds two fractions exactly.
    ///
    /// # Errors
    /// `Overflow` if the result does not fit an `i64` after simplification.
    pub fn add(self, rhs: Self, line: usize) -> EvalResult<Self> {
        let num =
            i128::from(self.num) * i128::from(rhs.den) + i128::from(rhs.num) * i128::from(self.den);
        Self::from_wide(num, i128::from(self.den) * i128::from(rhs.den), line)
    }

    /// Subtracts `rhs` from `self` exactly.
    ///
    /// # Errors
    /// `Overflow` if the result does not fit an `i64` after simplification.
    pub fn sub(self, rhs: Self, line: usize) -> EvalResult<Self> {
        let num =
            i128::from(self.num) * i128::from(rhs.den) - i128::from(rhs.num) * i128::from(self.den);
        Self::from_wide(num, i128::from(self.den) * i128::from(rhs.den), line)
    }

    /// Multiplies two fractions exactly.
    ///
    /// # Errors
    /// `Overflow` if the result does not fit an `i64` after simplification.
    pub fn mul(self, rhs: Self, line: usize) -> EvalResult<Self> {
        Self::from_wide(i128::from(self.num) * i128::from(rhs.num),
                        i128::from(self.den) * i128::from(rhs.den),
                        line)
    }

    /// Divides `self` by `rhs` exactly.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero.
    /// - `Overflow` if the result does not fit an `i64` after simplification.
    pub fn div(self, rhs: Self, line: usize) -> EvalResult<Self> {
        if rhs.num == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        Self::from_wide(i128::from(self.num) * i128::from(rhs.den),
                        i128::from(self.den) * i128::from(rhs.num),
                        line)
    }

    /// Computes the remainder of `self` divided by `rhs`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero.
    /// - `Overflow` if the result does not fit an `i64` after simplification.
    pub fn rem(self, rhs: Self, line: usize) -> EvalResult<Self> {
        if rhs.num == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        let num = (i128::from(self.num) * i128::from(rhs.den))
                  % (i128::from(rhs.num) * i128::from(self.den));
        Self::from_wide(num, i128::from(self.den) * i128::from(rhs.den), line)
    }

    /// Flips the sign of the fraction.
    ///
    /// # Errors
    /// `Overflow` if the numerator is `i64::MIN`.
    pub fn negated(self, line: usize) -> EvalResult<Self> {
        match self.num.checked_neg() {
            Some(num) => Ok(Self { num, den: self.den }),
            None => Err(RuntimeError::Overflow { line }),
        }
    }

    /// Simplifies a wide numerator/denominator pair and narrows it back to
    /// `i64`, normalizing the sign into the numerator.
    fn from_wide(num: i128, den: i128, line: usize) -> EvalResult<Self> {
        debug_assert!(den != 0);

        let divisor = gcd(num.unsigned_abs(), den.unsigned_abs());
        // The divisor fits i128 because both inputs come from i64 products.
        #[allow(clippy::cast_possible_wrap)]
        let divisor = divisor as i128;
        let (mut num, mut den) = (num / divisor, den / divisor);
        if den < 0 {
            num = -num;
            den = -den;
        }

        match (i64::try_from(num), i64::try_from(den)) {
            (Ok(num), Ok(den)) => Ok(Self { num, den }),
            _ => Err(RuntimeError::Overflow { line }),
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Denominators are positive, so cross-multiplication keeps the order.
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl std::fmt::Display for Fraction {
    /// Renders the fraction in mixed form.
    ///
    /// Proper fractions print as `num/den`, whole values print as plain
    /// integers, everything else prints as `int(rem/den)`.
    ///
    /// # Example
    /// ```
    /// use fracta::interpreter::value::fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(1, 2, 1).unwrap().to_string(), "1/2");
    /// assert_eq!(Fraction::new(6, 2, 1).unwrap().to_string(), "3");
    /// assert_eq!(Fraction::new(7, 2, 1).unwrap().to_string(), "3(1/2)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.num / self.den;
        let remainder = self.num % self.den;

        if whole == 0 {
            write!(f, "{}/{}", self.num, self.den)
        } else if remainder == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}({remainder}/{})", self.den)
        }
    }
}
