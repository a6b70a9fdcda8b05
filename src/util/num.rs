/// Computes the greatest common divisor of two magnitudes.
///
/// The inputs are unsigned so that callers can pass `unsigned_abs()` of any
/// signed integer, including the minimum value, without overflow.
///
/// # Parameters
/// - `a`: First magnitude.
/// - `b`: Second magnitude.
///
/// # Returns
/// The greatest common divisor; `gcd(0, x)` is `x`.
///
/// # Example
/// ```
/// use fracta::util::num::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(0, 7), 7);
/// ```
#[must_use]
pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Counts the decimal digits of a non-negative value.
///
/// Zero has no digits under this definition, which makes `x . 0` join a zero
/// decimal part over a denominator of one.
///
/// # Parameters
/// - `value`: The non-negative value to measure.
///
/// # Returns
/// The number of decimal digits, or 0 for 0.
#[must_use]
pub const fn decimal_digits(value: i64) -> u32 {
    let mut remaining = value;
    let mut digits = 0;
    while remaining > 0 {
        remaining /= 10;
        digits += 1;
    }
    digits
}
