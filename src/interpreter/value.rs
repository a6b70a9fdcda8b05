/// Defines the `Value` enum produced by evaluation.
///
/// Covers literals, the exact fraction type, assignment targets and the
/// control-flow signal values that blocks and loops react to.
pub mod core;
/// Implements exact rational numbers.
///
/// A `Fraction` is always kept in lowest terms with a positive denominator,
/// so equality is structural and printing is deterministic.
pub mod fraction;
