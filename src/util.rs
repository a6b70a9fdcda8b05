/// Integer helpers shared by the fraction type and the evaluator.
pub mod num;
