/// Number formatting and literal conversion.
///
/// This module turns `f64` values into the text written by `print`, renders
/// literals for the canonical program form, and converts number tokens into
/// values.
pub mod num;
