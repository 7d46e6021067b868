use std::fmt;

use crate::util::num::format_number;

/// Text accumulated by `print` statements.
///
/// Output is threaded through evaluation by value. The only operation is
/// appending a printed line, which consumes the old accumulator and returns
/// the extended one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    text: String,
}

impl Output {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` as `print` formats it, followed by a newline.
    ///
    /// # Example
    /// ```
    /// use while_lang::interpreter::value::output::Output;
    ///
    /// let out = Output::new().print(3.0).print(f64::NAN);
    /// assert_eq!(out.as_str(), "3.0\nnan\n");
    /// ```
    #[must_use]
    pub fn print(mut self, value: f64) -> Self {
        self.text.push_str(&format_number(value));
        self.text.push('\n');
        self
    }

    /// The text printed so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the accumulator and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
