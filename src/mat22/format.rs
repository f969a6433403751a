use std::{fmt, io::{BufRead, Write}, str::FromStr};

use crate::{FormatConfig, ParseMatError};

use super::Mat22;

/// Text written by [Mat22::prompt] before reading
const PROMPT: &str = "To create the following 2x2 matrix:\n|a b|\n|   |\n|c d|\nenter four numbers a, b, c, d in that order:\n";

impl Mat22 {
	/// Field width needed to print every element, starting at `min_width` and
	/// growing by one for each power of ten in the largest element.
	///
	/// Non-finite maxima don't widen the field.
	pub(crate) fn number_of_digits(&self, min_width: usize) -> usize {
		let mut number = self.maximum().abs();
		let mut length = min_width;
		if !number.is_finite() {
			return length;
		}
		while number >= 1. {
			number /= 10.;
			length += 1;
		}
		length
	}

	/// Boxed, three-line rendering using `config`
	pub fn display_with(&self, config: FormatConfig) -> Mat22Display<'_> {
		Mat22Display {
			mat: self,
			config,
		}
	}

	/// Write a description of the expected layout to `output`, then read four
	/// whitespace-separated numbers (`a b c d`) from `input`.
	///
	/// The values may be spread across several lines.
	pub fn prompt(input: &mut impl BufRead, output: &mut impl Write) -> Result<Self, ParseMatError> {
		output.write_all(PROMPT.as_bytes())?;
		output.flush()?;

		let mut values = [0f64; 4];
		let mut count = 0;
		let mut line = String::new();
		while count < values.len() {
			line.clear();
			if input.read_line(&mut line)? == 0 {
				return Err(ParseMatError::MissingValues { actual: count });
			}
			for token in line.split_whitespace() {
				if count == values.len() {
					return Err(ParseMatError::TrailingValues);
				}
				values[count] = token.parse()?;
				count += 1;
			}
		}
		log::trace!("Read matrix {:?}", values);
		Ok(Self(values))
	}
}

/// Parse exactly four whitespace-separated numbers, in row-major order
impl FromStr for Mat22 {
	type Err = ParseMatError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut values = [0f64; 4];
		let mut tokens = s.split_whitespace();
		for (i, value) in values.iter_mut().enumerate() {
			match tokens.next() {
				Some(token) => *value = token.parse()?,
				None => return Err(ParseMatError::MissingValues { actual: i }),
			}
		}
		if tokens.next().is_some() {
			return Err(ParseMatError::TrailingValues);
		}
		Ok(Self(values))
	}
}

/// Helper returned by [Mat22::display_with]
pub struct Mat22Display<'a> {
	mat: &'a Mat22,
	config: FormatConfig,
}

impl fmt::Display for Mat22Display<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let w = self.mat.number_of_digits(self.config.min_width);
		let p = self.config.precision;
		let [a, b, c, d] = self.mat.0;
		writeln!(f, "|{:>w$.p$} {:>w$.p$}|", a, b, w = w, p = p)?;
		writeln!(f, "|{:w$}{:>w$}", "", "|", w = w)?;
		writeln!(f, "|{:>w$.p$} {:>w$.p$}|", c, d, w = w, p = p)
	}
}

impl fmt::Display for Mat22 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.display_with(FormatConfig::default()), f)
	}
}
