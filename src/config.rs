/// Options controlling how a [Mat22](crate::Mat22) and its
/// [eigenvalues](crate::Eigenvalue) are rendered as text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatConfig {
	/// Digits printed after the decimal point
	pub precision: usize,
	/// Field width used when the largest element is smaller than 1.
	///
	/// Each power of ten in the largest element widens every field by one.
	pub min_width: usize,
}

impl FormatConfig {
	/// Two decimals, minimum field width of four
	pub const fn new() -> Self {
		Self {
			precision: 2,
			min_width: 4,
		}
	}

	/// Set the number of digits printed after the decimal point
	pub const fn with_precision(mut self, precision: usize) -> Self {
		self.precision = precision;
		self
	}

	/// Set the base field width
	pub const fn with_min_width(mut self, min_width: usize) -> Self {
		self.min_width = min_width;
		self
	}
}

impl Default for FormatConfig {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod test {
	use super::FormatConfig;

	#[test]
	fn defaults() {
		let config = FormatConfig::default();
		assert_eq!(config.precision, 2);
		assert_eq!(config.min_width, 4);
	}

	#[test]
	fn builder() {
		let config = FormatConfig::new()
			.with_precision(4)
			.with_min_width(6);
		assert_eq!(config, FormatConfig { precision: 4, min_width: 6 });
	}
}
