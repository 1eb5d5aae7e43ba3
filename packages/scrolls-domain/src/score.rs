use std::fmt;

const SCALE: f64 = 10_000.0;
const MAX_HUNDREDTHS: u32 = 10_000;

/// Similarity on the 0-100 scale, kept as whole hundredths so that scores rounded to two
/// decimals compare exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);
impl Score {
	pub const MAX: Self = Self(MAX_HUNDREDTHS);
	pub const ZERO: Self = Self(0);

	/// `ratio` is a similarity in 0.0-1.0.
	pub fn from_ratio(ratio: f64) -> Self {
		if !ratio.is_finite() || ratio <= 0.0 {
			return Self::ZERO;
		}

		Self(((ratio * SCALE).round() as u32).min(MAX_HUNDREDTHS))
	}

	pub fn from_hundredths(hundredths: u32) -> Self {
		Self(hundredths.min(MAX_HUNDREDTHS))
	}

	pub fn hundredths(self) -> u32 {
		self.0
	}

	pub fn as_f64(self) -> f64 {
		f64::from(self.0) / 100.0
	}
}
impl fmt::Display for Score {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(Score);
impl Threshold {
	/// Returns `None` unless `fraction` is finite and within 0.0-1.0.
	pub fn from_fraction(fraction: f32) -> Option<Self> {
		if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
			return None;
		}

		Some(Self(Score::from_hundredths((f64::from(fraction) * SCALE).round() as u32)))
	}

	pub fn score(self) -> Score {
		self.0
	}

	pub fn admits(self, score: Score) -> bool {
		score >= self.0
	}
}
impl Default for Threshold {
	fn default() -> Self {
		Self(Score::from_hundredths(7_000))
	}
}
impl fmt::Display for Threshold {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}
