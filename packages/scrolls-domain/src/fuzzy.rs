use crate::score::{Score, Threshold};

/// A scored name together with whatever the caller keyed it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate<'a, T = ()> {
	pub name: &'a str,
	pub score: Score,
	pub item: T,
}

/// Normalized indel similarity in 0.0-1.0.
pub fn ratio(a: &str, b: &str) -> f64 {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();

	ratio_chars(&a, &b)
}

/// Best similarity between the shorter string and any same-sized window of the longer one,
/// including windows that only partially overlap either end.
pub fn partial_ratio(a: &str, b: &str) -> Score {
	if a == b {
		return Score::MAX;
	}

	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();

	if a.is_empty() || b.is_empty() {
		return Score::ZERO;
	}

	let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
	let span = short.len();
	let mut best = 0.0_f64;

	for start in 0..=long.len() - span {
		let window = &long[start..start + span];

		if window == short.as_slice() {
			return Score::MAX;
		}

		best = best.max(ratio_chars(short, window));
	}

	// Equal lengths have no edge windows; skipping them keeps the score symmetric.
	if long.len() > span {
		for len in 1..span {
			best = best.max(ratio_chars(short, &long[..len]));
			best = best.max(ratio_chars(short, &long[long.len() - len..]));
		}
	}

	Score::from_ratio(best)
}

/// Scores every entry's name against `query`, keeping the ones the threshold admits in input
/// order.
pub fn score_candidates<'a, T, I>(
	query: &str,
	entries: I,
	threshold: Threshold,
) -> Vec<MatchCandidate<'a, T>>
where
	I: IntoIterator<Item = (&'a str, T)>,
{
	entries
		.into_iter()
		.filter_map(|(name, item)| {
			let score = partial_ratio(query, name);

			threshold.admits(score).then_some(MatchCandidate { name, score, item })
		})
		.collect()
}

/// All candidates sharing the maximum score. Empty input yields an empty group.
pub fn tied_best<'a, T>(candidates: &[MatchCandidate<'a, T>]) -> Vec<MatchCandidate<'a, T>>
where
	T: Clone,
{
	let Some(max) = candidates.iter().map(|candidate| candidate.score).max() else {
		return Vec::new();
	};

	candidates.iter().filter(|candidate| candidate.score == max).cloned().collect()
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
	let total = a.len() + b.len();

	if total == 0 {
		return 1.0;
	}

	(2 * lcs_len(a, b)) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
	if a.is_empty() || b.is_empty() {
		return 0;
	}

	let mut prev = vec![0_usize; b.len() + 1];
	let mut curr = vec![0_usize; b.len() + 1];

	for &ca in a {
		for (j, &cb) in b.iter().enumerate() {
			curr[j + 1] = if ca == cb { prev[j] + 1 } else { prev[j + 1].max(curr[j]) };
		}

		std::mem::swap(&mut prev, &mut curr);
	}

	prev[b.len()]
}
