use scrolls_domain::{MatchCandidate, Score, Threshold, fuzzy};

fn threshold(fraction: f32) -> Threshold {
	Threshold::from_fraction(fraction).expect("valid threshold")
}

#[test]
fn substring_scores_full_marks() {
	assert_eq!(fuzzy::partial_ratio("wolf", "brother of the wolf"), Score::MAX);
	assert_eq!(fuzzy::partial_ratio("brother of the wolf", "wolf"), Score::MAX);
}

#[test]
fn equal_strings_score_full_marks() {
	assert_eq!(fuzzy::partial_ratio("burn", "burn"), Score::MAX);
	assert_eq!(fuzzy::partial_ratio("", ""), Score::MAX);
}

#[test]
fn empty_side_scores_zero() {
	assert_eq!(fuzzy::partial_ratio("", "burn"), Score::ZERO);
	assert_eq!(fuzzy::partial_ratio("burn", ""), Score::ZERO);
}

#[test]
fn scores_are_rounded_to_hundredths() {
	assert_eq!(fuzzy::partial_ratio("fox", "foo").to_string(), "66.67");
	assert_eq!(fuzzy::partial_ratio("foon", "fon").to_string(), "80.00");
}

#[test]
fn partial_ratio_is_symmetric() {
	let pairs = [
		("gravelok elder", "gravelock elder"),
		("fox", "foo"),
		("kinfolk", "kinfolk veteran"),
		("bear paw", "burn"),
		("xab", "abyyyy"),
	];

	for (a, b) in pairs {
		assert_eq!(fuzzy::partial_ratio(a, b), fuzzy::partial_ratio(b, a), "{a} vs {b}");
	}
}

#[test]
fn counts_characters_not_bytes() {
	assert_eq!(fuzzy::partial_ratio("née", "renée"), Score::MAX);
	assert_eq!(fuzzy::partial_ratio("ñ", "n"), Score::ZERO);
}

#[test]
fn typo_scores_above_default_threshold() {
	let score = fuzzy::partial_ratio("gravelok elder", "gravelock elder");

	assert!(Threshold::default().admits(score), "score was {score}");
}

#[test]
fn raising_threshold_never_adds_candidates() {
	let names = ["burn", "bear paw", "brother of the wolf", "gravelock elder", "kinfolk veteran"];
	let query = "bro";
	let mut previous: Option<Vec<&str>> = None;

	for fraction in [0.0, 0.25, 0.5, 0.7, 0.9, 1.0] {
		let entries = names.iter().map(|name| (*name, ()));
		let kept: Vec<&str> = fuzzy::score_candidates(query, entries, threshold(fraction))
			.into_iter()
			.map(|candidate| candidate.name)
			.collect();

		if let Some(previous) = previous.as_ref() {
			assert!(kept.iter().all(|name| previous.contains(name)), "{fraction}: {kept:?}");
		}

		previous = Some(kept);
	}

	assert_eq!(previous, Some(vec!["brother of the wolf"]));
}

#[test]
fn tied_best_groups_only_literal_equal_scores() {
	let candidates = [
		MatchCandidate { name: "a", score: Score::from_hundredths(9_950), item: 1 },
		MatchCandidate { name: "b", score: Score::from_hundredths(9_951), item: 2 },
		MatchCandidate { name: "c", score: Score::from_hundredths(9_951), item: 3 },
	];
	let tied = fuzzy::tied_best(&candidates);

	assert_eq!(tied.iter().map(|candidate| candidate.name).collect::<Vec<_>>(), vec!["b", "c"]);
	assert_eq!(tied.iter().map(|candidate| candidate.item).collect::<Vec<_>>(), vec![2, 3]);

	let empty: [MatchCandidate<'_>; 0] = [];

	assert!(fuzzy::tied_best(&empty).is_empty());
}
