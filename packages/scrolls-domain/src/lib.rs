pub mod fuzzy;
pub mod score;
pub mod scroll;

pub use fuzzy::{MatchCandidate, partial_ratio, ratio, score_candidates, tied_best};
pub use score::{Score, Threshold};
pub use scroll::Scroll;
