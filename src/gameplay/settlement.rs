use super::seat::Seat;
use crate::Score;

/// Immutable round-end record: produced once on entering ENDED, never
/// touched again until the next deal discards it.
///
/// Lower total wins. On a tie the cabo caller loses it (the penalty
/// for a call that did not hold up); a tie with no caller on record is
/// declared a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub winner: String,
    pub scores: Vec<(String, Score)>,
}

impl From<(&[Seat], Option<usize>)> for Settlement {
    fn from((seats, caller): (&[Seat], Option<usize>)) -> Self {
        let scores = seats
            .iter()
            .map(|seat| (seat.name().to_string(), seat.score()))
            .collect::<Vec<_>>();
        let winner = match scores[0].1.cmp(&scores[1].1) {
            std::cmp::Ordering::Less => scores[0].0.clone(),
            std::cmp::Ordering::Greater => scores[1].0.clone(),
            std::cmp::Ordering::Equal => match caller {
                Some(caller) => scores[1 - caller].0.clone(),
                None => format!("{} & {}", scores[0].0, scores[1].0),
            },
        };
        Self { winner, scores }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let lines = self
            .scores
            .iter()
            .map(|(name, score)| format!("{}: {}", name, score))
            .collect::<Vec<_>>()
            .join(" | ");
        write!(f, "winner {} ({})", self.winner, lines)
    }
}
