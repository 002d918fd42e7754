//! Verdict evaluation
//!
//! An accusation holds when at least [`GUILT_THRESHOLD`] of the discovered
//! clues implicate the accused.

use crate::{ClueLedger, ClueText, SuspectIndex, SuspectName};
use std::fmt;
use tracing::info;

/// Minimum number of clues that must point at the accused
pub const GUILT_THRESHOLD: usize = 2;

/// Outcome of an accusation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Enough clues implicate the accused
    Guilty,

    /// Too few clues implicate the accused
    Innocent,
}

impl Outcome {
    /// Get the outcome as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Guilty => "guilty",
            Outcome::Innocent => "innocent",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Judgement on one accusation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Who was accused
    pub accused: SuspectName,

    /// How many discovered clues implicate them
    pub total: usize,

    /// The decision
    pub outcome: Outcome,
}

impl Verdict {
    /// Whether the accusation was upheld
    pub fn is_guilty(&self) -> bool {
        self.outcome == Outcome::Guilty
    }
}

/// Judges accusations against the clues of one exploration
pub struct VerdictEvaluator<'a> {
    ledger: &'a ClueLedger,
    index: &'a SuspectIndex,
}

impl<'a> VerdictEvaluator<'a> {
    /// Create an evaluator over the final ledger and index
    pub fn new(ledger: &'a ClueLedger, index: &'a SuspectIndex) -> Self {
        Self { ledger, index }
    }

    /// Discovered clues in alphabetical order
    pub fn sorted_clues(&self) -> impl Iterator<Item = &'a ClueText> + 'a {
        self.ledger.iter()
    }

    /// Judge an accusation
    pub fn evaluate(&self, accused: &SuspectName) -> Verdict {
        let total = self.ledger.count_for_suspect(accused.as_str(), self.index);
        let outcome = if total >= GUILT_THRESHOLD {
            Outcome::Guilty
        } else {
            Outcome::Innocent
        };
        info!(accused = %accused, total, %outcome, "accusation judged");

        Verdict {
            accused: accused.clone(),
            total,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ledger: &mut ClueLedger, index: &mut SuspectIndex, clue: &str, suspect: &str) {
        ledger.insert(ClueText::new(clue).unwrap());
        index.insert(ClueText::new(clue).unwrap(), SuspectName::new(suspect).unwrap());
    }

    fn name(s: &str) -> SuspectName {
        SuspectName::new(s).unwrap()
    }

    #[test]
    fn test_threshold() {
        let mut ledger = ClueLedger::new();
        let mut index = SuspectIndex::new();
        record(&mut ledger, &mut index, "Chave dourada", "Elisa");

        let evaluator = VerdictEvaluator::new(&ledger, &index);
        let verdict = evaluator.evaluate(&name("Elisa"));
        assert_eq!(verdict.total, 1);
        assert_eq!(verdict.outcome, Outcome::Innocent);

        record(&mut ledger, &mut index, "Taca quebrada", "Elisa");
        let evaluator = VerdictEvaluator::new(&ledger, &index);
        let verdict = evaluator.evaluate(&name("Elisa"));
        assert_eq!(verdict.total, 2);
        assert!(verdict.is_guilty());
    }

    #[test]
    fn test_unknown_suspect_is_innocent() {
        let mut ledger = ClueLedger::new();
        let mut index = SuspectIndex::new();
        record(&mut ledger, &mut index, "Faca suja", "Mortimer");
        record(&mut ledger, &mut index, "Luvas queimadas", "Mortimer");

        let verdict = VerdictEvaluator::new(&ledger, &index).evaluate(&name("Ninguem"));
        assert_eq!(verdict.total, 0);
        assert_eq!(verdict.outcome, Outcome::Innocent);
    }

    #[test]
    fn test_accusation_is_case_sensitive() {
        let mut ledger = ClueLedger::new();
        let mut index = SuspectIndex::new();
        record(&mut ledger, &mut index, "Faca suja", "Mortimer");
        record(&mut ledger, &mut index, "Luvas queimadas", "Mortimer");

        let verdict = VerdictEvaluator::new(&ledger, &index).evaluate(&name("mortimer"));
        assert_eq!(verdict.total, 0);
    }

    #[test]
    fn test_sorted_clues() {
        let mut ledger = ClueLedger::new();
        let mut index = SuspectIndex::new();
        record(&mut ledger, &mut index, "Luvas queimadas", "Mortimer");
        record(&mut ledger, &mut index, "Faca suja", "Mortimer");

        let evaluator = VerdictEvaluator::new(&ledger, &index);
        let clues: Vec<&str> = evaluator.sorted_clues().map(|c| c.as_str()).collect();
        assert_eq!(clues, vec!["Faca suja", "Luvas queimadas"]);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Guilty.to_string(), "guilty");
        assert_eq!(Outcome::Innocent.to_string(), "innocent");
    }
}
