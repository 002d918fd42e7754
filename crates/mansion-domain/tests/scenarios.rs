//! End-to-end exploration scenarios
//!
//! Each scenario scripts the player's commands, lets the explorer run to
//! completion and judges one accusation.

use mansion_domain::{
    Command, DiscoveryPolicy, Event, Explorer, FactTable, MansionMap, Outcome, SuspectName,
    VerdictEvaluator,
};

struct Outcomes {
    clues: Vec<String>,
    events: Vec<Event>,
    total: usize,
    outcome: Outcome,
}

fn play(tokens: &[&str], accused: &str, policy: DiscoveryPolicy) -> Outcomes {
    let map = MansionMap::build().unwrap();
    let facts = FactTable::standard().unwrap();
    facts.verify_covers(&map).unwrap();

    let mut source = tokens
        .iter()
        .map(|t| Command::parse(t))
        .collect::<Vec<_>>()
        .into_iter();

    let mut explorer = Explorer::new(&map, &facts).with_policy(policy);
    let mut events = Vec::new();
    explorer
        .run(&mut source, |e| events.push(e.clone()))
        .unwrap();

    let findings = explorer.finish();
    let evaluator = VerdictEvaluator::new(&findings.ledger, &findings.index);
    let clues = evaluator.sorted_clues().map(|c| c.to_string()).collect();
    let verdict = evaluator.evaluate(&SuspectName::new(accused).unwrap());

    Outcomes {
        clues,
        events,
        total: verdict.total,
        outcome: verdict.outcome,
    }
}

#[test]
fn test_library_then_cellar_convicts_elisa() {
    let result = play(&["e", "e", "s"], "Elisa", DiscoveryPolicy::FirstVisit);

    assert_eq!(result.clues, vec!["Chave dourada", "Livro rasgado", "Taca quebrada"]);
    assert_eq!(result.total, 2);
    assert_eq!(result.outcome, Outcome::Guilty);
}

#[test]
fn test_hall_only_acquits_elisa() {
    let result = play(&["s"], "Elisa", DiscoveryPolicy::FirstVisit);

    assert_eq!(result.clues, vec!["Chave dourada"]);
    assert_eq!(result.total, 1);
    assert_eq!(result.outcome, Outcome::Innocent);
}

#[test]
fn test_kitchen_then_basement_convicts_mortimer() {
    let result = play(&["d", "d", "s"], "Mortimer", DiscoveryPolicy::FirstVisit);

    assert_eq!(result.clues, vec!["Chave dourada", "Faca suja", "Luvas queimadas"]);
    assert_eq!(result.total, 2);
    assert_eq!(result.outcome, Outcome::Guilty);
}

#[test]
fn test_study_path_acquits_clara() {
    // Documento adulterado is Clara's only clue on this path.
    let result = play(&["e", "d", "s"], "Clara", DiscoveryPolicy::FirstVisit);

    assert_eq!(result.total, 1);
    assert_eq!(result.outcome, Outcome::Innocent);
}

#[test]
fn test_walls_and_typos_do_not_move_the_explorer() {
    let result = play(&["e", "e", "e", "x", "s"], "Elisa", DiscoveryPolicy::FirstVisit);

    let notices = result
        .events
        .iter()
        .filter(|e| matches!(e, Event::NoRoom { .. }))
        .count();
    let invalid = result
        .events
        .iter()
        .filter(|e| matches!(e, Event::InvalidOption { .. }))
        .count();
    assert_eq!(notices, 1);
    assert_eq!(invalid, 1);
    assert_eq!(result.outcome, Outcome::Guilty);
}

#[test]
fn test_rediscovery_policy_does_not_change_the_verdict() {
    let tokens = ["x", "d", "q", "d", "e", "s"];
    let first = play(&tokens, "Mortimer", DiscoveryPolicy::FirstVisit);
    let every = play(&tokens, "Mortimer", DiscoveryPolicy::EveryVisit);

    assert_eq!(first.clues, every.clues);
    assert_eq!(first.total, every.total);
    assert_eq!(first.outcome, every.outcome);

    let found = |events: &[Event]| {
        events
            .iter()
            .filter(|e| matches!(e, Event::ClueFound { .. }))
            .count()
    };
    assert!(found(&every.events) > found(&first.events));
}

#[test]
fn test_input_ending_early_counts_as_quit() {
    let result = play(&["d"], "Mortimer", DiscoveryPolicy::FirstVisit);

    assert_eq!(result.events.last(), Some(&Event::Finished));
    assert_eq!(result.total, 1);
    assert_eq!(result.outcome, Outcome::Innocent);
}
