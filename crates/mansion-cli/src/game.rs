//! One full game: exploration followed by a single accusation.

use crate::config::{ExplorationSettings, OutputFormat};
use crate::error::{CliError, Result};
use crate::input::{LineReader, TokenInput, ACCUSE_PROMPT};
use crate::output::Formatter;
use mansion_domain::{
    ClueText, DiscoveryPolicy, Explorer, FactTable, MansionMap, SuspectIndex, SuspectName, Verdict,
    VerdictEvaluator,
};
use std::io::Write;
use tracing::{debug, info, warn};

/// Options of one game.
#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    /// Exploration rules
    pub exploration: ExplorationSettings,

    /// Accused name given up front; asked for at the end otherwise
    pub accused: Option<String>,
}

/// Everything a finished game produced.
#[derive(Debug, Clone)]
pub struct GameReport {
    /// Discovered clues in alphabetical order
    pub clues: Vec<ClueText>,

    /// The judgement
    pub verdict: Verdict,
}

/// Play one game, reading from `input` and narrating to `out`.
pub fn play<R: LineReader>(
    input: &mut TokenInput<R>,
    formatter: &Formatter,
    out: &mut dyn Write,
    options: &GameOptions,
) -> Result<GameReport> {
    let map = MansionMap::build()?;
    let facts = FactTable::standard()?;
    facts.verify_covers(&map)?;

    let policy: DiscoveryPolicy = options.exploration.discovery.into();
    let index = SuspectIndex::with_buckets(options.exploration.index_buckets)?;
    info!(?policy, buckets = index.bucket_count(), "starting exploration");

    let mut explorer = Explorer::new(&map, &facts)
        .with_policy(policy)
        .with_index(index);

    // The event callback cannot return errors, so the first write failure is
    // parked here and reported once exploration stops.
    let mut write_error = None;
    explorer.run(input, |event| {
        if write_error.is_some() {
            return;
        }
        if let Some(line) = formatter.event(event) {
            if let Err(e) = writeln!(out, "{}", line) {
                write_error = Some(e);
            }
        }
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    let findings = explorer.finish();
    debug!(
        visited = findings.visited.len(),
        clues = findings.ledger.len(),
        longest_chain = findings.index.longest_chain(),
        "exploration finished"
    );

    let evaluator = VerdictEvaluator::new(&findings.ledger, &findings.index);
    let clues: Vec<&ClueText> = evaluator.sorted_clues().collect();
    if let Some(list) = formatter.clue_list(&clues) {
        write!(out, "{}", list)?;
    }
    out.flush()?;

    let accused = match &options.accused {
        Some(name) => SuspectName::new(name.as_str()).map_err(|e| {
            CliError::InvalidInput(format!(
                "accused name must be 1 to {} bytes: {}",
                SuspectName::max_len(),
                e
            ))
        })?,
        None => ask_accused(input, formatter, out)?,
    };

    let verdict = evaluator.evaluate(&accused);
    writeln!(out, "{}", formatter.verdict(&verdict, &clues)?)?;

    Ok(GameReport {
        clues: clues.into_iter().cloned().collect(),
        verdict,
    })
}

/// Ask until a valid name is given or input ends.
fn ask_accused<R: LineReader>(
    input: &mut TokenInput<R>,
    formatter: &Formatter,
    out: &mut dyn Write,
) -> Result<SuspectName> {
    loop {
        let Some(token) = input.next_token(ACCUSE_PROMPT)? else {
            return Err(CliError::Aborted);
        };
        match SuspectName::new(token) {
            Ok(name) => return Ok(name),
            // Only narrated output may carry the complaint; json and quiet
            // keep stdout to the final report.
            Err(e) if formatter.format() == OutputFormat::Table => {
                writeln!(out, "{}", formatter.error(&e.to_string()))?
            }
            Err(e) => warn!(error = %e, "accused name rejected, asking again"),
        }
    }
}
