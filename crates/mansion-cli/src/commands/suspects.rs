//! Suspects command implementation.

use crate::error::Result;
use crate::output::Formatter;
use mansion_domain::FactTable;

/// Execute the suspects command.
pub fn execute_suspects(formatter: &Formatter) -> Result<()> {
    let facts = FactTable::standard()?;
    println!("{}", formatter.suspects(&facts.suspects())?);
    Ok(())
}
