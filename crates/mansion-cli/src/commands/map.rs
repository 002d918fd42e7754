//! Map command implementation.

use crate::error::Result;
use crate::output::Formatter;
use mansion_domain::MansionMap;

/// Execute the map command.
pub fn execute_map(formatter: &Formatter) -> Result<()> {
    let map = MansionMap::build()?;
    println!("{}", formatter.map(&map)?);
    Ok(())
}
