//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use mansion_domain::{ClueText, Direction, Event, MansionMap, SuspectName, Verdict};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Narrate an exploration event.
    ///
    /// Only the table format narrates; the others print a final report.
    pub fn event(&self, event: &Event) -> Option<String> {
        if self.format != OutputFormat::Table {
            return None;
        }
        let line = match event {
            Event::Entered { room } => {
                format!("\nVocê está em: {}", self.colorize(room.as_str(), "cyan"))
            }
            Event::ClueFound { clue, .. } => {
                format!("Você encontrou a pista: {}", self.colorize(clue.as_str(), "magenta"))
            }
            Event::NoRoom { direction } => self.warning(match direction {
                Direction::Left => "Não há sala à esquerda.",
                Direction::Right => "Não há sala à direita.",
            }),
            Event::InvalidOption { input } => self.warning(&format!("Opção inválida: '{}'.", input)),
            Event::Finished => self.info("Fim da exploração."),
        };
        Some(line)
    }

    /// Header of the judgement with the sorted clue list.
    pub fn clue_list(&self, clues: &[&ClueText]) -> Option<String> {
        if self.format != OutputFormat::Table {
            return None;
        }
        let mut out = String::from("\n=== JULGAMENTO FINAL ===\nPistas coletadas:\n\n");
        if clues.is_empty() {
            out.push_str(&self.colorize("(nenhuma pista)", "yellow"));
            out.push('\n');
        }
        for clue in clues {
            out.push_str(&format!("- {}\n", clue));
        }
        Some(out)
    }

    /// Format the verdict together with the clues it was based on.
    pub fn verdict(&self, verdict: &Verdict, clues: &[&ClueText]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "clues": clues.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                    "accused": verdict.accused.as_str(),
                    "total": verdict.total,
                    "verdict": verdict.outcome.as_str(),
                });
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Quiet => Ok(verdict.outcome.as_str().to_string()),
            OutputFormat::Table => {
                let count = format!(
                    "\nTotal de pistas apontando para {}: {}\n",
                    verdict.accused, verdict.total
                );
                let line = if verdict.is_guilty() {
                    self.success(&format!(
                        "Acusação válida! {} é o verdadeiro culpado!",
                        verdict.accused
                    ))
                } else {
                    self.error(&format!(
                        "Acusação insuficiente! {} é inocente...",
                        verdict.accused
                    ))
                };
                Ok(format!("{}\n{}", count, line))
            }
        }
    }

    /// Format the mansion layout.
    pub fn map(&self, map: &MansionMap) -> Result<String> {
        let child = |id: Option<mansion_domain::RoomId>| {
            id.map(|id| map.name(id).to_string()).unwrap_or_else(|| "-".to_string())
        };

        match self.format {
            OutputFormat::Json => {
                let rooms: Vec<serde_json::Value> = map
                    .iter()
                    .map(|(_, room)| {
                        serde_json::json!({
                            "room": room.name.as_str(),
                            "left": room.left.map(|id| map.name(id).as_str()),
                            "right": room.right.map(|id| map.name(id).as_str()),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rooms)?)
            }
            OutputFormat::Quiet => Ok(map
                .iter()
                .map(|(_, room)| room.name.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Sala", "Esquerda", "Direita"]);
                for (_, room) in map.iter() {
                    builder.push_record([room.name.to_string(), child(room.left), child(room.right)]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format the list of suspects.
    pub fn suspects(&self, suspects: &[&SuspectName]) -> Result<String> {
        let names: Vec<&str> = suspects.iter().map(|s| s.as_str()).collect();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&names)?),
            OutputFormat::Quiet => Ok(names.join("\n")),
            OutputFormat::Table => Ok(names
                .iter()
                .map(|name| format!("- {}", name))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✔ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✘ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(message, "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mansion_domain::{Outcome, RoomName};

    fn clue(text: &str) -> ClueText {
        ClueText::new(text).unwrap()
    }

    fn verdict(outcome: Outcome, total: usize) -> Verdict {
        Verdict {
            accused: SuspectName::new("Elisa").unwrap(),
            total,
            outcome,
        }
    }

    #[test]
    fn test_event_narration() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let entered = Event::Entered {
            room: RoomName::new("Hall").unwrap(),
        };
        assert_eq!(formatter.event(&entered).unwrap(), "\nVocê está em: Hall");

        let wall = Event::NoRoom {
            direction: Direction::Right,
        };
        assert_eq!(formatter.event(&wall).unwrap(), "Não há sala à direita.");
    }

    #[test]
    fn test_json_suppresses_narration() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert!(formatter.event(&Event::Finished).is_none());
        assert!(formatter.clue_list(&[]).is_none());
    }

    #[test]
    fn test_clue_list() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let a = clue("Chave dourada");
        let b = clue("Taca quebrada");
        let out = formatter.clue_list(&[&a, &b]).unwrap();
        assert!(out.contains("- Chave dourada\n- Taca quebrada\n"));

        let empty = formatter.clue_list(&[]).unwrap();
        assert!(empty.contains("(nenhuma pista)"));
    }

    #[test]
    fn test_table_verdict() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let out = formatter.verdict(&verdict(Outcome::Guilty, 2), &[]).unwrap();
        assert!(out.contains("Total de pistas apontando para Elisa: 2"));
        assert!(out.contains("✔ Acusação válida! Elisa é o verdadeiro culpado!"));

        let out = formatter.verdict(&verdict(Outcome::Innocent, 1), &[]).unwrap();
        assert!(out.contains("✘ Acusação insuficiente! Elisa é inocente..."));
    }

    #[test]
    fn test_json_verdict() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let a = clue("Chave dourada");
        let out = formatter.verdict(&verdict(Outcome::Innocent, 1), &[&a]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["accused"], "Elisa");
        assert_eq!(value["total"], 1);
        assert_eq!(value["verdict"], "innocent");
        assert_eq!(value["clues"][0], "Chave dourada");
    }

    #[test]
    fn test_quiet_verdict() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let out = formatter.verdict(&verdict(Outcome::Guilty, 3), &[]).unwrap();
        assert_eq!(out, "guilty");
    }

    #[test]
    fn test_map_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let map = MansionMap::build().unwrap();
        let out = formatter.map(&map).unwrap();
        assert!(out.contains("Sala"));
        assert!(out.contains("Biblioteca"));
        assert!(out.contains("Escritorio"));
    }

    #[test]
    fn test_map_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let map = MansionMap::build().unwrap();
        let value: serde_json::Value = serde_json::from_str(&formatter.map(&map).unwrap()).unwrap();
        assert_eq!(value[0]["room"], "Hall");
        assert_eq!(value[0]["left"], "Biblioteca");
        assert_eq!(value[2]["room"], "Adega");
        assert!(value[2]["left"].is_null());
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✔ test");
    }
}
