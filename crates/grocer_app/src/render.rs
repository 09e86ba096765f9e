use std::io::{self, Write};

use grocer_core::{Effect, FrequencyTable};

pub const MENU_TITLE: &str = "Corner Grocer Inventory Menu";

/// Write the operator-facing text for one effect.
pub fn render<W: Write>(out: &mut W, table: &FrequencyTable, effect: &Effect) -> io::Result<()> {
    match effect {
        Effect::ShowMenu => {
            writeln!(out)?;
            writeln!(out, "{MENU_TITLE}")?;
            writeln!(out, "1. Find Item Frequency")?;
            writeln!(out, "2. Print All Frequencies")?;
            writeln!(out, "3. Print Histogram")?;
            writeln!(out, "4. Exit")?;
            write!(out, "Enter your choice: ")?;
        }
        Effect::PromptItem => write!(out, "Enter item to search: ")?,
        Effect::ReportFrequency { item, count } => {
            writeln!(out, "Frequency of {item}: {count}")?;
        }
        Effect::ListAll => {
            for (item, count) in table.list_all() {
                writeln!(out, "{item} {count}")?;
            }
        }
        Effect::Histogram => {
            for line in table.histogram() {
                writeln!(out, "{line}")?;
            }
        }
        Effect::InvalidInput => writeln!(out, "Invalid input. Please enter a number.")?,
        Effect::InvalidChoice => writeln!(out, "Invalid choice. Please try again.")?,
        Effect::Farewell => writeln!(out, "Exiting program.")?,
        // Input-side effects; the loop handles them.
        Effect::DiscardLine | Effect::Unread(_) => {}
    }
    out.flush()
}
