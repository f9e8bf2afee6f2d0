//! Screen rendering

use console::style;
use std::fmt::Write;

use super::state::{App, MenuChoice, Outcome, Screen, MENU_CHOICES};

/// Width of the label column in the main menu
const LABEL_WIDTH: usize = 30;

/// Pastel pink used for the cursor and highlight
const ACCENT: u8 = 218;

/// Render the current screen as a string ready for the terminal
pub fn render(app: &App) -> String {
    let mut out = String::new();

    match &app.screen {
        Screen::Menu { selected } => {
            let _ = writeln!(out, "\n  {}\n", style("Select:").bold());
            for (i, choice) in MENU_CHOICES.iter().enumerate() {
                let label = format!("{:<width$}", choice.label(), width = LABEL_WIDTH);
                let badge = match choice {
                    MenuChoice::Upload(op) => {
                        style(format!(" [{:>3}]", op.count(&app.counts))).dim().to_string()
                    }
                    MenuChoice::Quit => String::new(),
                };
                let _ = writeln!(out, "  {} {}{}", cursor(i == *selected), item(&label, i == *selected), badge);
            }
            let _ = writeln!(
                out,
                "\n  {}",
                style("Use up/down (j/k) to move, enter to select, r to refresh counts.").dim()
            );
        }
        Screen::FileSelector { files, selected, .. } => {
            let _ = writeln!(out, "\n  {}\n", style("Pick a file to upload:").bold());
            for (i, name) in files.iter().enumerate() {
                let _ = writeln!(out, "  {} {}", cursor(i == *selected), item(name, i == *selected));
            }
            let _ = writeln!(
                out,
                "\n  {}",
                style("Use up/down (j/k) to move, enter to select, q/esc to go back.").dim()
            );
        }
        Screen::Result { outcome, message, .. } => {
            let line = match outcome {
                Outcome::Success => format!("{} {}", style("✓").green(), style(message).green()),
                Outcome::Failure => format!("{} {}", style("✗").red(), style(message).red()),
            };
            let _ = writeln!(out, "\n  {}", line);
            let _ = writeln!(
                out,
                "\n  {}",
                style("Press enter or q to return to menu.").dim()
            );
        }
    }

    out
}

fn cursor(active: bool) -> String {
    if active {
        style(">").color256(ACCENT).bold().to_string()
    } else {
        " ".to_string()
    }
}

fn item(label: &str, active: bool) -> String {
    if active {
        style(label).color256(ACCENT).bold().to_string()
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::TableCounts;
    use crate::import::Operation;

    fn plain(app: &App) -> String {
        console::strip_ansi_codes(&render(app)).into_owned()
    }

    #[test]
    fn test_menu_shows_counts_and_cursor() {
        let app = App {
            screen: Screen::Menu { selected: 3 },
            counts: TableCounts {
                equipment: 2,
                exercises: 14,
                ..Default::default()
            },
        };

        let text = plain(&app);
        assert!(text.contains("Select:"));
        assert!(text.contains("> Upload Equipments              [  2]"));
        assert!(text.contains("  Upload Exercises               [ 14]"));
        assert!(text.contains("  Quit"));
        assert!(!text.contains("Quit                           ["));
    }

    #[test]
    fn test_file_selector_lists_files() {
        let app = App {
            screen: Screen::FileSelector {
                operation: Operation::Equipment,
                menu_selected: 3,
                files: vec!["equipment.csv".into(), "Back".into()],
                selected: 1,
            },
            counts: TableCounts::default(),
        };

        let text = plain(&app);
        assert!(text.contains("Pick a file to upload:"));
        assert!(text.contains("  equipment.csv"));
        assert!(text.contains("> Back"));
        assert!(text.contains("q/esc to go back"));
    }

    #[test]
    fn test_result_shows_message_and_hint() {
        let app = App {
            screen: Screen::Result {
                outcome: Outcome::Failure,
                message: "DB error: boom".into(),
                menu_selected: 0,
            },
            counts: TableCounts::default(),
        };

        let text = plain(&app);
        assert!(text.contains("✗ DB error: boom"));
        assert!(text.contains("Press enter or q to return to menu."));
    }
}
