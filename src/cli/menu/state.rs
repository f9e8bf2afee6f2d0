//! Menu state machine
//!
//! The whole interface state is one [`App`] value. Each key press consumes
//! it and yields the next one, calling into a [`Backend`] for the file and
//! database work a transition needs.

use console::Key;
use std::io;
use std::path::Path;

use crate::core::catalog::TableCounts;
use crate::import::{Operation, UploadError, UploadSummary};

/// Synthetic last entry of the file list
pub const BACK_ENTRY: &str = "Back";

/// One line of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Upload(Operation),
    Quit,
}

impl MenuChoice {
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Upload(op) => op.label(),
            MenuChoice::Quit => "Quit",
        }
    }
}

pub const MENU_CHOICES: [MenuChoice; 6] = [
    MenuChoice::Upload(Operation::MuscleGroups),
    MenuChoice::Upload(Operation::ExerciseTypes),
    MenuChoice::Upload(Operation::Categories),
    MenuChoice::Upload(Operation::Equipment),
    MenuChoice::Upload(Operation::Exercises),
    MenuChoice::Quit,
];

/// How the last operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// The three screens, each with its own payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu {
        selected: usize,
    },
    FileSelector {
        operation: Operation,
        menu_selected: usize,
        files: Vec<String>,
        selected: usize,
    },
    Result {
        outcome: Outcome,
        message: String,
        menu_selected: usize,
    },
}

/// File and database access needed by the transitions
pub trait Backend {
    /// Directory the file picker lists
    fn data_dir(&self) -> &Path;

    /// Sorted names of the uploadable files in the data directory
    fn list_files(&self) -> io::Result<Vec<String>>;

    /// Upload one file from the data directory
    fn upload(&mut self, operation: Operation, file: &str) -> Result<UploadSummary, UploadError>;

    /// Current row counts
    fn counts(&self) -> TableCounts;
}

/// Complete interface state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub screen: Screen,
    pub counts: TableCounts,
}

/// Result of handling a key
#[derive(Debug)]
pub enum Step {
    Continue(App),
    Quit,
}

impl App {
    /// Start on the main menu with fresh counts
    pub fn new(backend: &impl Backend) -> Self {
        Self {
            screen: Screen::Menu { selected: 0 },
            counts: backend.counts(),
        }
    }

    /// Handle one key press
    pub fn update(self, key: &Key, backend: &mut impl Backend) -> Step {
        if *key == Key::CtrlC {
            return Step::Quit;
        }

        let App { screen, counts } = self;
        match screen {
            Screen::Menu { selected } => update_menu(selected, counts, key, backend),
            Screen::FileSelector {
                operation,
                menu_selected,
                files,
                selected,
            } => Step::Continue(App {
                screen: update_file_selector(operation, menu_selected, files, selected, key, backend),
                counts,
            }),
            Screen::Result {
                outcome,
                message,
                menu_selected,
            } => match key {
                Key::Enter | Key::Escape | Key::Char('q') => Step::Continue(App {
                    screen: Screen::Menu {
                        selected: menu_selected,
                    },
                    counts: backend.counts(),
                }),
                _ => Step::Continue(App {
                    screen: Screen::Result {
                        outcome,
                        message,
                        menu_selected,
                    },
                    counts,
                }),
            },
        }
    }
}

fn update_menu(selected: usize, counts: TableCounts, key: &Key, backend: &mut impl Backend) -> Step {
    let stay = |selected, counts| {
        Step::Continue(App {
            screen: Screen::Menu { selected },
            counts,
        })
    };

    match key {
        Key::ArrowUp | Key::Char('k') => stay(move_up(selected), counts),
        Key::ArrowDown | Key::Char('j') => stay(move_down(selected, MENU_CHOICES.len()), counts),
        Key::Char('r') => stay(selected, backend.counts()),
        Key::Enter => match MENU_CHOICES[selected] {
            MenuChoice::Quit => Step::Quit,
            MenuChoice::Upload(operation) => {
                let screen = match backend.list_files() {
                    Ok(mut files) => {
                        files.push(BACK_ENTRY.to_string());
                        Screen::FileSelector {
                            operation,
                            menu_selected: selected,
                            files,
                            selected: 0,
                        }
                    }
                    Err(e) => Screen::Result {
                        outcome: Outcome::Failure,
                        message: format!("Error reading {}: {}", backend.data_dir().display(), e),
                        menu_selected: selected,
                    },
                };
                Step::Continue(App { screen, counts })
            }
        },
        _ => stay(selected, counts),
    }
}

fn update_file_selector(
    operation: Operation,
    menu_selected: usize,
    files: Vec<String>,
    selected: usize,
    key: &Key,
    backend: &mut impl Backend,
) -> Screen {
    let back = Screen::Menu {
        selected: menu_selected,
    };

    match key {
        Key::ArrowUp | Key::Char('k') => Screen::FileSelector {
            operation,
            menu_selected,
            selected: move_up(selected),
            files,
        },
        Key::ArrowDown | Key::Char('j') => Screen::FileSelector {
            operation,
            menu_selected,
            selected: move_down(selected, files.len()),
            files,
        },
        Key::Escape | Key::Char('q') => back,
        // The last entry is always the synthetic "Back"
        Key::Enter if selected + 1 >= files.len() => back,
        Key::Enter => {
            let (outcome, message) = match backend.upload(operation, &files[selected]) {
                Ok(summary) => (Outcome::Success, summary.message()),
                Err(e) => (Outcome::Failure, e.to_string()),
            };
            Screen::Result {
                outcome,
                message,
                menu_selected,
            }
        }
        _ => Screen::FileSelector {
            operation,
            menu_selected,
            files,
            selected,
        },
    }
}

/// Move a highlight up, stopping at the first entry
pub fn move_up(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move a highlight down, stopping at the last of `len` entries
pub fn move_down(selected: usize, len: usize) -> usize {
    if selected + 1 < len {
        selected + 1
    } else {
        selected
    }
}
