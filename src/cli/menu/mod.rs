//! Interactive upload menu
//!
//! [`state`] holds the pure state machine, [`view`] turns it into text and
//! [`run`] drives both from terminal key presses.

pub mod state;
pub mod view;

pub use state::{App, Backend, MenuChoice, Outcome, Screen, Step, BACK_ENTRY, MENU_CHOICES};
pub use view::render;

use console::{Key, Term};
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::catalog::{Catalog, TableCounts};
use crate::import::{self, Operation, UploadError, UploadSummary};

/// Live backend: the catalog plus the data directory files come from
pub struct Session {
    catalog: Catalog,
    data_dir: PathBuf,
}

impl Session {
    pub fn new(catalog: Catalog, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            data_dir: data_dir.into(),
        }
    }
}

impl Backend for Session {
    fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn list_files(&self) -> io::Result<Vec<String>> {
        import::list_data_files(&self.data_dir)
    }

    fn upload(&mut self, operation: Operation, file: &str) -> Result<UploadSummary, UploadError> {
        import::upload(&mut self.catalog, operation, &self.data_dir.join(file))
    }

    fn counts(&self) -> TableCounts {
        self.catalog.counts()
    }
}

/// Run the menu until the user quits
pub fn run(session: &mut Session) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(miette::miette!(
            "The upload menu needs an interactive terminal"
        ));
    }

    let app = App::new(&*session);
    term.hide_cursor().into_diagnostic()?;

    // Raw reads deliver ^C as a key so the loop can exit and restore the cursor
    let result = drive(app, session, |app| draw(&term, app), || term.read_key_raw());

    let _ = term.clear_screen();
    let _ = term.show_cursor();
    info!("menu closed");

    result.into_diagnostic()
}

/// Draw, read a key and apply it until the state machine quits
fn drive<B: Backend>(
    mut app: App,
    backend: &mut B,
    mut draw: impl FnMut(&App) -> io::Result<()>,
    mut next_key: impl FnMut() -> io::Result<Key>,
) -> io::Result<()> {
    loop {
        draw(&app)?;
        let key = next_key()?;

        match app.update(&key, backend) {
            Step::Continue(next) => app = next,
            Step::Quit => return Ok(()),
        }
    }
}

fn draw(term: &Term, app: &App) -> io::Result<()> {
    term.clear_screen()?;
    term.write_str(&render(app))
}
