//! Shared application state handed to the actix handlers.

use parking_lot::Mutex;

use crate::annuaire::Annuaire;
use crate::config::AppConfig;
use crate::journal::Journal;
use crate::layout::LayoutSet;

pub struct AppState {
    pub layouts: LayoutSet,
    pub annuaire: Annuaire,
    /// The register is the one piece of mutable state; the mutex keeps a
    /// next-number/record pair from interleaving across workers.
    pub journal: Mutex<Journal>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            layouts: LayoutSet::standard(),
            annuaire: Annuaire::load_or_empty(&config.annuaire_csv),
            journal: Mutex::new(Journal::new(&config.journal_csv)),
        }
    }
}
