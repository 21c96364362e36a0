//! Process configuration, read once at startup from the environment.

use std::env;
use std::path::PathBuf;

const ANNUAIRE_DEFAUT: &str = "./data/beneficiaires.csv";
const JOURNAL_DEFAUT: &str = "./data/virements.csv";
const PORT_DEFAUT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Payee directory CSV (read-only reference data).
    pub annuaire_csv: PathBuf,
    /// Virement register CSV (append-only).
    pub journal_csv: PathBuf,
    pub port: u16,
}

impl AppConfig {
    /// Read the configuration from the environment, falling back to the
    /// defaults with a log line so the operator sees what is in use.
    pub fn from_env() -> Self {
        let annuaire_csv = env::var("ANNUAIRE_CSV").unwrap_or_else(|_| {
            log::info!("ANNUAIRE_CSV non défini, utilisation de {}", ANNUAIRE_DEFAUT);
            ANNUAIRE_DEFAUT.to_string()
        });
        let journal_csv = env::var("JOURNAL_CSV").unwrap_or_else(|_| {
            log::info!("JOURNAL_CSV non défini, utilisation de {}", JOURNAL_DEFAUT);
            JOURNAL_DEFAUT.to_string()
        });
        let port = env::var("PORT")
            .ok()
            .and_then(|v| {
                v.parse()
                    .map_err(|_| log::warn!("PORT invalide: {v}, utilisation de {PORT_DEFAUT}"))
                    .ok()
            })
            .unwrap_or(PORT_DEFAUT);

        Self {
            annuaire_csv: PathBuf::from(annuaire_csv),
            journal_csv: PathBuf::from(journal_csv),
            port,
        }
    }
}
