//! Journal module - the append-only register of issued virements.
//!
//! One CSV file, one row per issued transfer order, never mutated. The next
//! number for a year is recovered by scanning the register; any read
//! problem (missing file, broken CSV, renamed column) degrades to "start at
//! 001" with a warning instead of blocking issuance.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Column holding the order number, needed for number recovery.
const COLONNE_ORDRE: &str = "ORDRE_VIREMENT";

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("écriture du journal impossible: {0}")]
    Io(#[from] std::io::Error),
    #[error("écriture du journal impossible: {0}")]
    Csv(#[from] csv::Error),
}

/// One immutable row of the register.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EcritureJournal {
    #[serde(rename = "DATE")]
    pub date: String,
    #[serde(rename = "ORDRE_VIREMENT")]
    pub ordre: String,
    #[serde(rename = "BENEFICIAIRE")]
    pub beneficiaire: String,
    #[serde(rename = "MONTANT")]
    pub montant: String,
    #[serde(rename = "MONTANT_LETTRES")]
    pub montant_lettres: String,
    #[serde(rename = "TYPE")]
    pub type_virement: String,
    #[serde(rename = "RIB")]
    pub rib: String,
    #[serde(rename = "BANQUE")]
    pub banque: String,
    #[serde(rename = "VILLE")]
    pub ville: String,
}

/// Handle on the register file. Creation is deferred to the first append.
#[derive(Debug)]
pub struct Journal {
    chemin: PathBuf,
}

impl Journal {
    pub fn new(chemin: impl AsRef<Path>) -> Self {
        Self {
            chemin: chemin.as_ref().to_path_buf(),
        }
    }

    pub fn chemin(&self) -> &Path {
        &self.chemin
    }

    /// Last ordinal issued for `annee`, 0 when the year has no entry yet.
    ///
    /// Any read failure falls back to 0 with a warning: the operator keeps
    /// issuing documents even with a damaged register, at the cost of a
    /// restarted sequence.
    pub fn last_ordinal(&self, annee: i32) -> u32 {
        match self.scan_last_ordinal(annee) {
            Ok(ordinal) => ordinal,
            Err(e) => {
                log::warn!(
                    "journal {} illisible, numérotation reprise à 001: {}",
                    self.chemin.display(),
                    e
                );
                0
            }
        }
    }

    /// Next order number for `annee`, formatted `annee/NNN`.
    pub fn next_number(&self, annee: i32) -> String {
        format!("{}/{:03}", annee, self.last_ordinal(annee) + 1)
    }

    /// Append one row, writing the header first when the register is absent
    /// or still empty. A touched 0-byte file counts as new: appending a
    /// headerless row there would be swallowed as the header by the next
    /// scan and the same number issued twice.
    pub fn record(&self, ecriture: &EcritureJournal) -> Result<(), JournalError> {
        let nouveau = self
            .chemin
            .metadata()
            .map(|m| m.len() == 0)
            .unwrap_or(true);
        if let (true, Some(parent)) = (nouveau, self.chemin.parent()) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let fichier = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.chemin)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(nouveau)
            .from_writer(fichier);
        writer.serialize(ecriture)?;
        writer.flush()?;
        Ok(())
    }

    fn scan_last_ordinal(&self, annee: i32) -> Result<u32, JournalError> {
        let mut reader = csv::Reader::from_path(&self.chemin)?;
        let index_ordre = reader
            .headers()?
            .iter()
            .position(|h| h == COLONNE_ORDRE)
            .ok_or_else(|| {
                JournalError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("colonne {} absente", COLONNE_ORDRE),
                ))
            })?;

        let prefixe = format!("{}/", annee);
        let mut dernier = 0u32;
        for enregistrement in reader.records() {
            let enregistrement = enregistrement?;
            let Some(ordre) = enregistrement.get(index_ordre) else {
                continue;
            };
            if let Some(reste) = ordre.strip_prefix(&prefixe) {
                if let Ok(ordinal) = reste.parse::<u32>() {
                    dernier = ordinal;
                }
            }
        }
        Ok(dernier)
    }
}
