//! Annuaire module - read-only payee reference data.
//!
//! A CSV file with a fixed column order: name, RIB, bank, city. The file
//! belongs to the back office; this module only loads it once and answers
//! case-insensitive lookups. Missing trailing columns give absent fields,
//! never an error.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AnnuaireError {
    #[error("lecture de l'annuaire impossible: {0}")]
    Io(#[from] std::io::Error),
    #[error("lecture de l'annuaire impossible: {0}")]
    Csv(#[from] csv::Error),
}

/// One payee record, as auto-fill data for the form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Beneficiaire {
    pub nom: String,
    pub rib: Option<String>,
    pub banque: Option<String>,
    pub ville: Option<String>,
}

/// In-memory payee directory, keyed by lowercased name.
#[derive(Debug, Default)]
pub struct Annuaire {
    entrees: HashMap<String, Beneficiaire>,
}

fn colonne(enregistrement: &csv::StringRecord, index: usize) -> Option<String> {
    enregistrement
        .get(index)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Annuaire {
    pub fn vide() -> Self {
        Self::default()
    }

    /// Load the directory from `chemin`.
    pub fn load(chemin: impl AsRef<Path>) -> Result<Self, AnnuaireError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(chemin.as_ref())?;

        let mut entrees = HashMap::new();
        for enregistrement in reader.records() {
            let enregistrement = enregistrement?;
            let Some(nom) = colonne(&enregistrement, 0) else {
                continue;
            };
            let beneficiaire = Beneficiaire {
                rib: colonne(&enregistrement, 1),
                banque: colonne(&enregistrement, 2),
                ville: colonne(&enregistrement, 3),
                nom: nom.clone(),
            };
            entrees.insert(nom.to_lowercase(), beneficiaire);
        }
        Ok(Self { entrees })
    }

    /// Load, degrading to an empty directory with a warning when the file
    /// is absent or unreadable. A missing directory only disables
    /// auto-fill; it never blocks document generation.
    pub fn load_or_empty(chemin: impl AsRef<Path>) -> Self {
        let chemin = chemin.as_ref();
        match Self::load(chemin) {
            Ok(annuaire) => {
                log::info!(
                    "annuaire chargé: {} bénéficiaires depuis {}",
                    annuaire.len(),
                    chemin.display()
                );
                annuaire
            }
            Err(e) => {
                log::warn!(
                    "annuaire {} indisponible, auto-remplissage désactivé: {}",
                    chemin.display(),
                    e
                );
                Self::vide()
            }
        }
    }

    /// Case-insensitive exact lookup.
    pub fn lookup(&self, nom: &str) -> Option<&Beneficiaire> {
        self.entrees.get(nom.trim().to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
