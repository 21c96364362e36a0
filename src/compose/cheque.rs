//! Cheque composer.
//!
//! The cheque leaf carries the payee, the figure amount, the amount in
//! words on up to two lines (the second line starting at the conjunction),
//! the city and the issue date. No number is allocated for cheques.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::format_french_date;
use super::validation::{validate_date, validate_required, ValidationErrors};
use super::{epeler, ComposeError, ComposedDocument, FieldResolver};
use crate::layout::{DocumentType, LayoutSet};
use crate::montant::{format_montant, parse_montant};

/// Template fields a cheque cannot be produced without; checked at startup.
pub const CHAMPS_GABARIT: &[&str] = &[
    "beneficiaire",
    "montant",
    "montant_lettres_1",
    "ville",
    "date",
];

const MAX_LIGNES_LETTRES: usize = 2;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ChequeRequest {
    pub beneficiaire: String,
    /// Raw amount text, e.g. "125000,50" or "#125 000,50".
    pub montant: String,
    #[serde(default)]
    pub ville: String,
    /// jj/mm/aaaa; today when absent.
    #[serde(default)]
    pub date: Option<String>,
}

impl ChequeRequest {
    pub fn validate(&self) -> Result<(), ComposeError> {
        let mut erreurs = ValidationErrors::new();
        validate_required(&self.beneficiaire, "beneficiaire", "Bénéficiaire", &mut erreurs);
        validate_required(&self.montant, "montant", "Montant", &mut erreurs);
        if let Some(ref date) = self.date {
            validate_date(date, "date", &mut erreurs);
        }
        erreurs.into_result().map_err(ComposeError::from)
    }
}

pub fn compose_cheque(
    request: &ChequeRequest,
    layouts: &LayoutSet,
) -> Result<ComposedDocument, ComposeError> {
    request.validate()?;

    let montant = parse_montant(&request.montant)?;
    let lettres = epeler(&montant)?;
    let date = request
        .date
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(format_french_date);

    let template = layouts.for_kind(DocumentType::Cheque);
    let resolver = FieldResolver::new(template);
    let mut champs = Vec::new();

    if let Some(rendu) = resolver.place("beneficiaire", &request.beneficiaire)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("montant", &format_montant(&montant))? {
        champs.push(rendu);
    }
    resolver.place_words_lines(&lettres, MAX_LIGNES_LETTRES, &mut champs)?;
    if let Some(rendu) = resolver.place("ville", &request.ville)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("date", &date)? {
        champs.push(rendu);
    }

    Ok(ComposedDocument {
        id: Uuid::new_v4(),
        kind: DocumentType::Cheque,
        page: template.page,
        numero: None,
        champs,
        ecriture: None,
    })
}
