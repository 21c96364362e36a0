//! Virement (transfer order) composer.
//!
//! The only numbered document kind. Composition allocates the next
//! `annee/NNN` number from the journal and prepares the register row, but
//! the row is committed by the caller only after the rendering surface
//! reports success.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::{current_year, format_french_date};
use super::validation::{validate_required, validate_rib, ValidationErrors};
use super::{epeler, ComposeError, ComposedDocument, FieldResolver};
use crate::annuaire::Annuaire;
use crate::journal::{EcritureJournal, Journal};
use crate::layout::{DocumentType, LayoutSet};
use crate::montant::{format_montant, parse_montant};

/// Template fields a virement cannot be produced without.
pub const CHAMPS_GABARIT: &[&str] = &[
    "numero",
    "montant",
    "montant_lettres_1",
    "beneficiaire",
    "type",
    "motif",
    "rib",
    "banque",
    "ville",
];

const MAX_LIGNES_LETTRES: usize = 3;

fn type_ordinaire() -> String {
    "Ordinaire".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VirementRequest {
    pub beneficiaire: String,
    pub montant: String,
    /// "Ordinaire" or "Instantané".
    #[serde(rename = "type", default = "type_ordinaire")]
    pub type_virement: String,
    #[serde(default)]
    pub motif: String,
    /// Filled from the annuaire when blank.
    #[serde(default)]
    pub rib: String,
    #[serde(default)]
    pub banque: String,
    #[serde(default)]
    pub ville: String,
}

impl Default for VirementRequest {
    fn default() -> Self {
        Self {
            beneficiaire: String::new(),
            montant: String::new(),
            type_virement: type_ordinaire(),
            motif: String::new(),
            rib: String::new(),
            banque: String::new(),
            ville: String::new(),
        }
    }
}

impl VirementRequest {
    pub fn validate(&self) -> Result<(), ComposeError> {
        let mut erreurs = ValidationErrors::new();
        validate_required(&self.beneficiaire, "beneficiaire", "Bénéficiaire", &mut erreurs);
        validate_required(&self.montant, "montant", "Montant", &mut erreurs);
        validate_rib(&self.rib, "rib", &mut erreurs);
        erreurs.into_result().map_err(ComposeError::from)
    }
}

/// Take the request value, or the annuaire's when the form left it blank.
fn ou_annuaire(saisi: &str, fiche: Option<&str>) -> String {
    let propre = saisi.trim();
    if propre.is_empty() {
        fiche.unwrap_or_default().to_string()
    } else {
        propre.to_string()
    }
}

pub fn compose_virement(
    request: &VirementRequest,
    layouts: &LayoutSet,
    annuaire: &Annuaire,
    journal: &Journal,
) -> Result<ComposedDocument, ComposeError> {
    request.validate()?;

    let montant = parse_montant(&request.montant)?;
    let figure = format_montant(&montant);
    let lettres = epeler(&montant)?;

    // Trimmed once here so the printed field and the register row agree.
    let beneficiaire = request.beneficiaire.trim();

    // A directory miss is not an error: absent auto-fill data leaves the
    // fields blank.
    let fiche = annuaire.lookup(beneficiaire);
    let rib = ou_annuaire(&request.rib, fiche.and_then(|f| f.rib.as_deref()));
    let banque = ou_annuaire(&request.banque, fiche.and_then(|f| f.banque.as_deref()));
    let ville = ou_annuaire(&request.ville, fiche.and_then(|f| f.ville.as_deref()));

    let numero = journal.next_number(current_year());

    let template = layouts.for_kind(DocumentType::Virement);
    let resolver = FieldResolver::new(template);
    let mut champs = Vec::new();

    if let Some(rendu) = resolver.place("numero", &format!("VIR {}", numero))? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("montant", &figure)? {
        champs.push(rendu);
    }
    resolver.place_words_lines(&lettres, MAX_LIGNES_LETTRES, &mut champs)?;
    if let Some(rendu) = resolver.place("beneficiaire", beneficiaire)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("type", &request.type_virement)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("motif", &request.motif)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("rib", &rib)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("banque", &banque)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("ville", &ville)? {
        champs.push(rendu);
    }

    let ecriture = EcritureJournal {
        date: format_french_date(),
        ordre: numero.clone(),
        beneficiaire: beneficiaire.to_string(),
        montant: figure,
        montant_lettres: lettres,
        type_virement: request.type_virement.clone(),
        rib,
        banque,
        ville,
    };

    Ok(ComposedDocument {
        id: Uuid::new_v4(),
        kind: DocumentType::Virement,
        page: template.page,
        numero: Some(numero),
        champs,
        ecriture: Some(ecriture),
    })
}
