//! Lettre de change (bill of exchange) composer.
//!
//! A4 sheet with the figure amount, the amount in words on up to three
//! narrow lines, the payee (main box plus an optional stub box), the due
//! date, the label and the "<ville>, le <date>" issue line.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::format_french_date;
use super::validation::{validate_date, validate_required, ValidationErrors};
use super::{epeler, ComposeError, ComposedDocument, FieldResolver};
use crate::layout::{DocumentType, LayoutSet};
use crate::montant::{format_montant, parse_montant};

/// Template fields a lettre de change cannot be produced without.
pub const CHAMPS_GABARIT: &[&str] = &[
    "montant",
    "montant_lettres_1",
    "beneficiaire_1",
    "echeance",
    "ville_date",
];

const MAX_LIGNES_LETTRES: usize = 3;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LettreChangeRequest {
    pub beneficiaire: String,
    pub montant: String,
    /// Due date, jj/mm/aaaa.
    pub echeance: String,
    #[serde(default)]
    pub ville: String,
    /// Issue date, jj/mm/aaaa; today when absent.
    #[serde(default)]
    pub date_edition: Option<String>,
    #[serde(default)]
    pub libelle: String,
}

impl LettreChangeRequest {
    pub fn validate(&self) -> Result<(), ComposeError> {
        let mut erreurs = ValidationErrors::new();
        validate_required(&self.beneficiaire, "beneficiaire", "Bénéficiaire", &mut erreurs);
        validate_required(&self.montant, "montant", "Montant", &mut erreurs);
        validate_required(&self.echeance, "echeance", "Date d'échéance", &mut erreurs);
        validate_date(&self.echeance, "echeance", &mut erreurs);
        if let Some(ref date) = self.date_edition {
            validate_date(date, "date_edition", &mut erreurs);
        }
        erreurs.into_result().map_err(ComposeError::from)
    }
}

pub fn compose_lettre_change(
    request: &LettreChangeRequest,
    layouts: &LayoutSet,
) -> Result<ComposedDocument, ComposeError> {
    request.validate()?;

    let montant = parse_montant(&request.montant)?;
    let lettres = epeler(&montant)?;
    let date_edition = request
        .date_edition
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(format_french_date);
    let ville_date = if request.ville.trim().is_empty() {
        String::new()
    } else {
        format!("{}, le {}", request.ville.trim(), date_edition)
    };

    let template = layouts.for_kind(DocumentType::LettreChange);
    let resolver = FieldResolver::new(template);
    let mut champs = Vec::new();

    if let Some(rendu) = resolver.place("montant", &format_montant(&montant))? {
        champs.push(rendu);
    }
    resolver.place_words_lines(&lettres, MAX_LIGNES_LETTRES, &mut champs)?;
    if let Some(rendu) = resolver.place("beneficiaire_1", &request.beneficiaire)? {
        champs.push(rendu);
    }
    // Narrow stub box on the left edge; some pre-printed sheets omit it.
    if let Some(rendu) = resolver.place_optional("beneficiaire_2", &request.beneficiaire) {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("echeance", &request.echeance)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("ville_date", &ville_date)? {
        champs.push(rendu);
    }
    if let Some(rendu) = resolver.place("libelle", &request.libelle)? {
        champs.push(rendu);
    }

    Ok(ComposedDocument {
        id: Uuid::new_v4(),
        kind: DocumentType::LettreChange,
        page: template.page,
        numero: None,
        champs,
        ecriture: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requete() -> LettreChangeRequest {
        LettreChangeRequest {
            beneficiaire: "Atlas Fournitures".to_string(),
            montant: "45600,75".to_string(),
            echeance: "30/04/2026".to_string(),
            ville: "Rabat".to_string(),
            date_edition: Some("15/01/2026".to_string()),
            libelle: "Traite n° 7".to_string(),
        }
    }

    #[test]
    fn test_compose_full_letter() {
        let layouts = LayoutSet::standard();
        let document = compose_lettre_change(&requete(), &layouts).unwrap();

        assert_eq!(document.kind, DocumentType::LettreChange);
        assert!(document.numero.is_none());
        assert!(document.ecriture.is_none());

        let ville_date = document
            .champs
            .iter()
            .find(|c| c.champ == "ville_date")
            .unwrap();
        assert_eq!(ville_date.lignes.join(" "), "Rabat, le 15/01/2026");

        // The payee lands in both the main box and the stub box.
        let boites: Vec<&str> = document
            .champs
            .iter()
            .filter(|c| c.champ.starts_with("beneficiaire"))
            .map(|c| c.champ.as_str())
            .collect();
        assert_eq!(boites, vec!["beneficiaire_1", "beneficiaire_2"]);
    }

    #[test]
    fn test_words_overflow_onto_narrow_lines() {
        let layouts = LayoutSet::standard();
        let mut request = requete();
        // Spells to well past the 60-character budget, with a conjunction.
        request.montant = "1234567,89".to_string();
        let document = compose_lettre_change(&request, &layouts).unwrap();

        let lignes: Vec<&str> = document
            .champs
            .iter()
            .filter(|c| c.champ.starts_with("montant_lettres"))
            .map(|c| c.champ.as_str())
            .collect();
        assert_eq!(lignes, vec!["montant_lettres_1", "montant_lettres_2"]);
        let seconde = document
            .champs
            .iter()
            .find(|c| c.champ == "montant_lettres_2")
            .unwrap();
        assert!(seconde.lignes[0].starts_with("et "));
    }

    #[test]
    fn test_missing_due_date_names_field() {
        let layouts = LayoutSet::standard();
        let mut request = requete();
        request.echeance = String::new();
        let erreur = compose_lettre_change(&request, &layouts).unwrap_err();
        match erreur {
            ComposeError::ChampManquant(e) => assert_eq!(e.champ, "echeance"),
            autre => panic!("erreur inattendue: {autre}"),
        }
    }

    #[test]
    fn test_malformed_due_date_rejected() {
        let layouts = LayoutSet::standard();
        let mut request = requete();
        request.echeance = "avril 2026".to_string();
        assert!(matches!(
            compose_lettre_change(&request, &layouts).unwrap_err(),
            ComposeError::ChampInvalide(_)
        ));
    }

    #[test]
    fn test_blank_city_skips_issue_line() {
        let layouts = LayoutSet::standard();
        let mut request = requete();
        request.ville = String::new();
        let document = compose_lettre_change(&request, &layouts).unwrap();
        assert!(document.champs.iter().all(|c| c.champ != "ville_date"));
    }
}
