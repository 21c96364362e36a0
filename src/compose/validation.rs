//! Input validation for document composition.
//!
//! Validation runs before any side effect: no number is allocated and no
//! placement is resolved for a request that fails here. Messages are written
//! for the clerk filling the form, with a concrete fix suggestion.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap();
    static ref RIB_RE: Regex = Regex::new(r"^\d{24}$").unwrap();
}

/// One validation failure on one field.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub champ: String,
    pub message: String,
    pub suggestion: Option<String>,
    manquant: bool,
}

impl ValidationError {
    pub fn new(champ: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            champ: champ.into(),
            message: message.into(),
            suggestion: None,
            manquant: false,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Error for an empty required field.
    pub fn champ_vide(champ: &str, libelle: &str) -> Self {
        let mut erreur = Self::new(champ, format!("{} ne peut pas être vide", libelle))
            .with_suggestion(format!("Renseigner {}", libelle.to_lowercase()));
        erreur.manquant = true;
        erreur
    }

    pub fn date_invalide(champ: &str, valeur: &str) -> Self {
        Self::new(champ, format!("date '{}' invalide", valeur))
            .with_suggestion("Utiliser le format jj/mm/aaaa, exemple: 15/01/2026")
    }

    pub fn rib_invalide(champ: &str) -> Self {
        Self::new(champ, "le RIB doit comporter 24 chiffres")
            .with_suggestion("Vérifier le relevé d'identité bancaire du bénéficiaire")
    }

    /// True when the failure is an absent required field rather than a
    /// malformed value.
    pub fn est_manquant(&self) -> bool {
        self.manquant
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.champ, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Ordered collection of validation failures for one request.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    erreurs: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, erreur: ValidationError) {
        self.erreurs.push(erreur);
    }

    pub fn is_empty(&self) -> bool {
        self.erreurs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.erreurs.len()
    }

    /// Ok when clean, otherwise the first failure in field order — the
    /// caller reports one problem at a time, like the form does.
    pub fn into_result(mut self) -> Result<(), ValidationError> {
        if self.erreurs.is_empty() {
            Ok(())
        } else {
            Err(self.erreurs.remove(0))
        }
    }
}

/// Validate that a field holds non-blank text.
pub fn validate_required(valeur: &str, champ: &str, libelle: &str, erreurs: &mut ValidationErrors) {
    if valeur.trim().is_empty() {
        erreurs.add(ValidationError::champ_vide(champ, libelle));
    }
}

/// Validate a jj/mm/aaaa date. Blank input passes; pair with
/// [`validate_required`] when the date is mandatory.
pub fn validate_date(valeur: &str, champ: &str, erreurs: &mut ValidationErrors) {
    let propre = valeur.trim();
    if propre.is_empty() {
        return;
    }
    if !DATE_RE.is_match(propre)
        || chrono::NaiveDate::parse_from_str(propre, "%d/%m/%Y").is_err()
    {
        erreurs.add(ValidationError::date_invalide(champ, propre));
    }
}

/// Validate a 24-digit RIB. Blank input passes — the annuaire may fill it.
pub fn validate_rib(valeur: &str, champ: &str, erreurs: &mut ValidationErrors) {
    let propre: String = valeur.chars().filter(|c| !c.is_whitespace()).collect();
    if propre.is_empty() {
        return;
    }
    if !RIB_RE.is_match(&propre) {
        erreurs.add(ValidationError::rib_invalide(champ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_blank_is_missing() {
        let mut erreurs = ValidationErrors::new();
        validate_required("   ", "beneficiaire", "Bénéficiaire", &mut erreurs);
        assert_eq!(erreurs.len(), 1);
        let erreur = erreurs.into_result().unwrap_err();
        assert!(erreur.est_manquant());
        assert_eq!(erreur.champ, "beneficiaire");
    }

    #[test]
    fn test_required_present_is_clean() {
        let mut erreurs = ValidationErrors::new();
        validate_required("Office National", "beneficiaire", "Bénéficiaire", &mut erreurs);
        assert!(erreurs.is_empty());
    }

    #[test]
    fn test_date_formats() {
        let mut erreurs = ValidationErrors::new();
        validate_date("15/01/2026", "date", &mut erreurs);
        validate_date("", "date", &mut erreurs);
        assert!(erreurs.is_empty());

        validate_date("2026-01-15", "date", &mut erreurs);
        assert_eq!(erreurs.len(), 1);

        let mut erreurs = ValidationErrors::new();
        validate_date("32/01/2026", "date", &mut erreurs);
        assert_eq!(erreurs.len(), 1);
        assert!(!erreurs.into_result().unwrap_err().est_manquant());
    }

    #[test]
    fn test_rib_formats() {
        let mut erreurs = ValidationErrors::new();
        validate_rib("012345678901234567890123", "rib", &mut erreurs);
        validate_rib("0123 4567 8901 2345 6789 0123", "rib", &mut erreurs);
        validate_rib("", "rib", &mut erreurs);
        assert!(erreurs.is_empty());

        validate_rib("12345", "rib", &mut erreurs);
        assert_eq!(erreurs.len(), 1);
    }

    #[test]
    fn test_first_error_wins() {
        let mut erreurs = ValidationErrors::new();
        validate_required("", "beneficiaire", "Bénéficiaire", &mut erreurs);
        validate_required("", "montant", "Montant", &mut erreurs);
        let premier = erreurs.into_result().unwrap_err();
        assert_eq!(premier.champ, "beneficiaire");
    }
}
