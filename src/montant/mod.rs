//! Montant module - exact monetary amounts for printed payment instruments.
//!
//! An amount is always held as whole dirhams plus a centime part in 0..=99,
//! never as a binary float: an off-by-one-centime figure on a printed cheque
//! is a visible defect.

pub mod lettres;

pub use lettres::montant_en_lettres;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Errors raised while normalizing raw amount input.
#[derive(Debug, Error)]
pub enum MontantError {
    #[error("montant invalide: {0:?}")]
    Invalide(String),
    #[error("montant trop grand pour être écrit en lettres: {0} dirhams")]
    HorsBorne(u64),
}

/// An exact non-negative amount in dirhams and centimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Montant {
    pub dirhams: u64,
    /// Always in 0..=99.
    pub centimes: u8,
}

impl Montant {
    pub fn new(dirhams: u64, centimes: u8) -> Self {
        debug_assert!(centimes <= 99);
        Self { dirhams, centimes }
    }

    pub fn is_zero(&self) -> bool {
        self.dirhams == 0 && self.centimes == 0
    }
}

/// Parse free-form amount input into an exact [`Montant`].
///
/// Accepts input that may already carry grouping marks (`#125 000,50`,
/// `1.234.567,89`, `1 234,5`). Grouping characters are stripped, the decimal
/// comma is coerced to a point, and the result is rounded half-up to the
/// centime. In this comma-decimal locale, dots followed only by 3-digit
/// groups in a comma-free value are grouping marks (`"1.234"` is 1 234
/// dirhams); any other dot is the decimal separator.
pub fn parse_montant(brut: &str) -> Result<Montant, MontantError> {
    // Keep digits and candidate separators only; '#' is the printed currency
    // marker, NBSP and apostrophes show up in pasted values.
    let mut nettoye = String::with_capacity(brut.len());
    let mut virgule = false;
    for c in brut.chars() {
        match c {
            '0'..='9' => nettoye.push(c),
            ',' => {
                virgule = true;
                nettoye.push('.');
            }
            '.' => nettoye.push('.'),
            ' ' | '\u{00A0}' | '\u{202F}' | '\'' | '#' => {}
            c if c.is_whitespace() => {}
            _ => return Err(MontantError::Invalide(brut.to_string())),
        }
    }

    if nettoye.is_empty() {
        return Err(MontantError::Invalide(brut.to_string()));
    }

    // No comma and every dot opens a 3-digit group: grouped integer.
    if !virgule && nettoye.contains('.') {
        let morceaux: Vec<&str> = nettoye.split('.').collect();
        if !morceaux[0].is_empty() && morceaux[1..].iter().all(|m| m.len() == 3) {
            nettoye = morceaux.concat();
        }
    }

    // All separators but the last are grouping points ("1.234.567,89").
    if let Some(dernier) = nettoye.rfind('.') {
        let (tete, queue) = nettoye.split_at(dernier);
        nettoye = tete.replace('.', "") + queue;
    }

    let (entier, fraction) = match nettoye.split_once('.') {
        Some((e, f)) => (e, f),
        None => (nettoye.as_str(), ""),
    };
    if entier.is_empty() && fraction.is_empty() {
        return Err(MontantError::Invalide(brut.to_string()));
    }

    let mut dirhams: u64 = if entier.is_empty() {
        0
    } else {
        entier
            .parse()
            .map_err(|_| MontantError::Invalide(brut.to_string()))?
    };

    // Round half-up on the third fractional digit.
    let chiffres: Vec<u8> = fraction.bytes().map(|b| b - b'0').collect();
    let mut centimes =
        u32::from(chiffres.first().copied().unwrap_or(0)) * 10 + u32::from(chiffres.get(1).copied().unwrap_or(0));
    if chiffres.get(2).copied().unwrap_or(0) >= 5 {
        centimes += 1;
    }
    if centimes >= 100 {
        centimes -= 100;
        dirhams = dirhams
            .checked_add(1)
            .ok_or_else(|| MontantError::Invalide(brut.to_string()))?;
    }

    Ok(Montant::new(dirhams, centimes as u8))
}

/// Render a [`Montant`] as the fixed display string used on the instruments:
/// `#` marker, thousands grouped by a space, comma, two centime digits.
pub fn format_montant(montant: &Montant) -> String {
    let chiffres = montant.dirhams.to_string();
    let mut groupe = String::with_capacity(chiffres.len() + chiffres.len() / 3 + 4);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (chiffres.len() - i) % 3 == 0 {
            groupe.push(' ');
        }
        groupe.push(c);
    }
    format!("#{},{:02}", groupe, montant.centimes)
}
