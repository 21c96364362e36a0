//! Text flow - wrapping and overflow splitting for instrument boxes.
//!
//! Two pure functions. `wrap` fits free text into a box width using the
//! static font metrics. `split_overflow` cuts an over-long amount-in-words
//! phrase into the instrument's fixed number of physical lines, preferring
//! linguistic break points over arbitrary character cuts.

use super::metrics::Police;

/// Practical character budget of one words-line on the instruments.
pub const BUDGET_LIGNE: usize = 60;

/// Natural break tokens, in priority order. The conjunction wins over the
/// comma; the token stays attached to the trailing segment so the second
/// line reads "et cinquante centimes".
const COUPURES: [&str; 2] = [" et ", ", "];

/// Greedy word wrap of `texte` into lines no wider than `largeur_mm`.
///
/// A single word wider than the box stays alone on its line; the box
/// borders absorb the overhang. Empty input yields no lines.
pub fn wrap(texte: &str, largeur_mm: f32, police: Police, taille_pt: f32) -> Vec<String> {
    let mut lignes = Vec::new();
    let mut courante = String::new();

    for mot in texte.split_whitespace() {
        if courante.is_empty() {
            courante = mot.to_string();
            continue;
        }
        let candidate = format!("{} {}", courante, mot);
        if police.width_mm(&candidate, taille_pt) <= largeur_mm {
            courante = candidate;
        } else {
            lignes.push(courante);
            courante = mot.to_string();
        }
    }
    if !courante.is_empty() {
        lignes.push(courante);
    }
    lignes
}

/// Split an over-long phrase into at most `max_lignes` segments.
///
/// Policy, in order: a phrase within [`BUDGET_LIGNE`] characters is returned
/// unsplit; otherwise split once at the first natural break token found, the
/// token staying with the trailing segment; otherwise hard-split at the
/// character budget. Segments beyond `max_lignes` are dropped — the
/// instrument has a fixed number of physical lines.
pub fn split_overflow(texte: &str, max_lignes: usize) -> Vec<String> {
    if max_lignes == 0 {
        return Vec::new();
    }
    if texte.chars().count() <= BUDGET_LIGNE {
        return vec![texte.to_string()];
    }

    for coupure in COUPURES {
        if let Some(pos) = texte.find(coupure) {
            let tete = texte[..pos].to_string();
            let queue = texte[pos..].trim_start().to_string();
            let mut segments = vec![tete, queue];
            segments.truncate(max_lignes);
            return segments;
        }
    }

    // No natural break: cut on character boundaries at the budget.
    let chars: Vec<char> = texte.chars().collect();
    chars
        .chunks(BUDGET_LIGNE)
        .take(max_lignes)
        .map(|bloc| bloc.iter().collect())
        .collect()
}
