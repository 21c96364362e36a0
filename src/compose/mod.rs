//! Compose module - turns validated form input into placed, rendered fields.
//!
//! One composer per document kind:
//! - `cheque` - bank cheque on the 210 × 99 mm leaf
//! - `virement` - transfer order on A4, with year-scoped numbering
//! - `lettre_change` - bill of exchange on A4
//!
//! A composer validates its request, normalizes and spells the amount, then
//! resolves every logical field against the kind's layout template. It has
//! no rendering side effect; for virements the journal row is prepared but
//! committed only after the rendering surface reports success, so a failed
//! render never consumes a number.

pub mod cheque;
pub mod common;
pub mod lettre_change;
pub mod validation;
pub mod virement;

pub use cheque::{compose_cheque, ChequeRequest};
pub use lettre_change::{compose_lettre_change, LettreChangeRequest};
pub use virement::{compose_virement, VirementRequest};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::journal::EcritureJournal;
use crate::layout::metrics::MM_PAR_POINT;
use crate::layout::{textflow, DocumentType, FieldPlacement, LayoutTemplate, PageFormat};
use crate::montant::{montant_en_lettres, Montant, MontantError};
use validation::ValidationError;

/// Errors that abort composition. Ledger write failures are deliberately
/// not here: they happen after the document exists and stay non-fatal.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("champ obligatoire manquant: {}", .0.champ)]
    ChampManquant(ValidationError),
    #[error("{0}")]
    ChampInvalide(ValidationError),
    #[error(transparent)]
    Montant(#[from] MontantError),
    #[error("gabarit {kind}: champ requis absent: {champ}")]
    GabaritIncomplet { kind: &'static str, champ: String },
}

impl From<ValidationError> for ComposeError {
    fn from(erreur: ValidationError) -> Self {
        if erreur.est_manquant() {
            ComposeError::ChampManquant(erreur)
        } else {
            ComposeError::ChampInvalide(erreur)
        }
    }
}

/// One placed field, ready for the rendering surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenderedField {
    pub champ: String,
    pub lignes: Vec<String>,
    pub placement: FieldPlacement,
    /// Page height used to convert the top-down `y_mm` into the renderer's
    /// bottom-up coordinates.
    pub hauteur_page_mm: f32,
}

impl RenderedField {
    /// Bottom-up baseline y of line `index`, in millimetres.
    pub fn ligne_y_mm(&self, index: usize) -> f32 {
        let interligne = self.placement.taille_pt * 1.2 * MM_PAR_POINT;
        self.hauteur_page_mm - self.placement.y_mm - interligne * (index + 1) as f32
    }
}

/// The composed document instance handed to the rendering surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComposedDocument {
    pub id: Uuid,
    pub kind: DocumentType,
    pub page: PageFormat,
    /// Allocated order number, virements only.
    pub numero: Option<String>,
    pub champs: Vec<RenderedField>,
    /// Journal row to commit once rendering succeeded, virements only.
    pub ecriture: Option<EcritureJournal>,
}

/// Spell the amount for the words lines. An amount past the spelling bound
/// has no spelling; composing it anyway would leave the legally binding
/// words field blank on the instrument, so it aborts the composition.
pub(crate) fn epeler(montant: &Montant) -> Result<String, ComposeError> {
    let lettres = montant_en_lettres(montant);
    if lettres.is_empty() {
        return Err(ComposeError::Montant(MontantError::HorsBorne(
            montant.dirhams,
        )));
    }
    Ok(lettres)
}

/// Field resolution against one template, shared by the three composers.
pub(crate) struct FieldResolver<'a> {
    template: &'a LayoutTemplate,
}

impl<'a> FieldResolver<'a> {
    pub(crate) fn new(template: &'a LayoutTemplate) -> Self {
        Self { template }
    }

    fn rendered(&self, placement: &FieldPlacement, texte: &str) -> RenderedField {
        let lignes = textflow::wrap(
            texte,
            placement.largeur_max_mm,
            placement.police,
            placement.taille_pt,
        );
        RenderedField {
            champ: placement.nom.clone(),
            lignes,
            placement: placement.clone(),
            hauteur_page_mm: self.template.page.hauteur_mm,
        }
    }

    /// Place `texte` on a field the template must define. Blank text is a
    /// normal "nothing to draw" outcome; a missing placement for non-blank
    /// text is a configuration error.
    pub(crate) fn place(
        &self,
        nom: &str,
        texte: &str,
    ) -> Result<Option<RenderedField>, ComposeError> {
        if texte.trim().is_empty() {
            return Ok(None);
        }
        let placement = self
            .template
            .lookup(nom)
            .ok_or_else(|| ComposeError::GabaritIncomplet {
                kind: self.template.kind.as_str(),
                champ: nom.to_string(),
            })?;
        Ok(Some(self.rendered(placement, texte)))
    }

    /// Place `texte` on an explicitly optional field; a missing placement
    /// drops the text silently.
    pub(crate) fn place_optional(&self, nom: &str, texte: &str) -> Option<RenderedField> {
        if texte.trim().is_empty() {
            return None;
        }
        let placement = self.template.lookup(nom)?;
        Some(self.rendered(placement, texte))
    }

    /// Place the amount-in-words phrase on up to `max_lignes` overflow
    /// lines named `montant_lettres_1..N`. Line 1 is mandatory in every
    /// template; later lines are optional and excess segments are dropped.
    pub(crate) fn place_words_lines(
        &self,
        lettres: &str,
        max_lignes: usize,
        champs: &mut Vec<RenderedField>,
    ) -> Result<(), ComposeError> {
        if lettres.trim().is_empty() {
            return Ok(());
        }
        for (i, segment) in textflow::split_overflow(lettres, max_lignes)
            .iter()
            .enumerate()
        {
            let nom = format!("montant_lettres_{}", i + 1);
            if i == 0 {
                if let Some(rendu) = self.place(&nom, segment)? {
                    champs.push(rendu);
                }
            } else if let Some(rendu) = self.place_optional(&nom, segment) {
                champs.push(rendu);
            }
        }
        Ok(())
    }
}
