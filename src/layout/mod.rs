//! Layout module - per-instrument field placement templates.
//!
//! Each document kind has a fixed page format and a table of named field
//! placements (position, box width, font, size, alignment) in millimetres,
//! measured top-down from the upper-left corner of the instrument. The
//! tables are built once at startup and stay immutable for the process
//! lifetime; the composer receives them explicitly instead of reading
//! process-wide state.

pub mod metrics;
pub mod textflow;

pub use metrics::Police;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three instrument kinds produced by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Cheque,
    Virement,
    LettreChange,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Cheque => "cheque",
            DocumentType::Virement => "virement",
            DocumentType::LettreChange => "lettre_change",
        }
    }
}

/// Physical page size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageFormat {
    pub largeur_mm: f32,
    pub hauteur_mm: f32,
}

/// Cheque leaf, 210 × 99 mm.
pub const PAGE_CHEQUE: PageFormat = PageFormat { largeur_mm: 210.0, hauteur_mm: 99.0 };
/// A4, used for virements and lettres de change.
pub const PAGE_A4: PageFormat = PageFormat { largeur_mm: 210.0, hauteur_mm: 297.0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Placement rule for one named field on one instrument.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldPlacement {
    pub nom: String,
    pub x_mm: f32,
    /// Top-down logical y; the renderer converts using the page height.
    pub y_mm: f32,
    pub largeur_max_mm: f32,
    pub police: Police,
    pub taille_pt: f32,
    pub alignement: Alignment,
}

/// The placement table for one document kind.
#[derive(Debug, Clone)]
pub struct LayoutTemplate {
    pub kind: DocumentType,
    pub page: PageFormat,
    champs: Vec<FieldPlacement>,
}

impl LayoutTemplate {
    pub fn champs(&self) -> &[FieldPlacement] {
        &self.champs
    }

    pub fn lookup(&self, nom: &str) -> Option<&FieldPlacement> {
        self.champs.iter().find(|c| c.nom == nom)
    }

    /// Startup check that every mandatory field name is placed. A template
    /// missing one of these is a configuration error, not a request error.
    pub fn require_all(&self, noms: &[&str]) -> anyhow::Result<()> {
        for nom in noms {
            if self.lookup(nom).is_none() {
                anyhow::bail!(
                    "gabarit {}: champ obligatoire absent: {}",
                    self.kind.as_str(),
                    nom
                );
            }
        }
        Ok(())
    }
}

/// The immutable set of the three standard templates.
#[derive(Debug, Clone)]
pub struct LayoutSet {
    cheque: LayoutTemplate,
    virement: LayoutTemplate,
    lettre_change: LayoutTemplate,
}

fn champ(
    nom: &str,
    x_mm: f32,
    y_mm: f32,
    largeur_max_mm: f32,
    police: Police,
    taille_pt: f32,
    alignement: Alignment,
) -> FieldPlacement {
    FieldPlacement {
        nom: nom.to_string(),
        x_mm,
        y_mm,
        largeur_max_mm,
        police,
        taille_pt,
        alignement,
    }
}

impl LayoutSet {
    /// The production coordinate tables, taken from the pre-printed
    /// instruments in use.
    pub fn standard() -> Self {
        use Alignment::{Center, Left};
        use Police::{Arial, ArialBold};

        let cheque = LayoutTemplate {
            kind: DocumentType::Cheque,
            page: PAGE_CHEQUE,
            champs: vec![
                champ("beneficiaire", 35.0, 45.0, 130.0, Arial, 10.0, Left),
                champ("montant", 130.0, 73.0, 31.0, Arial, 10.0, Left),
                champ("montant_lettres_1", 40.0, 56.0, 100.0, Arial, 10.0, Center),
                champ("montant_lettres_2", 10.0, 51.0, 160.0, Arial, 10.0, Center),
                champ("ville", 75.0, 38.0, 35.0, Arial, 10.0, Left),
                champ("date", 130.0, 38.0, 30.0, Arial, 10.0, Left),
            ],
        };

        // No third words line on the virement sheet; a third overflow
        // segment is dropped.
        let virement = LayoutTemplate {
            kind: DocumentType::Virement,
            page: PAGE_A4,
            champs: vec![
                champ("numero", 50.0, 250.0, 80.0, ArialBold, 12.0, Left),
                champ("montant", 50.0, 230.0, 60.0, Arial, 12.0, Left),
                champ("montant_lettres_1", 50.0, 210.0, 140.0, Arial, 10.0, Left),
                champ("montant_lettres_2", 50.0, 200.0, 140.0, Arial, 10.0, Left),
                champ("beneficiaire", 50.0, 180.0, 120.0, Arial, 10.0, Left),
                champ("type", 50.0, 160.0, 60.0, Arial, 10.0, Left),
                champ("motif", 50.0, 140.0, 120.0, Arial, 10.0, Left),
                champ("rib", 50.0, 120.0, 100.0, Arial, 10.0, Left),
                champ("banque", 50.0, 100.0, 100.0, Arial, 10.0, Left),
                champ("ville", 50.0, 80.0, 80.0, Arial, 10.0, Left),
            ],
        };

        let lettre_change = LayoutTemplate {
            kind: DocumentType::LettreChange,
            page: PAGE_A4,
            champs: vec![
                champ("montant", 155.0, 84.0, 40.0, Arial, 10.0, Center),
                champ("montant_lettres_1", 148.0, 62.0, 48.0, Arial, 10.0, Left),
                champ("montant_lettres_2", 148.0, 58.0, 48.0, Arial, 10.0, Left),
                champ("montant_lettres_3", 148.0, 54.0, 48.0, Arial, 10.0, Left),
                champ("beneficiaire_1", 85.0, 71.0, 110.0, Arial, 10.0, Left),
                champ("beneficiaire_2", 7.0, 69.0, 55.0, Arial, 10.0, Left),
                champ("echeance", 155.0, 94.0, 40.0, Arial, 10.0, Center),
                champ("libelle", 85.0, 56.0, 55.0, Arial, 10.0, Left),
                champ("ville_date", 85.0, 62.0, 55.0, Arial, 10.0, Left),
            ],
        };

        Self {
            cheque,
            virement,
            lettre_change,
        }
    }

    pub fn for_kind(&self, kind: DocumentType) -> &LayoutTemplate {
        match kind {
            DocumentType::Cheque => &self.cheque,
            DocumentType::Virement => &self.virement,
            DocumentType::LettreChange => &self.lettre_change,
        }
    }
}
