//! Static character-width tables for the two instrument fonts.
//!
//! Widths are in thousandths of an em (the AFM convention), covering ASCII
//! 0x20..=0x7E; accented characters fall back to an average width. The
//! rendering surface owns the real glyphs — these tables only have to be
//! close enough for box-fitting decisions, and the instrument boxes leave a
//! visible margin around every field.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Millimetres per PostScript point.
pub const MM_PAR_POINT: f32 = 25.4 / 72.0;

/// The fonts named on the printed instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Police {
    #[serde(rename = "Arial")]
    Arial,
    #[serde(rename = "Arial-Bold")]
    ArialBold,
}

impl Police {
    fn table(&self) -> &'static MetricTable {
        match self {
            Police::Arial => &ARIAL,
            Police::ArialBold => &ARIAL_BOLD,
        }
    }

    /// Width of `texte` in millimetres at the given size.
    pub fn width_mm(&self, texte: &str, taille_pt: f32) -> f32 {
        self.table().measure_em(texte) * taille_pt * MM_PAR_POINT
    }
}

struct MetricTable {
    /// `widths[i]` = width of ASCII character `i + 32`, in em thousandths.
    widths: [u16; 95],
    /// Fallback for codepoints outside 0x20..=0x7E.
    average: u16,
}

impl MetricTable {
    fn measure_em(&self, texte: &str) -> f32 {
        let milliemes: u32 = texte
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    u32::from(self.widths[code - 32])
                } else {
                    u32::from(self.average)
                }
            })
            .sum();
        milliemes as f32 / 1000.0
    }
}

#[rustfmt::skip]
static ARIAL: MetricTable = MetricTable {
    widths: [
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
        278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
        584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
        500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
        667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
        278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
        278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
    ],
    average: 556,
};

#[rustfmt::skip]
static ARIAL_BOLD: MetricTable = MetricTable {
    widths: [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
        278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
        584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
        556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
        667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
        333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
        333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
    ],
    average: 585,
};
