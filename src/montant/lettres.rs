//! Amount-in-words conversion (French).
//!
//! Small pure recursive converter over closed numeral tables. The irregular
//! forms are the usual French ones: 70–79 and 90–99 compose from the 60/80
//! base plus a teen word, "et un"/"et onze" joins, and "cents"/
//! "quatre-vingts" lose their plural mark when another numeral follows.

use super::Montant;

/// Values at or above this bound have no spelling; the caller treats an
/// empty string as "leave the field blank".
const BORNE_DIRHAMS: u64 = 1_000_000_000;

const UNITES: [&str; 10] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];

const DIX_A_DIX_NEUF: [&str; 10] = [
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];

const DIZAINES: [&str; 7] = [
    "", "dix", "vingt", "trente", "quarante", "cinquante", "soixante",
];

/// 0..=99. `terminal` is false when another numeral word follows
/// (suppresses the plural "s" of "quatre-vingts").
fn dizaines_et_unites(n: usize, terminal: bool) -> String {
    if n < 10 {
        return UNITES[n].to_string();
    }
    if n < 20 {
        return DIX_A_DIX_NEUF[n - 10].to_string();
    }

    let dizaine = n / 10;
    let unite = n % 10;
    match dizaine {
        7 => {
            // 70s borrow the teen word from the 60 base.
            if unite == 1 {
                "soixante et onze".to_string()
            } else {
                format!("soixante-{}", DIX_A_DIX_NEUF[unite])
            }
        }
        8 => {
            if unite == 0 {
                if terminal { "quatre-vingts" } else { "quatre-vingt" }.to_string()
            } else {
                format!("quatre-vingt-{}", UNITES[unite])
            }
        }
        9 => format!("quatre-vingt-{}", DIX_A_DIX_NEUF[unite]),
        _ => {
            if unite == 0 {
                DIZAINES[dizaine].to_string()
            } else if unite == 1 {
                format!("{} et un", DIZAINES[dizaine])
            } else {
                format!("{}-{}", DIZAINES[dizaine], UNITES[unite])
            }
        }
    }
}

/// 1..=999.
fn centaines(n: usize, terminal: bool) -> String {
    let cents = n / 100;
    let reste = n % 100;
    match (cents, reste) {
        (0, r) => dizaines_et_unites(r, terminal),
        (1, 0) => "cent".to_string(),
        (1, r) => format!("cent {}", dizaines_et_unites(r, terminal)),
        (c, 0) => format!("{} cent{}", UNITES[c], if terminal { "s" } else { "" }),
        (c, r) => format!("{} cent {}", UNITES[c], dizaines_et_unites(r, terminal)),
    }
}

/// Spell an integer below one billion.
pub fn nombre_en_lettres(n: u64) -> String {
    if n == 0 {
        return UNITES[0].to_string();
    }

    let millions = (n / 1_000_000) as usize;
    let milliers = ((n / 1_000) % 1_000) as usize;
    let reste = (n % 1_000) as usize;

    let mut morceaux: Vec<String> = Vec::with_capacity(3);
    if millions == 1 {
        morceaux.push("un million".to_string());
    } else if millions > 1 {
        morceaux.push(format!("{} millions", centaines(millions, true)));
    }
    // "mille" is never preceded by "un" and never takes the plural mark.
    if milliers == 1 {
        morceaux.push("mille".to_string());
    } else if milliers > 1 {
        morceaux.push(format!("{} mille", centaines(milliers, false)));
    }
    if reste > 0 {
        morceaux.push(centaines(reste, true));
    }

    morceaux.join(" ")
}

fn majuscule_initiale(texte: &str) -> String {
    let mut chars = texte.chars();
    match chars.next() {
        Some(premier) => premier.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Spell a [`Montant`] in full: "Cent vingt-cinq mille dirhams et cinquante
/// centimes". Total function; out-of-bound values yield an empty string
/// rather than an error, the caller leaves the field blank.
pub fn montant_en_lettres(montant: &Montant) -> String {
    if montant.dirhams >= BORNE_DIRHAMS {
        return String::new();
    }

    let dirhams = match montant.dirhams {
        0 => "zéro dirham".to_string(),
        1 => "un dirham".to_string(),
        n => format!("{} dirhams", nombre_en_lettres(n)),
    };

    let phrase = match montant.centimes {
        0 => dirhams,
        1 => format!("{} et un centime", dirhams),
        c => format!("{} et {} centimes", dirhams, nombre_en_lettres(u64::from(c))),
    };

    majuscule_initiale(&phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unites_et_adolescents() {
        assert_eq!(nombre_en_lettres(0), "zéro");
        assert_eq!(nombre_en_lettres(7), "sept");
        assert_eq!(nombre_en_lettres(16), "seize");
        assert_eq!(nombre_en_lettres(19), "dix-neuf");
    }

    #[test]
    fn test_dizaines_regulieres() {
        assert_eq!(nombre_en_lettres(20), "vingt");
        assert_eq!(nombre_en_lettres(21), "vingt et un");
        assert_eq!(nombre_en_lettres(34), "trente-quatre");
        assert_eq!(nombre_en_lettres(61), "soixante et un");
    }

    #[test]
    fn test_dizaines_vigesimales() {
        assert_eq!(nombre_en_lettres(70), "soixante-dix");
        assert_eq!(nombre_en_lettres(71), "soixante et onze");
        assert_eq!(nombre_en_lettres(75), "soixante-quinze");
        assert_eq!(nombre_en_lettres(80), "quatre-vingts");
        assert_eq!(nombre_en_lettres(81), "quatre-vingt-un");
        assert_eq!(nombre_en_lettres(90), "quatre-vingt-dix");
        assert_eq!(nombre_en_lettres(95), "quatre-vingt-quinze");
        assert_eq!(nombre_en_lettres(99), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn test_centaines() {
        assert_eq!(nombre_en_lettres(100), "cent");
        assert_eq!(nombre_en_lettres(101), "cent un");
        assert_eq!(nombre_en_lettres(200), "deux cents");
        assert_eq!(nombre_en_lettres(271), "deux cent soixante et onze");
        assert_eq!(nombre_en_lettres(999), "neuf cent quatre-vingt-dix-neuf");
    }

    #[test]
    fn test_milliers_et_millions() {
        assert_eq!(nombre_en_lettres(1_000), "mille");
        assert_eq!(nombre_en_lettres(1_001), "mille un");
        assert_eq!(nombre_en_lettres(2_000), "deux mille");
        assert_eq!(nombre_en_lettres(80_000), "quatre-vingt mille");
        assert_eq!(nombre_en_lettres(200_000), "deux cent mille");
        assert_eq!(nombre_en_lettres(125_000), "cent vingt-cinq mille");
        assert_eq!(nombre_en_lettres(1_000_000), "un million");
        assert_eq!(
            nombre_en_lettres(2_500_300),
            "deux millions cinq cent mille trois cents"
        );
    }

    #[test]
    fn test_montant_singulier_pluriel() {
        assert_eq!(montant_en_lettres(&Montant::new(0, 0)), "Zéro dirham");
        assert_eq!(montant_en_lettres(&Montant::new(1, 0)), "Un dirham");
        assert_eq!(montant_en_lettres(&Montant::new(2, 0)), "Deux dirhams");
        assert_eq!(montant_en_lettres(&Montant::new(1, 1)), "Un dirham et un centime");
    }

    #[test]
    fn test_montant_complet() {
        assert_eq!(
            montant_en_lettres(&Montant::new(125_000, 50)),
            "Cent vingt-cinq mille dirhams et cinquante centimes"
        );
    }

    #[test]
    fn test_montant_hors_borne_vide() {
        assert_eq!(montant_en_lettres(&Montant::new(1_000_000_000, 0)), "");
    }
}
