use reglement_server::montant::{format_montant, montant_en_lettres, parse_montant, Montant};

#[test]
fn test_normalize_then_display_end_to_end() {
    let montant = parse_montant("125000,50").unwrap();
    assert_eq!(montant, Montant::new(125_000, 50));
    assert_eq!(format_montant(&montant), "#125 000,50");
    assert_eq!(
        montant_en_lettres(&montant),
        "Cent vingt-cinq mille dirhams et cinquante centimes"
    );
}

#[test]
fn test_display_groups_thousands_and_keeps_two_digits() {
    assert_eq!(
        format_montant(&parse_montant("1234567,89").unwrap()),
        "#1 234 567,89"
    );
    assert_eq!(format_montant(&parse_montant("1234567,9").unwrap()), "#1 234 567,90");
}

#[test]
fn test_normalize_display_round_trip() {
    for brut in ["0", "0,5", "12,34", "999,99", "125000,50", "1234567,89"] {
        let montant = parse_montant(brut).unwrap();
        let affiche = format_montant(&montant);
        assert_eq!(parse_montant(&affiche).unwrap(), montant, "aller-retour {brut}");
    }
}

#[test]
fn test_spelling_ends_with_unit_noun() {
    let cas = [
        ("0", "dirham"),
        ("1", "dirham"),
        ("2", "dirhams"),
        ("21,01", "centime"),
        ("300,40", "centimes"),
    ];
    for (brut, fin) in cas {
        let lettres = montant_en_lettres(&parse_montant(brut).unwrap());
        assert!(!lettres.is_empty());
        assert!(
            lettres.ends_with(fin),
            "{brut} -> {lettres} devrait finir par {fin}"
        );
    }
}

#[test]
fn test_spelling_irregular_tens() {
    let soixante_et_onze = montant_en_lettres(&parse_montant("71").unwrap());
    assert_eq!(soixante_et_onze, "Soixante et onze dirhams");
    let quatre_vingt_quinze = montant_en_lettres(&parse_montant("95").unwrap());
    assert_eq!(quatre_vingt_quinze, "Quatre-vingt-quinze dirhams");
}

#[test]
fn test_spelling_capitalized_once() {
    let lettres = montant_en_lettres(&parse_montant("200").unwrap());
    assert_eq!(lettres, "Deux cents dirhams");
    assert_eq!(lettres.chars().filter(|c| c.is_uppercase()).count(), 1);
}
