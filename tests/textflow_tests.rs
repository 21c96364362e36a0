use reglement_server::layout::textflow::{split_overflow, wrap, BUDGET_LIGNE};
use reglement_server::layout::Police;
use reglement_server::montant::{montant_en_lettres, parse_montant};

#[test]
fn test_short_phrase_is_one_segment() {
    let lettres = montant_en_lettres(&parse_montant("42").unwrap());
    assert_eq!(split_overflow(&lettres, 3), vec![lettres]);
}

#[test]
fn test_long_spelling_splits_at_conjunction() {
    // 1 234 567,89 spells past the line budget and contains the
    // conjunction between dirhams and centimes.
    let lettres = montant_en_lettres(&parse_montant("1234567,89").unwrap());
    assert!(lettres.chars().count() > BUDGET_LIGNE);

    let segments = split_overflow(&lettres, 3);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].ends_with("dirhams"));
    assert!(segments[1].starts_with("et "));
    assert!(segments[1].ends_with("centimes"));
}

#[test]
fn test_no_natural_break_hard_splits_under_budget() {
    let phrase = "N".repeat(150);
    let segments = split_overflow(&phrase, 2);
    assert_eq!(segments.len(), 2);
    for segment in &segments {
        assert!(segment.chars().count() <= BUDGET_LIGNE);
    }
}

#[test]
fn test_wrap_is_restartable_and_pure() {
    let texte = "Virement permanent en faveur du fournisseur principal";
    let premiere = wrap(texte, 45.0, Police::Arial, 10.0);
    let seconde = wrap(texte, 45.0, Police::Arial, 10.0);
    assert_eq!(premiere, seconde);
    assert!(premiere.len() > 1);
    assert_eq!(premiere.join(" "), texte);
}
