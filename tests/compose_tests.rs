use reglement_server::annuaire::Annuaire;
use reglement_server::compose::common::current_year;
use reglement_server::compose::{
    compose_cheque, compose_virement, ChequeRequest, ComposeError, VirementRequest,
};
use reglement_server::journal::Journal;
use reglement_server::layout::{DocumentType, LayoutSet};
use tempfile::tempdir;

#[test]
fn test_cheque_end_to_end() {
    let layouts = LayoutSet::standard();
    let request = ChequeRequest {
        beneficiaire: "Office National".to_string(),
        montant: "125000,50".to_string(),
        ville: "Casablanca".to_string(),
        date: Some("15/01/2026".to_string()),
    };

    let document = compose_cheque(&request, &layouts).unwrap();
    assert_eq!(document.kind, DocumentType::Cheque);

    let montant = document.champs.iter().find(|c| c.champ == "montant").unwrap();
    assert_eq!(montant.lignes, vec!["#125 000,50".to_string()]);

    let lettres = document
        .champs
        .iter()
        .find(|c| c.champ == "montant_lettres_1")
        .unwrap();
    assert_eq!(
        lettres.lignes.join(" "),
        "Cent vingt-cinq mille dirhams et cinquante centimes"
    );

    // Every placed field carries the cheque page height for the renderer.
    for champ in &document.champs {
        assert_eq!(champ.hauteur_page_mm, 99.0);
        assert!(!champ.lignes.is_empty());
    }
}

#[test]
fn test_missing_payee_fails_without_side_effects() {
    let dir = tempdir().unwrap();
    let chemin_journal = dir.path().join("virements.csv");
    let journal = Journal::new(&chemin_journal);
    let layouts = LayoutSet::standard();

    let request = VirementRequest {
        montant: "500".to_string(),
        ..VirementRequest::default()
    };
    let erreur = compose_virement(&request, &layouts, &Annuaire::vide(), &journal).unwrap_err();

    match erreur {
        ComposeError::ChampManquant(e) => assert_eq!(e.champ, "beneficiaire"),
        autre => panic!("erreur inattendue: {autre}"),
    }
    // No ledger interaction happened.
    assert!(!chemin_journal.exists());
}

#[test]
fn test_virement_number_committed_only_after_render() {
    let dir = tempdir().unwrap();
    let journal = Journal::new(dir.path().join("virements.csv"));
    let layouts = LayoutSet::standard();
    let annee = current_year();

    let request = VirementRequest {
        beneficiaire: "Atlas Fournitures".to_string(),
        montant: "8750".to_string(),
        ..VirementRequest::default()
    };

    // Two compositions without a render confirmation in between reuse the
    // same number: composing must not consume it.
    let premier = compose_virement(&request, &layouts, &Annuaire::vide(), &journal).unwrap();
    let second = compose_virement(&request, &layouts, &Annuaire::vide(), &journal).unwrap();
    assert_eq!(premier.numero, second.numero);
    assert_eq!(premier.numero.as_deref(), Some(format!("{annee}/001").as_str()));

    // The render succeeded: commit, then the next number advances.
    journal.record(second.ecriture.as_ref().unwrap()).unwrap();
    let troisieme = compose_virement(&request, &layouts, &Annuaire::vide(), &journal).unwrap();
    assert_eq!(troisieme.numero.as_deref(), Some(format!("{annee}/002").as_str()));
}

#[test]
fn test_virement_entry_mirrors_document() {
    let dir = tempdir().unwrap();
    let journal = Journal::new(dir.path().join("virements.csv"));
    let layouts = LayoutSet::standard();

    let request = VirementRequest {
        beneficiaire: "Atlas Fournitures".to_string(),
        montant: "8750".to_string(),
        ..VirementRequest::default()
    };

    let document = compose_virement(&request, &layouts, &Annuaire::vide(), &journal).unwrap();
    let ecriture = document.ecriture.unwrap();
    assert_eq!(Some(ecriture.ordre), document.numero);
    assert_eq!(ecriture.montant, "#8 750,00");
    assert_eq!(
        ecriture.montant_lettres,
        "Huit mille sept cent cinquante dirhams"
    );
    assert_eq!(ecriture.type_virement, "Ordinaire");
}
