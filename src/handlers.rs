//! HTTP handlers - the boundary between the form client and the
//! composition core.
//!
//! The client composes a document, renders/prints it on its side, then
//! confirms the virement so its register row is committed. A confirmation
//! that fails to write stays a 200: the instrument already exists on paper
//! and must not be discarded because logging failed.

use actix_web::{
    web::{self, Path},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::compose::{
    compose_cheque, compose_lettre_change, compose_virement, ChequeRequest, ComposeError,
    LettreChangeRequest, VirementRequest,
};
use crate::journal::EcritureJournal;
use crate::state::AppState;
use crate::ErrorResponse;

fn erreur_compose(erreur: ComposeError) -> HttpResponse {
    match erreur {
        ComposeError::GabaritIncomplet { .. } => {
            log::error!("gabarit incohérent: {erreur}");
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&erreur.to_string()))
        }
        autre => HttpResponse::BadRequest().json(ErrorResponse::bad_request(&autre.to_string())),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Composition",
    post,
    path = "/cheques",
    request_body = ChequeRequest,
    responses(
        (status = 200, description = "Cheque composed", body = crate::compose::ComposedDocument),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn composer_cheque(
    request: web::Json<ChequeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match compose_cheque(&request, &data.layouts) {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(erreur) => erreur_compose(erreur),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Composition",
    post,
    path = "/virements",
    request_body = VirementRequest,
    responses(
        (status = 200, description = "Virement composed with its allocated number", body = crate::compose::ComposedDocument),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn composer_virement(
    request: web::Json<VirementRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let journal = data.journal.lock();
    match compose_virement(&request, &data.layouts, &data.annuaire, &journal) {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(erreur) => erreur_compose(erreur),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Composition",
    post,
    path = "/lettres-change",
    request_body = LettreChangeRequest,
    responses(
        (status = 200, description = "Lettre de change composed", body = crate::compose::ComposedDocument),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn composer_lettre_change(
    request: web::Json<LettreChangeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match compose_lettre_change(&request, &data.layouts) {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(erreur) => erreur_compose(erreur),
    }
}

/// Outcome of a register confirmation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JournalConfirmation {
    pub ordre: String,
    pub enregistre: bool,
    /// Set when the row could not be written; the document stays valid.
    pub avertissement: Option<String>,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Journal",
    post,
    path = "/virements/journal",
    request_body = EcritureJournal,
    responses(
        (status = 200, description = "Row appended, or warning when the register is unwritable", body = JournalConfirmation)
    )
)]
pub async fn confirmer_virement(
    ecriture: web::Json<EcritureJournal>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ecriture = ecriture.into_inner();
    match data.journal.lock().record(&ecriture) {
        Ok(()) => HttpResponse::Ok().json(JournalConfirmation {
            ordre: ecriture.ordre,
            enregistre: true,
            avertissement: None,
        }),
        Err(erreur) => {
            log::warn!("virement {} non journalisé: {erreur}", ecriture.ordre);
            HttpResponse::Ok().json(JournalConfirmation {
                ordre: ecriture.ordre,
                enregistre: false,
                avertissement: Some(erreur.to_string()),
            })
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Annuaire",
    get,
    path = "/beneficiaires/{nom}",
    responses(
        (status = 200, description = "Payee found", body = crate::annuaire::Beneficiaire),
        (status = 404, description = "Unknown payee", body = ErrorResponse)
    ),
    params(
        ("nom" = String, Path, description = "Payee name, matched case-insensitively")
    )
)]
pub async fn chercher_beneficiaire(
    nom: Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.annuaire.lookup(&nom) {
        Some(beneficiaire) => HttpResponse::Ok().json(beneficiaire),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found("Bénéficiaire inconnu")),
    }
}
