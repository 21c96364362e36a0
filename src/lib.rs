use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod annuaire;
pub mod compose;
pub mod config;
pub mod handlers;
pub mod journal;
pub mod layout;
pub mod montant;
pub mod state;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

/// Startup check that the three templates place every field their composer
/// depends on. A hole here is a configuration defect, caught before the
/// first request instead of during one.
fn verifier_gabarits(layouts: &layout::LayoutSet) -> anyhow::Result<()> {
    use layout::DocumentType;
    layouts
        .for_kind(DocumentType::Cheque)
        .require_all(compose::cheque::CHAMPS_GABARIT)?;
    layouts
        .for_kind(DocumentType::Virement)
        .require_all(compose::virement::CHAMPS_GABARIT)?;
    layouts
        .for_kind(DocumentType::LettreChange)
        .require_all(compose::lettre_change::CHAMPS_GABARIT)?;
    Ok(())
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::handlers::composer_cheque,
            crate::handlers::composer_virement,
            crate::handlers::composer_lettre_change,
            crate::handlers::confirmer_virement,
            crate::handlers::chercher_beneficiaire
        ),
        components(
            schemas(
                compose::ChequeRequest,
                compose::VirementRequest,
                compose::LettreChangeRequest,
                compose::ComposedDocument,
                compose::RenderedField,
                layout::FieldPlacement,
                layout::PageFormat,
                layout::DocumentType,
                layout::Alignment,
                layout::Police,
                montant::Montant,
                journal::EcritureJournal,
                handlers::JournalConfirmation,
                annuaire::Beneficiaire,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Composition", description = "Cheque, virement and lettre de change composition."),
            (name = "Journal", description = "Virement register confirmation."),
            (name = "Annuaire", description = "Payee directory lookups.")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok(); // Load .env file
    let config = AppConfig::from_env();
    let app_state = web::Data::new(AppState::new(&config));

    if let Err(e) = verifier_gabarits(&app_state.layouts) {
        log::error!("Gabarits de mise en page incohérents, arrêt: {e}");
        std::process::exit(1);
    }

    log::info!("Starting server at http://0.0.0.0:{}", config.port);

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/cheques")
                            .route(web::post().to(handlers::composer_cheque)),
                    )
                    .service(
                        web::resource("/virements")
                            .route(web::post().to(handlers::composer_virement)),
                    )
                    .service(
                        web::resource("/virements/journal")
                            .route(web::post().to(handlers::confirmer_virement)),
                    )
                    .service(
                        web::resource("/lettres-change")
                            .route(web::post().to(handlers::composer_lettre_change)),
                    )
                    .service(
                        web::resource("/beneficiaires/{nom}")
                            .route(web::get().to(handlers::chercher_beneficiaire)),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
