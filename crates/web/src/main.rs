use anyhow::Context;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod mailer;
mod middleware;
mod state;

use config::Config;
use mailer::Mailer;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::update_competition,
        features::competitions::handlers::delete_competition,
        features::editions::handlers::list_editions,
        features::editions::handlers::get_edition,
        features::editions::handlers::create_edition,
        features::editions::handlers::update_edition,
        features::editions::handlers::publish_edition,
        features::editions::handlers::delete_edition,
        features::entries::handlers::list_entries,
        features::entries::handlers::get_entry,
        features::entries::handlers::create_entry,
        features::entries::handlers::approve_entry,
        features::entries::handlers::reject_entry,
        features::entries::handlers::withdraw_entry,
        features::stages::handlers::list_stages,
        features::stages::handlers::create_stage,
        features::stages::handlers::update_stage,
        features::stages::handlers::delete_stage,
        features::stages::handlers::reorder_stages,
        features::stages::handlers::list_groups,
        features::stages::handlers::create_group,
        features::stages::handlers::update_group,
        features::stages::handlers::delete_group,
        features::matches::handlers::list_matches,
        features::matches::handlers::get_match,
        features::matches::handlers::create_match,
        features::matches::handlers::update_match,
        features::matches::handlers::delete_match,
        features::matches::handlers::generate_matches,
        features::matches::handlers::add_match_event,
        features::matches::handlers::list_match_events,
        features::scoreboard::handlers::get_scoreboard,
        features::scoreboard::handlers::trigger_highlight,
    ),
    components(
        schemas(
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::UpdateCompetitionRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::edition::CreateEditionRequest,
            storage::dto::edition::UpdateEditionRequest,
            storage::dto::edition::EditionResponse,
            storage::dto::entry::CreateEntryRequest,
            storage::dto::entry::EntryResponse,
            storage::dto::stage::CreateStageRequest,
            storage::dto::stage::UpdateStageRequest,
            storage::dto::stage::ReorderStagesRequest,
            storage::dto::stage::CreateGroupRequest,
            storage::dto::stage::UpdateGroupRequest,
            storage::dto::matches::CreateMatchRequest,
            storage::dto::matches::UpdateMatchRequest,
            storage::dto::matches::CreateMatchEventRequest,
            storage::dto::matches::GenerateMatchesRequest,
            storage::dto::matches::GeneratedMatchesResponse,
            storage::dto::matches::GenerationStrategy,
            storage::dto::scoreboard::ScoreboardResponse,
            storage::dto::scoreboard::ScoreboardEdition,
            storage::dto::scoreboard::Standing,
            storage::dto::scoreboard::TopScorer,
            storage::dto::scoreboard::DisplayMatch,
            storage::dto::scoreboard::RotationSection,
            storage::dto::scoreboard::EntryRef,
            storage::dto::scoreboard::TriggerHighlightRequest,
            storage::models::Competition,
            storage::models::Edition,
            storage::models::EditionStatus,
            storage::models::EditionFormat,
            storage::models::Entry,
            storage::models::EntryStatus,
            storage::models::Stage,
            storage::models::StageKind,
            storage::models::Group,
            storage::models::Match,
            storage::models::MatchStatus,
            storage::models::MatchEvent,
            storage::models::MatchEventType,
            storage::models::Highlight,
            storage::models::ThemeConfig,
        )
    ),
    tags(
        (name = "competitions", description = "Competition management"),
        (name = "editions", description = "Edition management"),
        (name = "entries", description = "Team entry registration and lifecycle"),
        (name = "stages", description = "Stage and group scheduling structure"),
        (name = "matches", description = "Match results, events and bulk generation"),
        (name = "scoreboard", description = "Public live scoreboard"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting tournament platform API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    let state = AppState {
        db,
        mailer: Mailer::new(config.mail_webhook_url.clone()),
    };

    let app = axum::Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", features::routes(api_keys))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
