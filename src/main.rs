use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use liftout_match::config::{LoggingSettings, Settings};
use liftout_match::core::{Matcher, ScoringTables};
use liftout_match::models::{Opportunity, ScoringWeights, Team};
use liftout_match::routes::{self, AppState};
use liftout_match::services::{InMemoryStore, OpportunityStore, TeamStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.format.as_str() {
        "json" => subscriber.json().init(),
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Liftout matching service...");

    let tables = match &settings.scoring.tables_path {
        Some(path) => ScoringTables::load(path).map_err(|e| {
            error!("Failed to load scoring tables from {}: {}", path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => ScoringTables::default(),
    };

    let weights = ScoringWeights::from(&settings.scoring.weights);
    if (weights.sum() - 1.0).abs() > 1e-6 {
        tracing::warn!("Scoring weights sum to {:.3}, scores will not span 0-100", weights.sum());
    }

    let mut matcher = Matcher::new(weights, tables);
    if let Some(seed) = settings.scoring.seed {
        info!("Market intelligence selection pinned to seed {}", seed);
        matcher = matcher.with_seed(seed);
    }

    info!("Matcher initialized with weights: {:?}", weights);

    let teams: Arc<TeamStore> = Arc::new(InMemoryStore::<Team>::new());
    let opportunities: Arc<OpportunityStore> = Arc::new(InMemoryStore::<Opportunity>::new());

    let app_state = AppState {
        matcher,
        teams,
        opportunities,
        matching: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
