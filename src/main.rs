use actix_web::{middleware, web, App, HttpServer};
use horoscope_matcher::cli::CommandLine;
use horoscope_matcher::config::{LoggingSettings, Settings};
use horoscope_matcher::middleware::cors;
use horoscope_matcher::routes::{self, matches::AppState};
use horoscope_matcher::{AstroMatcher, MatchMaker, Roster};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let commands = CommandLine::parse_args();

    // Load configuration
    let settings = match &commands.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_logging(&settings.logging);

    info!("Configuration loaded successfully");

    let roster = Roster::load_or_builtin(settings.matching.roster_path.as_deref()).map_err(|e| {
        error!("Failed to load roster: {}", e);
        std::io::Error::other(e)
    })?;

    let weights = settings.scoring_weights();
    let matcher = AstroMatcher::new(
        roster,
        weights,
        settings.matching.limit,
        settings.matching.min_score,
    );

    info!(
        "Matcher initialized with {} people, weights: {:?}",
        matcher.roster().len(),
        weights
    );

    if !commands.gui {
        if let Some((sun, moon, rising)) = commands.chart() {
            let matches = matcher
                .make_matches(sun, moon, rising)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
            for name in matches {
                println!("{}", name);
            }
        } else {
            info!("Server not started; pass --gui to serve requests");
        }
        return Ok(());
    }

    // Build application state
    let app_state = AppState::new(matcher);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = commands.port.unwrap_or(settings.server.port);
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(middleware::from_fn(cors))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
