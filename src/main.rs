use std::sync::Arc;
use std::time::Duration;

use fitness_planner::app::create_app;
use fitness_planner::service::PlannerService;
use fitness_planner::{config, consts};
use fitness_planner::session::SessionStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Fitness Planner service...");

    let config = config::load_config()
        .map_err(|e| std::io::Error::other(format!("Failed to load config: {e}")))?;

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(consts::CONNECT_TIMEOUT_SECS))
        .read_timeout(Duration::from_secs(consts::READ_TIMEOUT_SECS))
        .build()
        .map_err(std::io::Error::other)?;

    let planner_service = Arc::new(PlannerService::new(http_client));
    let session_store = Arc::new(SessionStore::new());
    let config = Arc::new(config);

    let bind_addr = config.bind_addr.clone();
    log::info!("Listening on {bind_addr}");

    let app_factory = move || {
        create_app(
            planner_service.clone(),
            session_store.clone(),
            config.clone(),
        )
    };

    actix_web::HttpServer::new(app_factory)
        .bind(bind_addr)?
        .run()
        .await
}
