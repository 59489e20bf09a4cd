use database::{DatabaseConnectionInfo, PgDatabase};
use providers::{ProviderClient, ProviderConfig};
use web::{start_web_server, WebConfig, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = WebConfig::from_env().expect("expected a valid WEB_BIND_ADDRESS.");

    // providers
    let provider_config = ProviderConfig::env();
    if provider_config.directions_api_key.is_none() {
        log::warn!("GOOGLE_DIRECTIONS_API_KEY is not set, route requests will fail.");
    }
    if provider_config.huggingface_api_key.is_none() {
        log::warn!("HUGGINGFACE_API_KEY is not set, stories will not be generated.");
    }
    let providers =
        ProviderClient::new(provider_config).expect("could not build provider client.");

    // database
    let database = match DatabaseConnectionInfo::from_env() {
        Some(database_connection_info) => Some(
            PgDatabase::connect(database_connection_info)
                .await
                .expect("could not connect to database."),
        ),
        None => {
            log::warn!("DATABASE_* is not set, journeys cannot be saved.");
            None
        }
    };

    // web server
    let state = WebState {
        providers,
        database,
    };
    if let Err(why) = start_web_server(state, config).await {
        log::error!("web server stopped: {}", why);
    }
}
