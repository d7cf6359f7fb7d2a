use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use log::info;

use youmusic_backend::api::{ApiClient, ApiConfig};
use youmusic_backend::application::ConversionCoordinator;
use youmusic_backend::config::AppConfig;
use youmusic_backend::handlers;
use youmusic_backend::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let AppConfig {
        rapidapi_key,
        listen_addr,
    } = AppConfig::from_env().context("cannot start without configuration")?;

    let api_client = ApiClient::new(ApiConfig::new(rapidapi_key));
    let state = web::Data::new(AppState {
        coordinator: ConversionCoordinator::new(api_client),
    });

    info!("youmusic backend listening on http://{}", listen_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            // The browser frontend is served from another origin.
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(handlers::routes)
    })
    .bind(listen_addr.as_str())?
    .run()
    .await?;

    Ok(())
}
