use actix_web::{middleware, web, App, HttpServer};
use bookshelf_api::app;
use bookshelf_api::config::Config;
use bookshelf_api::store::{open_store, BookStore};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    // The store lives for the whole process and is closed once the server stops.
    let store: web::Data<dyn BookStore> =
        web::Data::from(open_store(&config).map_err(std::io::Error::other)?);

    info!(
        "Server running at http://{}:{} ({} store)",
        config.host, config.port, config.store
    );

    let app_store = store.clone();
    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(app::cors_headers(&cors_origin))
            .configure(app::configure(app_store.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server stopped, closing {} store", config.store);
    if let Err(e) = store.close() {
        error!("Failed to close store: {}", e);
    }
    Ok(())
}
