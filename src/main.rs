use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use hotspots::db::establish_connection_pool;
use hotspots::models::config::ServerConfig;
use hotspots::routes::hotspots::{create_hotspot, delete_hotspot, get_hotspot, update_hotspot};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(std::io::Error::other)?;
    let server_config: ServerConfig = settings.try_deserialize().map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(std::io::Error::other)?;

    log::info!(
        "Starting hotspots server on {}:{}",
        server_config.bind_address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .service(get_hotspot)
            .service(create_hotspot)
            .service(update_hotspot)
            .service(delete_hotspot)
    })
    .bind((server_config.bind_address.as_str(), server_config.port))?
    .run()
    .await
}
