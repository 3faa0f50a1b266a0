use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;

use employee_service::config::Config;
use employee_service::db::{self, employee::EmployeeStore};
use employee_service::handlers;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let pool = db::create_pool(&config.database_url).await.map_err(|err| {
        error!("Failed to connect to the database: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;
    db::init_schema(&pool).await.map_err(|err| {
        error!("Failed to create the employees table: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    let store = web::Data::new(EmployeeStore::new(pool));
    let (host, port) = config.bind_address();

    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
