use actix_web::{App, HttpServer, middleware, web};

use outline_builder::{config::AppConfig, routes, session, session::PresentationStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let AppConfig { bind_addr, session_key, cookie_secure } = AppConfig::from_env();

    let store = PresentationStore::new();

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .wrap(session::middleware(session_key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
