use cotacao::{app::App, conf::Conf, logging, server};
use std::process::exit;
use tracing::{error, info};

#[rocket::main]
async fn main() {
    logging::init();

    let conf = Conf::new().unwrap_or_else(|e| {
        error!(%e, "Unable to load configuration");
        exit(1);
    });

    let app = App::new(&conf.server).unwrap_or_else(|e| {
        error!(%e, "Unable to prepare the database");
        exit(1);
    });

    info!(port = conf.server.port, upstream = %conf.server.upstream_url, "Starting quote server");

    if let Err(e) = server(&conf.server, app).launch().await {
        error!(?e, "Server failed");
        exit(1);
    }
}
