pub mod app;
pub mod client;
pub mod conf;
pub mod controller;
pub mod db;
pub mod deadline;
pub mod http;
pub mod logging;
mod migrations;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

use app::App;
use conf::ServerConf;
use rocket::{catchers, routes, Build, Rocket};

pub fn prepare(rocket: Rocket<Build>, app: App) -> Rocket<Build> {
    rocket
        .mount("/", routes![controller::quote::get])
        .register("/", catchers![controller::error])
        .manage(app)
}

pub fn server(conf: &ServerConf, app: App) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", conf.address))
        .merge(("port", conf.port));

    prepare(rocket::custom(figment), app)
}
