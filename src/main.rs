use std::path::Path;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;

use hahu_classifier::artifacts::Artifacts;
use hahu_classifier::classifier::SgdConfig;
use hahu_classifier::{dataset, handlers};

const DATASET_PATH: &str = "data/hahu_dataset.csv";
const BIND_ADDR: &str = "0.0.0.0:5000";
const ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000",
    "https://amharic-chars-classif.vercel.app",
];

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Train on every start; the persisted files are snapshots only and are
    // never read back. Any failure here aborts before the server binds.
    let dataset =
        dataset::load_csv(Path::new(DATASET_PATH)).context("loading training dataset")?;
    let artifacts = Artifacts::train(&dataset, &SgdConfig::default())?;
    artifacts
        .persist(Path::new("."))
        .context("persisting fitted artifacts")?;

    log::info!("serving at http://{BIND_ADDR}");

    let artifacts = web::Data::new(artifacts);
    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["POST"])
            .allow_any_header();
        for origin in ALLOWED_ORIGINS {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .app_data(artifacts.clone())
            .service(web::resource("/predict").route(web::post().to(handlers::predict)))
    })
    .bind(BIND_ADDR)?
    .run()
    .await?;

    Ok(())
}
