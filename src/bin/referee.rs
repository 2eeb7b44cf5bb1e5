use clap::Parser;
use color_eyre::Result;
use log::info;
use snake_referee::{api::routes, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let config = Config::parse();

    info!("listening on {}", config.addr());

    warp::serve(routes(&config)).run(config.addr()).await;

    Ok(())
}
