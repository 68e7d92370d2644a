use log::error;
use mcpingme::config::Config;
use mcpingme::error::StartupError;
use mcpingme::web::{self, AppState};

#[actix_rt::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let state = AppState::load(&config)?;
    web::webserver_run(config, state).await?;
    Ok(())
}
