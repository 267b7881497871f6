mod config;
mod error;
mod huggingface;
mod logger;
mod mood;
mod playlist;
mod server;
mod spotify;
mod upstream;

#[cfg(test)]
mod stub_upstream;

use std::sync::Arc;

use reqwest::Client;
use tokio::runtime;

use crate::config::Config;
use crate::huggingface::HuggingFaceClient;
use crate::playlist::PlaylistGenerator;
use crate::spotify::SpotifyClient;

fn main() -> anyhow::Result<()> {
    // load .env, then config
    let dotenv = dotenvy::dotenv();
    let config = Config::from_env()?;

    // init logger
    logger::init_stdout_logger(config.log_level)?;
    if let Some(warning) = config::dotenv_warning(dotenv) {
        log::warn!("{warning}");
    }
    for key in config.missing_secrets() {
        log::warn!("{key} is not set, upstream calls will be rejected");
    }
    log::debug!("config = {config:?}");

    // one connection pool shared by both upstreams
    let mut builder = Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;
    let spotify = Arc::new(SpotifyClient::new(client.clone(), &config));
    let huggingface = Arc::new(HuggingFaceClient::new(client, &config));
    let generator = PlaylistGenerator::new(huggingface, spotify.clone(), spotify);

    // build runtime
    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(server::run_server(generator, &config.listen_addr()))
}
