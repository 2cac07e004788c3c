use transportnyc::config::Config;
use transportnyc::engine::Engine;
use transportnyc::server::serve;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let engine = Engine::new(config);

    serve(engine, addr).await;
}
