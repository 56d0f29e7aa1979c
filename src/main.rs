use linkgate::config::{get_config, init_config};
use linkgate::server::run_server;
use linkgate::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_config();
    let config = get_config();

    // Guard must outlive the server so buffered log lines are flushed
    let _guard = init_logging(&config.logging);

    run_server().await
}
