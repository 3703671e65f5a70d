#[deny(clippy::all)]
use dotenv::dotenv;
use mysql_app::logging::setup_logging;
use mysql_app::utils::{get_db_pool, Config};
use poem::listener::{Listener, TcpListener};
use poem::Server;
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenv().ok(); // This line loads the environment variables from the ".env" file.
    color_eyre::install()?;
    setup_logging()?;

    let config = Config::from_env();
    let pool = get_db_pool(&config);

    let acceptor = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .into_acceptor()
        .await?;
    info!("Server running on port {}", config.port);
    Server::new_with_acceptor(acceptor)
        .run(mysql_app::app(pool))
        .await?;

    Ok(())
}
