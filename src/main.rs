use quay::config::Config;
use quay::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = match Config::from_args(std::env::args()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: quay <address> <port> <root>");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tokio::select! {
        res = server::listener::serve(&cfg) => {
            if let Err(e) = res {
                tracing::error!(error = %e, "server stopped");
                std::process::exit(1);
            }
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
