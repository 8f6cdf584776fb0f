use std::{sync::Arc, net::{SocketAddr, IpAddr, Ipv4Addr}, str::FromStr};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use profile_explorer::config::{self, ExplorerConfig};
use profile_explorer::services::explorer_service::ProfileExplorer;
use profile_explorer::{build_app, register_templates, AppState};


// Command line interface
#[derive(Parser, Debug)]
#[clap(name="profile-explorer", about="Look up a GitHub user and browse their repositories!")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,

    #[clap(long = "api_base", default_value = config::DEFAULT_API_BASE)]
    api_base: String,

    #[clap(long = "user_agent", default_value = config::DEFAULT_USER_AGENT)]
    user_agent: String,

    #[clap(long = "page_size", default_value_t = config::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    #[clap(long = "per_page", default_value_t = config::DEFAULT_PER_PAGE)]
    per_page: u32,

    #[clap(long = "timeout_secs", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl Opt {
    fn explorer_config(&self) -> ExplorerConfig {
        ExplorerConfig {
            api_base: self.api_base.clone(),
            user_agent: self.user_agent.clone(),
            page_size: self.page_size,
            per_page: self.per_page,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fetch console arguments
    let opt = Opt::parse();
    anyhow::ensure!(opt.page_size > 0, "--page_size must be at least 1");

    // Enable console logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{},hyper=info,mio=info", opt.log_level)))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let explorer_config = opt.explorer_config();
    log::debug!("{:?}", explorer_config);

    // Setup services and inject app state
    let app_state = Arc::new(AppState {
        registry: register_templates()?,
        explorer: ProfileExplorer::from_config(&explorer_config)?,
    });
    let app = build_app(app_state, &opt.static_dir);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port
    ));
    log::info!("Now listening on http://{}", sock_addr);

    axum::Server::bind(&sock_addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    log::info!("Received shutdown signal, starting graceful shutdown");
}
