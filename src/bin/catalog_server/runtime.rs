use graphics_catalog::logging::{LogTarget, init_tracing};

use super::*;

#[derive(Parser)]
#[command(name = "graphics-catalog-server")]
#[command(about = "Serve a directory of catalog files over HTTP (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Directory holding the manifest and the asset files it references
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(LogTarget::Stderr)?;

    let data_dir = args
        .data_dir
        .canonicalize()
        .with_context(|| format!("open data dir {}", args.data_dir.display()))?;

    let state = Arc::new(AppState { data_dir });
    let app = Router::new()
        .route("/healthz", get(healthz))
        .fallback(serve_file)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("graphics-catalog-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
