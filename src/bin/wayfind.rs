//! Wayfind CLI: indoor wayfinding server and route tool.
//!
//! Usage:
//!   wayfind serve [--data-dir dir] [--bind addr] [--timeout-ms ms] [--cors-origin origin]...
//!   wayfind route <FROM> <TO> [--data-dir dir]
//!   wayfind check [--data-dir dir]

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wayfind::{
    load_snapshot, GraphSnapshot, JsonFileSource, RouteQuery, RouteResponse, ServerConfig,
    WayfindEngine,
};

#[derive(Parser)]
#[command(
    name = "wayfind",
    version,
    about = "Indoor wayfinding: room data, navigation graph and shortest routes"
)]
struct Cli {
    /// Directory containing graph.json and rooms.json
    #[arg(long, global = true, env = "WAYFIND_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(long, env = "WAYFIND_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
        /// Per-request timeout in milliseconds
        #[arg(long, env = "WAYFIND_REQUEST_TIMEOUT_MS", default_value_t = 5000)]
        timeout_ms: u64,
        /// Allowed CORS origin (repeatable; "*" allows any)
        #[arg(
            long = "cors-origin",
            env = "WAYFIND_CORS_ORIGINS",
            value_delimiter = ',',
            default_value = "*"
        )]
        cors_origins: Vec<String>,
    },
    /// Compute a route between two node ids and print it as JSON
    Route {
        /// Start node id
        from: String,
        /// End node id
        to: String,
    },
    /// Validate the data files and print a short report
    Check,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_snapshot(data_dir: &Path) -> Result<GraphSnapshot, String> {
    let source = JsonFileSource::new(data_dir);
    load_snapshot(&source).map_err(|e| format!("Failed to load data from {}: {}", data_dir.display(), e))
}

fn cmd_serve(config: ServerConfig) -> i32 {
    if let Err(e) = config.validate() {
        eprintln!("Error: invalid configuration: {}", e);
        return 1;
    }
    let snapshot = match open_snapshot(&config.data_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let engine = Arc::new(WayfindEngine::with_snapshot(snapshot));

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    match rt.block_on(wayfind::http::serve(engine, config)) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: server failed: {}", e);
            1
        }
    }
}

fn cmd_route(data_dir: &Path, from: &str, to: &str) -> i32 {
    let snapshot = match open_snapshot(data_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match RouteQuery::between(from, to).execute(&snapshot.plan) {
        Ok(route) => {
            let body = RouteResponse::new(route, &snapshot.plan);
            match serde_json::to_string_pretty(&body) {
                Ok(text) => {
                    println!("{}", text);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_check(data_dir: &Path) -> i32 {
    let snapshot = match open_snapshot(data_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let plan = &snapshot.plan;
    let isolated = plan
        .nodes()
        .iter()
        .filter(|n| plan.adjacency().neighbors(&n.id).is_empty())
        .count();

    println!("{:<10}  {:>7}", "FLOOR", "NODES");
    println!("{}", "-".repeat(19));
    for floor in plan.floors() {
        println!("{:<10}  {:>7}", floor, plan.nodes_on_floor(floor).count());
    }
    println!();
    println!("nodes:    {}", plan.node_count());
    println!("edges:    {}", plan.edge_count());
    println!("rooms:    {}", snapshot.rooms.len());
    if isolated > 0 {
        println!("isolated: {} (unreachable from anywhere else)", isolated);
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let code = match cli.command {
        Commands::Serve {
            bind,
            timeout_ms,
            cors_origins,
        } => cmd_serve(
            ServerConfig::default()
                .with_bind(bind)
                .with_data_dir(cli.data_dir)
                .with_request_timeout(Duration::from_millis(timeout_ms))
                .with_cors_origins(cors_origins),
        ),
        Commands::Route { from, to } => cmd_route(&cli.data_dir, &from, &to),
        Commands::Check => cmd_check(&cli.data_dir),
    };
    std::process::exit(code);
}
