use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use vportal::api::AwsProvider;
use vportal::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use vportal::models::{AppState, DashboardLayout, DashboardSection};
use vportal::services::{
    count_virtual_desktops, Dashboard, HttpProductsSource, ProductsSource, ProviderProductsSource,
};

async fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let provider = AwsProvider::from_env().await;
    if let Err(e) = provider.check_credentials().await {
        tracing::warn!(%e, "AWS credentials could not be resolved; provider calls will fail");
    }
    AppState {
        region: provider.region(),
        provider: Arc::new(provider),
        layout: DashboardLayout::from_env(),
        launch_urls: config::get_launch_urls(),
        custom_css: None,
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let region = state.region.clone();
    let app = vportal::build_app(state);
    tracing::info!(%addr, %region, "Starting portal server");
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn print_sections(sections: &[DashboardSection]) {
    for section in sections {
        println!("\n{} ({})", yansi::Paint::new(&section.title).bold(), section.card_count());
        if section.cards.is_empty() {
            println!("{}", yansi::Paint::new("(none)").dim());
            continue;
        }
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if let Some((Width(w), _)) = terminal_size() {
            table.set_width(w.saturating_sub(4));
        }
        table.set_header(vec!["Name", "State", "Details", "Launch"]);
        for card in &section.cards {
            let details = card
                .details
                .iter()
                .map(|d| format!("{}: {}", d.term, d.value))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(vec![
                card.title.clone(),
                card.status.clone(),
                details,
                card.launch_url.clone().unwrap_or_default(),
            ]);
        }
        println!("{table}");
    }
    println!();
}

#[derive(Parser)]
#[command(
    name = "vportal",
    author,
    version,
    about = "Virtual desktop and streaming app portal",
    long_about = r#"vportal lists the WorkSpaces, web-access WorkSpaces, and AppStream fleets of an AWS account and links each one to its client.

AWS credentials and region come from the standard AWS chains (environment, ~/.aws profiles, SSO, container and instance roles). A .env file is loaded first if present.

Examples:
  1) Run the portal:
      vportal serve --host 0.0.0.0 --port 3000
  2) Check credentials:
      vportal check-config
  3) Show products from a running portal:
      vportal products --url http://127.0.0.1:3000
"#,
    after_help = "Use `vportal <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (credentials / region)
    #[command(about = "Validate configuration and ensure provider connectivity.", long_about = "Check that AWS credentials are configured, then describe the account's WorkSpaces once and report how many were returned.")]
    CheckConfig { env_file: Option<String> },
    /// Show the dashboard in the terminal
    #[command(about = "List products as the dashboard shows them", long_about = "Fetch the aggregated products once and print one table per dashboard section. With `--url` the products come from a running portal's /api/products; otherwise the provider is called directly.")]
    Products {
        /// Base URL of a running portal
        #[arg(long)]
        url: Option<String>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Print the aggregated JSON instead of tables
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Serve the web app when no command is given
    let Some(command) = cli.command else {
        let state = build_state_from_env(None).await;
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            config::load_env_file(env_file.as_deref());
            let provider = AwsProvider::from_env().await;
            if let Err(e) = provider.check_credentials().await {
                eprintln!("{}: {}", yansi::Paint::new("AWS credentials could not be resolved").red(), e);
                process::exit(1);
            }
            println!("Region: {}", yansi::Paint::new(provider.region()).cyan());
            match count_virtual_desktops(&provider).await {
                Ok(count) => {
                    println!("{} ({} WorkSpaces returned)", yansi::Paint::new("Configuration looks valid").green(), count);
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Error describing WorkSpaces").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Products { url, env_file, json } => {
            config::load_env_file(env_file.as_deref());
            let source: Box<dyn ProductsSource> = match url {
                Some(u) => match HttpProductsSource::new(&u) {
                    Ok(s) => Box::new(s),
                    Err(e) => {
                        eprintln!("{}: {}", yansi::Paint::new("Invalid portal URL").red(), e);
                        process::exit(1);
                    }
                },
                None => Box::new(ProviderProductsSource::new(Arc::new(AwsProvider::from_env().await))),
            };
            let mut dashboard = Dashboard::new(DashboardLayout::from_env(), config::get_launch_urls());
            if !dashboard.refresh(source.as_ref()).await {
                eprintln!("{}", yansi::Paint::new("Could not load products (see log output)").red());
                process::exit(1);
            }
            if json {
                match serde_json::to_string_pretty(dashboard.products()) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("{}: {}", yansi::Paint::new("Failed to encode products").red(), e);
                        process::exit(1);
                    }
                }
            } else {
                print_sections(&dashboard.sections());
            }
        }
    }
}
