use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use portal_access::navigation::visible_sections;
use portal_access::{create_portal, Portal, PortalConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "e-Yantra portal access inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Credentials {
    /// Institutional email of the account
    #[arg(long)]
    email: String,
    /// Accepted but not verified
    #[arg(long, default_value = "")]
    password: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the role -> permission table
    Roles,
    /// Log in and report each permission as allowed or denied
    Check {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(required = true)]
        permissions: Vec<String>,
    },
    /// Log in and list the sidebar sections the account can see
    Menu {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Log in and print the account record as JSON
    Whoami {
        #[command(flatten)]
        credentials: Credentials,
    },
}

fn main() -> anyhow::Result<()> {
    load_env();
    init_tracing();

    let cli = Cli::parse();

    // `roles` only reads the built-in table; no directory is loaded.
    let command = match cli.command {
        Commands::Roles => {
            print_roles();
            return Ok(());
        }
        command => command,
    };

    let config = PortalConfig::from_env().context("invalid portal configuration")?;
    let mut portal = create_portal(config).context("failed to build portal")?;

    match command {
        Commands::Roles => print_roles(),
        Commands::Check {
            credentials,
            permissions,
        } => {
            sign_in(&mut portal, &credentials)?;
            for permission in permissions {
                let verdict = if portal.has_permission(&permission) {
                    "allowed"
                } else {
                    "denied"
                };
                println!("{:<20} {}", permission, verdict);
            }
        }
        Commands::Menu { credentials } => {
            sign_in(&mut portal, &credentials)?;
            for section in visible_sections(&portal) {
                println!("{:<14} {}", section.id(), section.label());
            }
        }
        Commands::Whoami { credentials } => {
            sign_in(&mut portal, &credentials)?;
            if let Some(principal) = portal.current_principal() {
                let json = serde_json::to_string_pretty(principal)
                    .context("failed to serialize principal")?;
                println!("{json}");
            }
        }
    }

    portal.logout();
    Ok(())
}

fn sign_in(portal: &mut Portal, credentials: &Credentials) -> anyhow::Result<()> {
    portal
        .try_login(&credentials.email, &credentials.password)
        .with_context(|| format!("login rejected for {}", credentials.email))?;
    Ok(())
}

fn print_roles() {
    let evaluator = portal_access::authz::DefaultPolicyEvaluator::default();
    println!("{:<16} {}", "Role", "Permissions");
    for (role, permissions) in evaluator.table().iter() {
        let names: Vec<&str> = permissions.iter().map(|p| p.as_str()).collect();
        println!("{:<16} {}", role.as_str(), names.join(", "));
    }
}

fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
