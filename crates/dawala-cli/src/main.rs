use clap::{Parser, Subcommand};
use dawala_cli::report::{format_account_row, format_report, seed_exit_code};
use dawala_config::{AutoSetupConfig, ConfigError, DefaultAdminConfig, IdentityConfig};
use dawala_identity::SupabaseAdminClient;
use dawala_models::AdminAccountRequest;
use dawala_provisioning::{
    default_admin_accounts, delete_admin_account, ensure_bootstrap_admin, list_accounts,
    seed_admin_accounts,
};
use dialoguer::{Confirm, Password};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dawala-cli")]
#[command(about = "Dawala CLI - Admin account provisioning tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the default admin account, or a single account given by flags
    Seed {
        /// Email address (seeds the defaults when omitted)
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Role stored in the account metadata
        #[arg(short = 'r', long)]
        role: Option<String>,
    },
    /// Delete an admin account by email
    Delete {
        /// Email address of the account to delete
        #[arg(short = 'e', long)]
        email: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// List every account in the identity service
    List,
    /// Create the admin named by ADMIN_EMAIL if it does not exist
    Setup,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    println!("🌱 Dawala Admin Seeder");
    println!("======================\n");

    let client = connect();

    match cli.command {
        Commands::Seed {
            email,
            password,
            name,
            role,
        } => handle_seed(&client, email, password, name, role).await,
        Commands::Delete { email, yes } => handle_delete(&client, &email, yes).await,
        Commands::List => handle_list(&client).await,
        Commands::Setup => handle_setup(&client).await,
    }
}

fn connect() -> SupabaseAdminClient {
    let config = match IdentityConfig::from_env() {
        Ok(config) => config,
        Err(ConfigError::MissingVars(vars)) => {
            eprintln!("❌ Missing required environment variables:");
            for var in vars {
                eprintln!("   - {var}");
            }
            eprintln!("\nPlease check your .env file");
            std::process::exit(1);
        }
    };

    match SupabaseAdminClient::new(&config) {
        Ok(client) => {
            println!("✅ Environment variables loaded successfully\n");
            client
        }
        Err(e) => {
            eprintln!("❌ Could not build the identity client: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_seed(
    client: &SupabaseAdminClient,
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
    role: Option<String>,
) {
    let defaults = DefaultAdminConfig::from_env();

    let requests = match email {
        None => default_admin_accounts(&defaults),
        Some(email) => {
            let password = match password {
                Some(password) => password,
                None => prompt_password(),
            };
            vec![AdminAccountRequest::new(
                email,
                password,
                name.unwrap_or(defaults.name),
                role.unwrap_or(defaults.role),
            )]
        }
    };

    println!("🚀 Starting admin seeder...\n");
    let report = seed_admin_accounts(client, &requests).await;

    if report.has_failures() {
        println!("⚠️  Seeder finished with failures\n");
    } else {
        println!("✅ Seeder completed successfully!\n");
    }
    print!("{}", format_report(&report));

    std::process::exit(seed_exit_code(&report));
}

fn prompt_password() -> String {
    match Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords don't match")
        .interact()
    {
        Ok(password) => password,
        Err(e) => {
            eprintln!("\n❌ Failed to read password: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_delete(client: &SupabaseAdminClient, email: &str, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete admin account {email}?"))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmed {
            println!("Aborted.");
            return;
        }
    }

    match delete_admin_account(client, email).await {
        Ok(deleted) => {
            println!("✅ Admin user deleted successfully");
            println!("   Email: {}", deleted.email);
            println!("   ID: {}", deleted.id);
        }
        Err(e) => {
            eprintln!("\n❌ Error deleting admin user: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_list(client: &SupabaseAdminClient) {
    match list_accounts(client).await {
        Ok(accounts) => {
            println!("👥 {} account(s)\n", accounts.len());
            for account in &accounts {
                println!("{}", format_account_row(account));
            }
        }
        Err(e) => {
            eprintln!("\n❌ Error listing accounts: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_setup(client: &SupabaseAdminClient) {
    let config = AutoSetupConfig::from_env();

    match ensure_bootstrap_admin(client, &config).await {
        Ok(outcome) => println!("✅ {}", outcome.message()),
        Err(e) => {
            eprintln!("\n❌ Auto-setup failed: {e}");
            std::process::exit(1);
        }
    }
}
