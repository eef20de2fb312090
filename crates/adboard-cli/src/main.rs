use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use adboard_core::models::NewAd;
use adboard_core::password::DEFAULT_COST;
use adboard_core::{AdService, AdminService, PasswordHasher, TokenIssuer};
use adboard_db::{AdRepository, AdminRepository, Database, DatabaseConfig};

#[derive(Parser)]
#[command(name = "adboard", version, about = "Operator tools for the Adboard admin backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an admin account (same rules as POST /api/admin/seed)
    SeedAdmin {
        #[arg(short, long)]
        email: String,

        /// Reads ADBOARD_ADMIN_PASSWORD if not given on the command line
        #[arg(short, long, env = "ADBOARD_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long, env = "ADBOARD_BCRYPT_COST", default_value_t = DEFAULT_COST)]
        cost: u32,
    },

    /// Log in as an admin and print a bearer token
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "ADBOARD_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        /// Must match the server's signing secret for the token to be accepted
        #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,

        /// Should match the server's cost so failed logins take the same time
        #[arg(long, env = "ADBOARD_BCRYPT_COST", default_value_t = DEFAULT_COST)]
        cost: u32,
    },

    /// Manage ads
    Ads {
        #[command(subcommand)]
        command: AdsCommand,
    },

    /// Print the bcrypt hash of a password
    HashPassword {
        password: String,

        #[arg(long, env = "ADBOARD_BCRYPT_COST", default_value_t = DEFAULT_COST)]
        cost: u32,
    },
}

#[derive(Subcommand)]
enum AdsCommand {
    /// List all ads
    List {
        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Create an ad
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("adboard=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::SeedAdmin {
            email,
            password,
            cost,
        } => {
            let db = connect_db().await?;
            cmd_seed_admin(db.admin_repo(), &email, &password, cost).await?;
        }
        Commands::Login {
            email,
            password,
            jwt_secret,
            cost,
        } => {
            let db = connect_db().await?;
            cmd_login(db.admin_repo(), &email, &password, &jwt_secret, cost).await?;
        }
        Commands::Ads { command } => {
            let db = connect_db().await?;
            let ads = AdService::new(db.ad_repo());
            match command {
                AdsCommand::List { json } => cmd_list_ads(&ads, json).await?,
                AdsCommand::Create { title, description } => {
                    cmd_create_ad(&ads, title, description).await?
                }
            }
        }
        Commands::HashPassword { password, cost } => {
            let hasher = PasswordHasher::new(cost)?;
            println!("{}", hasher.hash(&password)?);
        }
    }

    Ok(())
}

/// Connect to PostgreSQL using DATABASE_URL and apply migrations.
async fn connect_db() -> Result<Database> {
    let config = DatabaseConfig::from_env()?;
    let db = Database::connect(&config)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await?;
    Ok(db)
}

async fn cmd_seed_admin(
    repo: AdminRepository,
    email: &str,
    password: &str,
    cost: u32,
) -> Result<()> {
    let service = AdminService::new(repo, PasswordHasher::new(cost)?)?;

    let account = service.seed(email, password).await?;
    println!("Admin created: {} ({})", account.email, account.id);
    Ok(())
}

async fn cmd_login(
    repo: AdminRepository,
    email: &str,
    password: &str,
    jwt_secret: &str,
    cost: u32,
) -> Result<()> {
    let issuer = TokenIssuer::new(jwt_secret.as_bytes())?;
    let service = AdminService::new(repo, PasswordHasher::new(cost)?)?;

    let issued = service.login(&issuer, email, password).await?;
    tracing::info!(
        "Token expires at {}",
        issued.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("{}", issued.token);
    Ok(())
}

async fn cmd_list_ads(ads: &AdService<AdRepository>, json: bool) -> Result<()> {
    let ads = ads.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ads)?);
        return Ok(());
    }

    if ads.is_empty() {
        println!("No ads found");
        return Ok(());
    }

    for ad in &ads {
        println!(
            "  {}  {} ({})",
            ad.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            ad.title,
            ad.id,
        );
        println!("      {}", ad.description);
    }

    println!("\nTotal: {} ads", ads.len());
    Ok(())
}

async fn cmd_create_ad(
    ads: &AdService<AdRepository>,
    title: String,
    description: String,
) -> Result<()> {
    let ad = ads.create(&NewAd::new(title, description)).await?;
    println!("Ad created: {}", ad.id);
    Ok(())
}
