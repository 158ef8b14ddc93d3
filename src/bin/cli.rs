use std::time::Duration;

use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use sahitya::cli::create_admin;
use sahitya::cli::seeder::{clear_seeded_data, seed_database};
use sahitya::modules::notifications::poller::NotificationPoller;

#[derive(Parser)]
#[command(name = "sahitya-cli")]
#[command(about = "Sahitya CLI - Administrative tools for the Sahitya API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account (or promote an existing one)
    CreateAdmin {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake members, events, and accounts
    Seed {
        /// Number of directory members to create
        #[arg(short = 'm', long, default_value = "200")]
        members: usize,

        /// Number of events to create
        #[arg(long, default_value = "12")]
        events: usize,

        /// Number of ordinary member accounts to create
        #[arg(long, default_value = "50")]
        users: usize,
    },
    /// Clear all seeded data (keeps administrators)
    ClearSeed,
    /// Poll a user's notifications and print updates as they arrive
    WatchNotifications {
        /// Email of the account to watch
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Seconds between polls
        #[arg(short = 'i', long, default_value = "30")]
        interval_secs: u64,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize database connection
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin { email, password } => {
            handle_create_admin(&pool, email, password).await
        }
        Commands::Seed {
            members,
            events,
            users,
        } => handle_seed(&pool, members, events, users).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
        Commands::WatchNotifications {
            email,
            interval_secs,
        } => handle_watch_notifications(&pool, email, interval_secs).await,
    }
}

async fn handle_create_admin(
    pool: &sqlx::postgres::PgPool,
    email: Option<String>,
    password: Option<String>,
) {
    // Use provided values or prompt interactively
    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_admin(pool, &email, &password).await {
        Ok(_) => {
            println!("\n✅ Administrator ready!");
            println!("   Email: {}", email);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating administrator: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &sqlx::postgres::PgPool, members: usize, events: usize, users: usize) {
    match seed_database(pool, members, events, users).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("\n❌ Error seeding database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_seed(pool: &sqlx::postgres::PgPool) {
    match clear_seeded_data(pool).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("\n❌ Error clearing seeded data: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_watch_notifications(
    pool: &sqlx::postgres::PgPool,
    email: Option<String>,
    interval_secs: u64,
) {
    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    println!(
        "🔔 Watching notifications for {} (every {}s, Ctrl-C to stop)",
        email, interval_secs
    );

    let db = pool.clone();
    let fetch = move || {
        let db = db.clone();
        let email = email.clone();
        async move {
            sqlx::query_scalar::<_, Vec<String>>(
                "SELECT notifications FROM users WHERE email = $1",
            )
            .bind(&email)
            .fetch_optional(&db)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "account not found".to_string())
        }
    };

    let poller = NotificationPoller::new(fetch, Duration::from_secs(interval_secs));
    poller
        .run(|feed| {
            if let Some(latest) = feed.items().last() {
                println!("🔔 {} notification(s); latest: {}", feed.items().len(), latest);
            } else {
                println!("🔕 No notifications");
            }
        })
        .await;
}
