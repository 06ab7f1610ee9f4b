mod account;
mod feed;
mod menu;

use clap::{Parser, Subcommand};
use munch_feed::{FeedClient, FeedFilter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "munch")]
#[command(about = "Browse surplus-food restaurants from the terminal")]
struct Cli {
    /// Override the API base URL from the environment
    #[arg(long, global = true, env = "MUNCH_API_BASE_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the restaurant feed
    Feed {
        /// nearest, iconic, rating, deals, or open-now
        #[arg(long, default_value = "nearest")]
        filter: FeedFilter,

        /// Narrow the feed to one cuisine (e.g. Thai, Burgers)
        #[arg(long)]
        category: Option<String>,

        /// Fetch the category a second time if the first request fails
        #[arg(long, requires = "category")]
        retry: bool,
    },
    /// Show the menu of one restaurant
    Menu {
        restaurant_id: String,

        /// Only items in this menu category
        #[arg(long)]
        category: Option<String>,
    },
    /// Search menu items
    Search { term: String },
    /// Request an OTP, optionally verifying it
    Login {
        phone: String,

        /// Code received by SMS
        #[arg(long)]
        otp: Option<String>,
    },
    /// Create a customer account
    Signup {
        #[arg(long)]
        name: String,

        /// Date of birth
        #[arg(long)]
        dob: String,

        #[arg(long)]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,
    },
    /// Open the detail view of the N-th listing in the feed (0-based)
    Detail {
        index: usize,

        #[arg(long, default_value = "nearest")]
        filter: FeedFilter,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let mut config = munch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("munch: run with --help to list commands");
        return Ok(());
    };

    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    let client = FeedClient::from_config(&config)?;

    match command {
        Commands::Feed {
            filter,
            category,
            retry,
        } => {
            feed::run_feed(client, filter, category.as_deref(), retry).await;
        }
        Commands::Menu {
            restaurant_id,
            category,
        } => menu::run_menu(&client, &restaurant_id, category.as_deref()).await?,
        Commands::Search { term } => menu::run_search(&client, &term).await,
        Commands::Login { phone, otp } => {
            account::run_login(&client, &phone, otp.as_deref()).await?;
        }
        Commands::Signup {
            name,
            dob,
            phone,
            email,
        } => {
            let sign_up = munch_feed::SignUp {
                name,
                dob,
                email,
                phone,
            };
            account::run_signup(&client, &sign_up).await?;
        }
        Commands::Detail { index, filter } => feed::run_detail(client, index, filter).await?,
    }

    Ok(())
}
