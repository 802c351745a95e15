//! `eco` - EcoSankalp from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Sign in as a citizen
//! eco login -e jane.doe@example.com
//!
//! # Report a waste site
//! eco report submit -d "Overflowing bin" -a "Block A, Sector 15" -s high
//!
//! # Shop and pay
//! eco cart add p1
//! eco checkout --card-name "Jane Doe" --card-number 4111111111111111 --expiry 12/29 --cvv 123
//!
//! # Follow the order
//! eco orders track TRK123456
//! ```
//!
//! State is kept in `--data-dir` (or `ECOSANKALP_DATA_DIR`). Reports and the
//! training chain are not persisted, so each invocation starts them from the
//! built-in baseline.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ecosankalp_core::{FacilityType, OrderStatus, ProductCategory, Severity, UserRole};

mod commands;

/// Log filter used when `RUST_LOG` is unset. Command output is logged under
/// the binary's own target, `eco`.
const DEFAULT_LOG_FILTER: &str = "ecosankalp_store=info,eco=info";

#[derive(Parser)]
#[command(name = "eco")]
#[command(author, version, about = "EcoSankalp waste management tools")]
struct Cli {
    /// Directory for persisted state (overrides `ECOSANKALP_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,

        /// Role (`citizen`, `worker`, `admin`)
        #[arg(short, long, default_value = "citizen")]
        role: UserRole,
    },
    /// Sign in to the admin console
    AdminLogin {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,

        #[arg(short, long, default_value = "citizen")]
        role: UserRole,
    },
    /// Sign out and empty the cart
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Waste reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },
    /// Training chain and quizzes
    Training,
    /// List marketplace products
    Catalog {
        #[arg(short, long)]
        category: Option<ProductCategory>,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Pay for the cart
    Checkout {
        #[arg(long)]
        card_name: String,

        #[arg(long)]
        card_number: String,

        /// `MM/YY`
        #[arg(long)]
        expiry: String,

        #[arg(long)]
        cvv: String,
    },
    /// Orders and tracking
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Support tickets
    Query {
        #[command(subcommand)]
        action: QueryAction,
    },
    /// Dashboard and platform figures
    Stats,
    /// Waste processing facilities
    Facilities {
        #[arg(short = 't', long = "type")]
        facility_type: Option<FacilityType>,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Report a waste site
    Submit {
        #[arg(short, long)]
        description: String,

        #[arg(short, long)]
        address: String,

        #[arg(long, default_value_t = 0.0)]
        lat: f64,

        #[arg(long, default_value_t = 0.0)]
        lng: f64,

        #[arg(short, long, default_value = "medium")]
        severity: Severity,

        #[arg(short, long, default_value = "/placeholder.svg")]
        image: String,
    },
    /// List reports, newest first
    List {
        /// Only the signed-in user's reports
        #[arg(long)]
        mine: bool,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        product_id: String,

        /// Redeem Green Points for this line
        #[arg(long)]
        green_points: bool,
    },
    /// Set a line's quantity (0 removes it)
    Set {
        product_id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove { product_id: String },
    /// Empty the cart
    Clear,
    /// Show the cart
    Show,
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders, newest first
    List,
    /// Find an order by tracking number
    Track { tracking_number: String },
    /// Move an order to a new status
    Status { order_id: String, status: OrderStatus },
}

#[derive(Subcommand)]
enum QueryAction {
    /// Open a support ticket
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        message: String,
    },
    /// Close a ticket
    Close { query_id: String },
    /// List tickets, newest first
    List,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, config) = commands::open_store(cli.data_dir)?;
    let store = &mut store;

    match cli.command {
        Commands::Login {
            email,
            password,
            role,
        } => commands::session::login(store, &email, password, role)?,
        Commands::AdminLogin { email, password } => {
            commands::session::admin_login(store, &email, password)?;
        }
        Commands::Signup {
            name,
            email,
            password,
            role,
        } => commands::session::signup(store, &name, &email, password, role)?,
        Commands::Logout => commands::session::logout(store),
        Commands::Whoami => commands::session::whoami(store),
        Commands::Report { action } => match action {
            ReportAction::Submit {
                description,
                address,
                lat,
                lng,
                severity,
                image,
            } => commands::reports::submit(
                store,
                commands::reports::SubmitArgs {
                    description,
                    address,
                    lat,
                    lng,
                    severity,
                    image,
                },
            )?,
            ReportAction::List { mine } => commands::reports::list(store, mine)?,
        },
        Commands::Training => commands::training::show(store),
        Commands::Catalog { category } => commands::shop::catalog(store, category),
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                green_points,
            } => commands::shop::add(store, &product_id, green_points)?,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::shop::set_quantity(store, &product_id, quantity),
            CartAction::Remove { product_id } => commands::shop::remove(store, &product_id),
            CartAction::Clear => commands::shop::clear(store),
            CartAction::Show => commands::shop::show(store),
        },
        Commands::Checkout {
            card_name,
            card_number,
            expiry,
            cvv,
        } => {
            let details = commands::shop::payment_details(card_name, card_number, expiry, cvv);
            commands::shop::checkout(store, &config, &details).await?;
        }
        Commands::Orders { action } => match action {
            OrderAction::List => commands::orders::list(store),
            OrderAction::Track { tracking_number } => {
                commands::orders::track(store, &tracking_number)?;
            }
            OrderAction::Status { order_id, status } => {
                commands::orders::set_status(store, &order_id, status)?;
            }
        },
        Commands::Query { action } => match action {
            QueryAction::Add {
                name,
                email,
                subject,
                message,
            } => commands::queries::add(store, name, email, subject, message)?,
            QueryAction::Close { query_id } => commands::queries::close(store, &query_id),
            QueryAction::List => commands::queries::list(store),
        },
        Commands::Stats => commands::info::stats(store),
        Commands::Facilities { facility_type } => commands::info::facilities(store, facility_type),
    }

    if store.is_persistence_degraded() {
        tracing::warn!("State could not be saved; changes from this run are lost");
    }
    Ok(())
}
