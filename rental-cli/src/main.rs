//! Movie Rental CLI
//!
//! Command-line interface for the Movie Rental API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use rental_client::MovieRentalClient;
use rental_types::{CreateCustomerRequest, CreateMovieRequest, CreateRentalRequest, MovieId};

#[derive(Parser)]
#[command(name = "movie-rental")]
#[command(author, version, about = "Movie Rental API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Movie Rental API
    #[arg(
        long,
        env = "MOVIE_RENTAL_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Customer operations
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// Movie operations
    Movie {
        #[command(subcommand)]
        action: MovieCommands,
    },
    /// Rental operations
    Rental {
        #[command(subcommand)]
        action: RentalCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum CustomerCommands {
    /// Store a new customer
    Create {
        /// Customer name
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List all customers
    List,
}

#[derive(Subcommand)]
enum MovieCommands {
    /// Store a new movie
    Create {
        /// Movie title
        title: String,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// List all movies
    List,
}

#[derive(Subcommand)]
enum RentalCommands {
    /// Pay for and record a rental
    Create {
        /// Name of the renting customer
        #[arg(long)]
        customer: String,
        /// Payment method (MbWay, PayPal)
        #[arg(long)]
        method: String,
        /// Number of days
        #[arg(long, allow_negative_numbers = true)]
        days: i32,
        /// Rented movie ID
        #[arg(long)]
        movie: Option<i64>,
    },
    /// List rentals of a customer
    List {
        /// Customer name, matched exactly
        customer: String,
    },
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = MovieRentalClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Customer { action } => match action {
            CustomerCommands::Create { name, email, phone } => {
                let customer = client
                    .create_customer(&CreateCustomerRequest { name, email, phone })
                    .await?;
                print_json(&customer)?;
            }
            CustomerCommands::List => print_json(&client.list_customers().await?)?,
        },

        Commands::Movie { action } => match action {
            MovieCommands::Create { title, genre, year } => {
                let movie = client
                    .create_movie(&CreateMovieRequest {
                        title,
                        genre,
                        release_year: year,
                    })
                    .await?;
                print_json(&movie)?;
            }
            MovieCommands::List => print_json(&client.list_movies().await?)?,
        },

        Commands::Rental { action } => match action {
            RentalCommands::Create {
                customer,
                method,
                days,
                movie,
            } => {
                let rental = client
                    .rent_movie(&CreateRentalRequest {
                        customer_name: customer,
                        movie_id: movie.map(MovieId::new),
                        payment_method: method,
                        days_rented: days,
                    })
                    .await?;
                print_json(&rental)?;
            }
            RentalCommands::List { customer } => {
                print_json(&client.rentals_for_customer(&customer).await?)?
            }
        },
    }

    Ok(())
}
