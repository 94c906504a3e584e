use artist::output::render;
use artist::process::get_results;
use clap::{Args, Parser, Subcommand};
use config::FetchConfig;
use error::{Error, Result};
use log::info;
use person::fetch::http::HttpFetcher;
use person::fetch::{get_homeworld, get_species, populate};
use person::sort::{sort_people, Order, SortField};
use person::stats::person_averages;
use person::{find_person, select_species, snapshot, Person};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

extern crate log;
extern crate pretty_env_logger;

mod artist;
mod config;
mod error;
mod person;

#[derive(Parser)]
#[command(
    name = "datasift",
    version,
    about = "Groups museum artworks by artist and digests Star Wars people"
)]
struct Cli {
    #[command(flatten)]
    fetch: FetchArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct FetchArgs {
    /// Root of the Star Wars API
    #[arg(long, global = true, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Seconds before a single request is abandoned
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    /// Most pages followed for one collection
    #[arg(long, global = true, default_value_t = 100)]
    max_pages: usize,

    /// Seconds to wait before retrying a rate limited request
    #[arg(long, global = true, default_value_t = 30)]
    retry_delay_secs: u64,
}

impl FetchArgs {
    fn config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            max_pages: self.max_pages,
            retry_delay: Duration::from_secs(self.retry_delay_secs),
            ..FetchConfig::default()
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Group artworks from the museum's CSV export by artist
    Artists {
        #[arg(long, default_value = config::DEFAULT_SOURCE)]
        source: PathBuf,
        #[arg(long, default_value_t = config::DEFAULT_START, allow_negative_numbers = true)]
        start: i64,
        #[arg(long, default_value_t = config::DEFAULT_END, allow_negative_numbers = true)]
        end: i64,
        /// `json` prints the artists as a JSON array, anything else dumps them
        #[arg(long, default_value = "json")]
        display_as: String,
    },
    /// List every species, marking the selected one
    Species {
        #[arg(long, default_value = config::DEFAULT_SPECIES)]
        species: String,
    },
    /// Fetch everyone of a species, save the snapshot and print the table
    People {
        #[arg(long, default_value = config::DEFAULT_SPECIES)]
        species: String,
        /// Skip the species listing and use this species resource directly
        #[arg(long)]
        species_url: Option<String>,
        #[arg(long, default_value = config::DEFAULT_SNAPSHOT)]
        snapshot: PathBuf,
    },
    /// Re-sort the saved snapshot without fetching anything
    Sort {
        /// name, height, mass, hair_color or sort_by
        #[arg(long, default_value = "sort_by")]
        by: SortField,
        #[arg(long)]
        desc: bool,
        #[arg(long, default_value = config::DEFAULT_SNAPSHOT)]
        snapshot: PathBuf,
    },
    /// Show the homeworld of someone in the snapshot
    Homeworld {
        name: String,
        #[arg(long, default_value = config::DEFAULT_SNAPSHOT)]
        snapshot: PathBuf,
    },
}

fn print_people(people: &[Person]) {
    println!("Name | Height | Mass | Hair color");
    for person in people {
        println!("{}", person.row());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.fetch.config();
    let base_url = cli.fetch.base_url;

    match cli.command {
        Command::Artists {
            source,
            start,
            end,
            display_as,
        } => {
            let grouping = get_results(&source, start, end);
            println!("{}", render(grouping.artists, &display_as)?);
        }
        Command::Species { species } => {
            let fetcher = HttpFetcher::new(&config)?;
            let all = get_species(&fetcher, &base_url, config.max_pages).await?;

            for item in all.iter() {
                println!("{}", item.listing(&species));
            }
        }
        Command::People {
            species,
            species_url,
            snapshot,
        } => {
            let fetcher = HttpFetcher::new(&config)?;
            let species_url = match species_url {
                Some(url) => url,
                None => {
                    let all = get_species(&fetcher, &base_url, config.max_pages).await?;
                    select_species(&all, &species)
                        .map(|selected| selected.url.to_string())
                        .ok_or_else(|| Error::NotFound(format!("species {}", species)))?
                }
            };

            let people = populate(&fetcher, &species_url).await?;
            snapshot::save(&snapshot, &people)?;
            info!("Saved snapshot to {}", snapshot.display());

            print_people(&people);
            for line in person_averages(&people).lines() {
                println!("{}", line);
            }
        }
        Command::Sort { by, desc, snapshot } => {
            let mut people = snapshot::load(&snapshot)?;
            let order = if desc { Order::Desc } else { Order::Asc };

            sort_people(&mut people, by, order);
            print_people(&people);
        }
        Command::Homeworld { name, snapshot } => {
            let people = snapshot::load(&snapshot)?;
            let person = find_person(&people, &name)
                .ok_or_else(|| Error::NotFound(format!("{} in {}", name, snapshot.display())))?;

            let fetcher = HttpFetcher::new(&config)?;
            let planet = get_homeworld(&fetcher, person).await?;

            for line in planet.details() {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("datasift: {}", err);
        process::exit(1);
    }
}
