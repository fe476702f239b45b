//! One-shot search/show/next/previous commands

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::info;
use std::sync::Arc;

use swapi_browser::api::StarWarsSource;
use swapi_browser::characters::{
    CatalogIndex, Character, CharacterId, DetailAggregator, Direction, NavigationOutcome, Navigator,
    ResolveOutcome, Resolver,
};
use swapi_browser::config::Config;

use super::build_source;
use super::output::{print_character, print_details, print_error};

#[derive(Args)]
pub struct SearchArgs {
    /// Character name (partial, case-insensitive)
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
    /// Also resolve films, vehicles and starships
    #[arg(short, long)]
    pub details: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Numeric character ID
    pub id: u32,
    /// Also resolve films, vehicles and starships
    #[arg(short, long)]
    pub details: bool,
}

#[derive(Args)]
pub struct WalkArgs {
    /// Numeric ID to start walking from
    pub id: u32,
    /// Also resolve films, vehicles and starships
    #[arg(short, long)]
    pub details: bool,
}

pub async fn handle_search_command(config: &Config, args: SearchArgs) -> Result<()> {
    let query = args.name.join(" ");
    let source = build_source(config)?;
    let catalog = Arc::new(CatalogIndex::load(source.as_ref()).await);
    let resolver = Resolver::new(source.clone(), catalog);

    info!("Searching for '{}'", query);
    println!("🔍 Searching for {}", query.cyan());

    match resolver.resolve(&query).await {
        None => {
            print_error("Enter the name of a Star Wars character to search.");
            Ok(())
        }
        Some(ResolveOutcome::Found(character)) => show(source, &character, args.details).await,
        Some(ResolveOutcome::NotFound) => {
            print_error(swapi_browser::characters::NOT_FOUND_MESSAGE);
            Ok(())
        }
        Some(ResolveOutcome::SearchFailed { message }) => anyhow::bail!(message),
    }
}

pub async fn handle_show_command(config: &Config, args: ShowArgs) -> Result<()> {
    let source = build_source(config)?;
    let catalog = CatalogIndex::load(source.as_ref()).await;

    let record = source
        .person(args.id)
        .await
        .with_context(|| format!("Failed to fetch character {}", args.id))?;
    let portrait = catalog.portrait_for(&record.name).map(str::to_string);
    let character = Character::from_record(record, portrait)?;

    show(source, &character, args.details).await
}

pub async fn handle_walk_command(config: &Config, args: WalkArgs, direction: Direction) -> Result<()> {
    let source = build_source(config)?;
    let catalog = Arc::new(CatalogIndex::load(source.as_ref()).await);
    let bounds = config.navigation.bounds();
    let navigator = Navigator::new(source.clone(), catalog, bounds);

    match navigator.walk(CharacterId::new(args.id), direction).await {
        NavigationOutcome::Moved(character) => show(source, &character, args.details).await,
        NavigationOutcome::BoundaryReached => {
            println!(
                "{}",
                format!("No {} character within IDs {}..={}", direction_label(direction), bounds.min, bounds.max)
                    .dimmed()
            );
            Ok(())
        }
        NavigationOutcome::Aborted { reason } => anyhow::bail!("Navigation aborted: {}", reason),
    }
}

async fn show(source: Arc<dyn StarWarsSource>, character: &Character, with_details: bool) -> Result<()> {
    println!();
    print_character(character);

    if with_details {
        let details = DetailAggregator::new(source).aggregate(character).await;
        print_details(&details);
    }
    Ok(())
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Next => "next",
        Direction::Previous => "previous",
    }
}
