use anyhow::{Context, Result};
use clap::Args;

use swapi_browser::characters::PageFetcher;
use swapi_browser::config::Config;

use super::build_source;
use super::output::print_page;

#[derive(Args)]
pub struct ListArgs {
    /// Cursor URL returned as "Next:"/"Previous:" by an earlier listing
    #[arg(long, value_name = "URL")]
    pub page: Option<String>,
}

pub async fn handle_list_command(config: &Config, args: ListArgs) -> Result<()> {
    let fetcher = PageFetcher::new(build_source(config)?);
    let page = fetcher
        .fetch(args.page.as_deref())
        .await
        .context("Failed to fetch character listing")?;

    print_page(&page);
    Ok(())
}
