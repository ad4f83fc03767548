use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use douban_scraping::api::scrape;
use douban_scraping::book::Book;
use douban_scraping::credentials::{Credentials, DEFAULT_CREDENTIALS_PATH};
use douban_scraping::movie::Movie;
use douban_scraping::output::write_pretty_json;
use douban_scraping::subject_trait::{SubjectTrait, UserId};

#[derive(Parser)]
struct Opts {
    #[arg(value_enum)]
    kind: Kind,
    user_id: UserId,
    #[arg(long)]
    credentials_path: Option<PathBuf>,
}
#[derive(Clone, ValueEnum)]
enum Kind {
    Book,
    Movie,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.kind {
        Kind::Book => run::<Book>(&opts).await,
        Kind::Movie => run::<Movie>(&opts).await,
    }
}

async fn run<T: SubjectTrait>(opts: &Opts) -> anyhow::Result<()> {
    let credentials = Credentials::load(
        opts.credentials_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CREDENTIALS_PATH)),
    )?;
    let records = scrape::<T>(&credentials, &opts.user_id).await?;
    write_pretty_json(std::io::stdout().lock(), &records)?;
    Ok(())
}
