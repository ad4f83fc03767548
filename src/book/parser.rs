use anyhow::Context;
use itertools::Itertools;
use log::warn;
use scraper::{ElementRef, Html};

use crate::text::collapsed_text;

use super::schema::BookRecord;

pub fn extract(html: &Html) -> Vec<BookRecord> {
    html.select(selector!(".interest-list > .subject-item"))
        .filter_map(|item| match parse_item(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping a malformed book item: {e:#}");
                None
            }
        })
        .collect()
}

fn parse_item(item: ElementRef) -> anyhow::Result<BookRecord> {
    let link = item
        .select(selector!("h2 > a"))
        .next()
        .context("Title link not found")?
        .value()
        .attr("href")
        .context("Title link has no href")?
        .to_owned();
    let title = collapsed_text(
        item.select(selector!("h2"))
            .next()
            .context("Title heading not found")?,
    );
    let cover = item
        .select(selector!(".pic > .nbg > img"))
        .next()
        .context("Cover image not found")?
        .value()
        .attr("src")
        .context("Cover image has no src")?
        .to_owned();

    let pub_info = item
        .select(selector!(".info > .pub"))
        .next()
        .map(collapsed_text)
        .unwrap_or_default();

    let status_line = collapsed_text(
        item.select(selector!(".short-note .date"))
            .next()
            .context("Status line not found")?,
    );
    let mut status_tokens = status_line.split(' ');
    let updation = status_tokens
        .next()
        .context("Status line is empty")?
        .to_owned();
    let status = status_tokens
        .next()
        .with_context(|| format!("No status word in status line {status_line:?}"))?
        .to_owned();

    // An absent tags block yields a single empty string, as the upstream
    // output always did.
    let labels = item
        .select(selector!(".short-note .tags"))
        .next()
        .map(collapsed_text)
        .unwrap_or_default()
        .replace("标签: ", "")
        .split(' ')
        .map(str::to_owned)
        .collect_vec();

    Ok(BookRecord::builder()
        .link(link)
        .title(title)
        .cover(cover)
        .pub_info(pub_info)
        .updation(updation)
        .status(status)
        .labels(labels)
        .build())
}
