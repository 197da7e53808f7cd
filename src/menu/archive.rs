use chrono::{Duration, NaiveDate};
use futures::future::join;
use reqwest::Client;

use super::day_menu::ENTREES;
use crate::{
    config::Config,
    fetch::{fetch_rows, Meal},
    parse::{extract_section, HeaderIndex, KNOWN_HEADERS},
    store::{MenuEntry, Store},
};

/// How far ahead of today the archive job records entrees.
pub const ARCHIVE_LEAD_DAYS: i64 = 6;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ArchiveReport {
    pub date: NaiveDate,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

fn entrees(rows: &[String]) -> Vec<String> {
    let index = HeaderIndex::build(rows, KNOWN_HEADERS);
    extract_section(ENTREES, rows, &index)
}

/// Records the entrees served `ARCHIVE_LEAD_DAYS` after `today`, one store
/// entry per dish.
///
/// Fetch failures still only empty the affected meal; store failures are
/// returned.
pub async fn archive(
    client: &Client,
    config: &Config,
    store: &Store,
    today: NaiveDate,
) -> crate::Result<ArchiveReport> {
    let date = today + Duration::days(ARCHIVE_LEAD_DAYS);
    let page_type = config.archive_menu_type.as_str();
    let (lunch_rows, dinner_rows) = join(
        fetch_rows(client, config, date, Meal::Lunch, page_type),
        fetch_rows(client, config, date, Meal::Dinner, page_type),
    )
    .await;
    let lunch = entrees(&lunch_rows);
    let dinner = entrees(&dinner_rows);

    let entries: Vec<MenuEntry> = lunch
        .iter()
        .map(|name| MenuEntry::new(name, date, true))
        .chain(dinner.iter().map(|name| MenuEntry::new(name, date, false)))
        .collect();
    store.append(&entries).await?;
    log::info!("Archived {} entrees for {date}", entries.len());

    Ok(ArchiveReport {
        date,
        lunch,
        dinner,
    })
}
