use chrono::{Datelike, Days, NaiveDate};
use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

use crate::{config::Config, parse::rows_from_html};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Meal {
    Lunch,
    Dinner,
}

pub fn make_client() -> reqwest::Client {
    Client::builder()
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// `<menu_url>?date=MM-DD-YYYY&type=<page_type>&meal=<code>`
pub fn menu_url(config: &Config, date: NaiveDate, meal: Meal, page_type: &str) -> Url {
    let code = config.meal_codes.code(date.weekday(), meal);
    let mut url = config.menu_url.clone();
    url.query_pairs_mut()
        .append_pair("date", date.format("%m-%d-%Y").to_string().as_str())
        .append_pair("type", page_type)
        .append_pair("meal", code.to_string().as_str());
    url
}

async fn try_fetch_rows(client: &Client, url: Url) -> Result<Vec<String>, RequestError> {
    let start = std::time::Instant::now();
    let res = client.get(url).send().await?.error_for_status()?;
    let text = res.text().await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(rows_from_html(&text))
}

/// Fetches one meal's menu page and flattens it into cleaned rows.
///
/// Never fails: any request error is logged and yields no rows, so callers
/// cannot tell an unreachable page from an empty menu.
#[instrument(skip(client, config, date), fields(
    date = %date.format("%m-%d-%Y"),
), level = Level::TRACE)]
pub async fn fetch_rows(
    client: &Client,
    config: &Config,
    date: NaiveDate,
    meal: Meal,
    page_type: &str,
) -> Vec<String> {
    let url = menu_url(config, date, meal, page_type);
    match try_fetch_rows(client, url.clone()).await {
        Ok(rows) => {
            log::debug!("{} rows from {url}", rows.len());
            rows
        }
        Err(e) => {
            log::error!("There was an error with {url}: {e}");
            Vec::new()
        }
    }
}

/// `count` consecutive dates from `start`, stopping early at the last
/// representable date.
pub fn date_iter(start: NaiveDate, count: i64) -> impl Iterator<Item = NaiveDate> {
    (0..count).map_while(move |x| {
        u64::try_from(x)
            .ok()
            .and_then(|x| start.checked_add_days(Days::new(x)))
    })
}
