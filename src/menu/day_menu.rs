use chrono::{Datelike, NaiveDate, Weekday};
use futures::future::join;
use reqwest::Client;

use crate::{
    config::Config,
    fetch::{fetch_rows, Meal},
    parse::{extract_section, HeaderIndex, KNOWN_HEADERS},
};

pub const ENTREES: &str = "Entrees";
pub const SOUP: &str = "Today's Soup";
/// Appended to Sunday lunch, which is served as brunch.
pub const BRUNCH: &str = "Brunch";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayMenu {
    // json representation: yyyy-MM-dd
    pub date: NaiveDate,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
    pub soup: Vec<String>,
}

impl DayMenu {
    /// Pulls lunch entrees from `lunch_rows`, and dinner entrees and the soup
    /// from `dinner_rows`.
    pub fn from_rows(date: NaiveDate, lunch_rows: &[String], dinner_rows: &[String]) -> Self {
        let lunch_index = HeaderIndex::build(lunch_rows, KNOWN_HEADERS);
        let mut lunch = extract_section(ENTREES, lunch_rows, &lunch_index);
        if date.weekday() == Weekday::Sun && !lunch.is_empty() {
            lunch.push(BRUNCH.to_string());
        }

        let dinner_index = HeaderIndex::build(dinner_rows, KNOWN_HEADERS);
        let dinner = extract_section(ENTREES, dinner_rows, &dinner_index);
        let soup = extract_section(SOUP, dinner_rows, &dinner_index);

        Self {
            date,
            lunch,
            dinner,
            soup,
        }
    }

    pub async fn fetch(client: &Client, config: &Config, date: NaiveDate) -> Self {
        let (lunch_rows, dinner_rows) = join(
            fetch_rows(client, config, date, Meal::Lunch, &config.menu_type),
            fetch_rows(client, config, date, Meal::Dinner, &config.menu_type),
        )
        .await;
        Self::from_rows(date, &lunch_rows, &dinner_rows)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lunch.is_empty() && self.dinner.is_empty() && self.soup.is_empty()
    }
}
