mod archive;
mod day_menu;

use chrono::NaiveDate;
use futures::future::join_all;
use reqwest::Client;

use crate::{config::Config, fetch::date_iter};

pub use archive::archive;
pub use day_menu::DayMenu;

/// Menus for `config.days` consecutive days from `start`, in date order.
///
/// Every day (and both meals of each day) is requested at once.
pub async fn week(client: &Client, config: &Config, start: NaiveDate) -> Vec<DayMenu> {
    let menus = join_all(
        date_iter(start, config.days).map(|date| DayMenu::fetch(client, config, date)),
    )
    .await;
    let empty = menus.iter().filter(|m| m.is_empty()).count();
    if empty > 0 {
        log::info!("{empty} of {} days from {start} have no menu", menus.len());
    }
    menus
}

#[cfg(test)]
mod tests {
    use super::{day_menu::BRUNCH, *};
    use crate::fetch::{
        make_client,
        tests::{config_for, spawn_upstream},
    };

    #[tokio::test]
    async fn test_week() {
        let addr = spawn_upstream().await;
        let config = config_for(addr);
        let client = make_client();
        // a Wednesday, so the window covers a Sunday
        let start = NaiveDate::from_ymd_opt(2023, 10, 25).unwrap();
        let menus = week(&client, &config, start).await;
        assert_eq!(menus.len(), 7);
        let dates: Vec<_> = menus.iter().map(|m| m.date).collect();
        assert_eq!(dates, date_iter(start, 7).collect::<Vec<_>>());
        for menu in &menus {
            let sunday = NaiveDate::from_ymd_opt(2023, 10, 29).unwrap();
            let expected: &[&str] = if menu.date == sunday {
                &["Cajun Catfish", "Baked Ziti", BRUNCH]
            } else {
                &["Cajun Catfish", "Baked Ziti"]
            };
            assert_eq!(menu.lunch, expected, "{}", menu.date);
            assert_eq!(menu.dinner, ["Roast Turkey", "Shrimp Scampi"], "{}", menu.date);
            assert_eq!(menu.soup, ["New England Clam Chowder"], "{}", menu.date);
        }
    }

    #[tokio::test]
    async fn test_week_respects_days() {
        let addr = spawn_upstream().await;
        let config = Config {
            days: 2,
            ..config_for(addr)
        };
        let start = NaiveDate::from_ymd_opt(2023, 10, 25).unwrap();
        let menus = week(&make_client(), &config, start).await;
        assert_eq!(menus.len(), 2);
    }
}
