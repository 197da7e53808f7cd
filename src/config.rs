use std::{env, net::SocketAddr, str::FromStr};

use chrono::Weekday;

use crate::{error::Error, fetch::Meal, store::StoreKind};

pub const DEFAULT_MENU_URL: &str = "https://www.foodpro.huds.harvard.edu/foodpro/menu_items.asp";
/// Full menu view. `05` is the smaller view with only entrees.
pub const DEFAULT_MENU_TYPE: &str = "14";
pub const DEFAULT_ARCHIVE_MENU_TYPE: &str = "05";
pub const DEFAULT_CACHE_CONTROL: &str = "s-maxage=64800, stale-while-revalidate";
pub const DEFAULT_FIRESTORE_PROJECT: &str = "huds-menu";
/// Upper bound on `DAYS`; every day costs two upstream requests per call.
pub const MAX_DAYS: i64 = 31;

/// Meal codes sent as the `meal` query parameter.
///
/// Sunday gets its own pair because the upstream site has numbered Sunday
/// brunch both `0` and `1` at different times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealCodes {
    pub lunch: u8,
    pub dinner: u8,
    pub sunday_lunch: u8,
    pub sunday_dinner: u8,
}

impl Default for MealCodes {
    fn default() -> Self {
        Self {
            lunch: 1,
            dinner: 2,
            sunday_lunch: 1,
            sunday_dinner: 2,
        }
    }
}

impl MealCodes {
    #[must_use]
    pub const fn code(&self, weekday: Weekday, meal: Meal) -> u8 {
        match (weekday, meal) {
            (Weekday::Sun, Meal::Lunch) => self.sunday_lunch,
            (Weekday::Sun, Meal::Dinner) => self.sunday_dinner,
            (_, Meal::Lunch) => self.lunch,
            (_, Meal::Dinner) => self.dinner,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub store: StoreKind,
    pub menu_url: url::Url,
    pub menu_type: String,
    pub archive_menu_type: String,
    pub meal_codes: MealCodes,
    pub days: i64,
    pub cache_control: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            store: StoreKind::Memory,
            menu_url: url::Url::parse(DEFAULT_MENU_URL)
                .expect("default menu url should be valid"),
            menu_type: DEFAULT_MENU_TYPE.to_string(),
            archive_menu_type: DEFAULT_ARCHIVE_MENU_TYPE.to_string(),
            meal_codes: MealCodes::default(),
            days: 7,
            cache_control: DEFAULT_CACHE_CONTROL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let addr = SocketAddr::from_str(&format!("{host}:{port}"))
            .map_err(|e| Error::Config(format!("invalid listen address {host}:{port}: {e}")))?;

        let store = match lookup("STORE") {
            Some(s) => StoreKind::from_str(&s)?,
            None => {
                log::warn!("env var STORE not set, using ad-hoc memory store.");
                StoreKind::Memory
            }
        };
        let store = match store {
            StoreKind::Cloud(_) => StoreKind::Cloud(
                lookup("FIRESTORE_PROJECT")
                    .unwrap_or_else(|| DEFAULT_FIRESTORE_PROJECT.to_string()),
            ),
            other => other,
        };

        let menu_url = match lookup("MENU_URL") {
            Some(s) => url::Url::parse(&s)
                .map_err(|e| Error::Config(format!("invalid MENU_URL {s}: {e}")))?,
            None => defaults.menu_url,
        };

        let meal_codes = MealCodes {
            lunch: parsed(&lookup, "MEAL_CODE_LUNCH")?.unwrap_or(defaults.meal_codes.lunch),
            dinner: parsed(&lookup, "MEAL_CODE_DINNER")?.unwrap_or(defaults.meal_codes.dinner),
            sunday_lunch: parsed(&lookup, "MEAL_CODE_SUNDAY_LUNCH")?
                .unwrap_or(defaults.meal_codes.sunday_lunch),
            sunday_dinner: parsed(&lookup, "MEAL_CODE_SUNDAY_DINNER")?
                .unwrap_or(defaults.meal_codes.sunday_dinner),
        };

        let days = parsed(&lookup, "DAYS")?.unwrap_or(defaults.days);
        if !(1..=MAX_DAYS).contains(&days) {
            return Err(Error::Config(format!(
                "DAYS must be between 1 and {MAX_DAYS}, got {days}"
            )));
        }

        Ok(Self {
            addr,
            store,
            menu_url,
            menu_type: lookup("MENU_TYPE").unwrap_or(defaults.menu_type),
            archive_menu_type: lookup("ARCHIVE_MENU_TYPE")
                .unwrap_or(defaults.archive_menu_type),
            meal_codes,
            days,
            cache_control: lookup("CACHE_CONTROL").unwrap_or(defaults.cache_control),
        })
    }
}

fn parsed<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
) -> crate::Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|s| {
            s.trim()
                .parse()
                .map_err(|e| Error::Config(format!("invalid {key} {s:?}: {e}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.menu_url.as_str(), DEFAULT_MENU_URL);
        assert_eq!(config.menu_type, "14");
        assert_eq!(config.archive_menu_type, "05");
        assert_eq!(config.meal_codes, MealCodes::default());
        assert_eq!(config.days, 7);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_in(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("STORE", ":firestore:"),
            ("FIRESTORE_PROJECT", "my-project"),
            ("MEAL_CODE_SUNDAY_LUNCH", "0"),
            ("DAYS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.store, StoreKind::Cloud("my-project".to_string()));
        assert_eq!(config.meal_codes.sunday_lunch, 0);
        assert_eq!(config.meal_codes.lunch, 1);
        assert_eq!(config.days, 3);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_lookup(lookup_in(&[("MEAL_CODE_DINNER", "dinner")])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_in(&[("DAYS", "0")])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_in(&[("DAYS", "32")])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_in(&[("DAYS", "200000000")])),
            Err(Error::Config(_))
        ));
        assert!(Config::from_lookup(lookup_in(&[("DAYS", "31")])).is_ok());
        assert!(matches!(
            Config::from_lookup(lookup_in(&[("PORT", "not a port")])),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_meal_codes() {
        let codes = MealCodes {
            sunday_lunch: 0,
            ..MealCodes::default()
        };
        assert_eq!(codes.code(Weekday::Sun, Meal::Lunch), 0);
        assert_eq!(codes.code(Weekday::Sun, Meal::Dinner), 2);
        assert_eq!(codes.code(Weekday::Mon, Meal::Lunch), 1);
        assert_eq!(codes.code(Weekday::Sat, Meal::Dinner), 2);
    }
}
