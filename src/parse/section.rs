use std::collections::HashMap;

/// Row texts that open a section on the menu pages. Matched exactly.
pub const KNOWN_HEADERS: &[&str] = &[
    "Today's Soup",
    "Salad Bar",
    "Entrees",
    "Veg,Vegan",
    "Starch And Potatoes",
    "Vegetables",
    "Plant protein",
    "Desserts",
    "Brown Rice station",
    "Bistro Bowl",
    "Fresh Fruit",
    "Whole Grain Pasta Bar",
    "Brain Break",
    "Delish",
    "Chili Bar",
    "Sand/ Deli",
    "Halal",
    "Sides",
    "From the Grill",
    "Brunch",
];

/// Position of the first row equal to each header, `None` when it never
/// appears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex<'a>(HashMap<&'a str, Option<usize>>);

impl<'a> HeaderIndex<'a> {
    pub fn build(rows: &[String], headers: &[&'a str]) -> Self {
        headers
            .iter()
            .map(|&header| (header, rows.iter().position(|row| row == header)))
            .collect()
    }

    #[must_use]
    pub fn get(&self, header: &str) -> Option<usize> {
        self.0.get(header).copied().flatten()
    }

    fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.values().filter_map(|&i| i)
    }
}

impl<'a> FromIterator<(&'a str, Option<usize>)> for HeaderIndex<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, Option<usize>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Rows after `header` up to, not including, the nearest header that follows
/// it. Runs to the end of `rows` when no other header follows, and is empty
/// when `header` was not found.
pub fn extract_section(header: &str, rows: &[String], index: &HeaderIndex) -> Vec<String> {
    let Some(start) = index.get(header) else {
        return Vec::new();
    };
    let end = index
        .positions()
        .filter(|&i| i > start)
        .min()
        .unwrap_or(rows.len())
        .min(rows.len());
    rows.get(start + 1..end)
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}
