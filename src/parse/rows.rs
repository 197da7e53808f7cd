use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};

/// Reduces the visible text of one table row to the dish or header name it
/// starts with.
///
/// Tabs and newlines are dropped, then everything from the first ASCII digit
/// or `|` onward (portion sizes, dietary tags) is cut before trimming.
pub fn clean_row(text: &str) -> String {
    static LINE_BREAKS: OnceLock<Regex> = OnceLock::new();
    static CUT: OnceLock<Regex> = OnceLock::new();
    let line_breaks =
        LINE_BREAKS.get_or_init(|| Regex::new(r"[\t\n]").expect("regex should be valid"));
    let cut = CUT.get_or_init(|| Regex::new(r"[0-9|]").expect("regex should be valid"));

    let text = line_breaks.replace_all(text, "");
    let end = cut.find(&text).map_or(text.len(), |m| m.start());
    text[..end].trim().to_string()
}

/// One cleaned row per `tr` in document order, skipping rows left blank.
///
/// Nested rows are returned as well, so an outer layout row shows up as its
/// own (usually meaningless) entry ahead of the rows it contains.
pub fn rows_from_html(html: &str) -> Vec<String> {
    static ROW_SELECTOR: OnceLock<Selector> = OnceLock::new();
    let row_selector =
        ROW_SELECTOR.get_or_init(|| Selector::parse("tr").expect("selector should be valid"));
    let document = Html::parse_document(html);
    document
        .select(row_selector)
        .map(|tr| clean_row(&tr.text().collect::<String>()))
        .filter(|row| !row.is_empty())
        .collect()
}
