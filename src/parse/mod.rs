mod rows;
mod section;

pub use rows::rows_from_html;
pub use section::{extract_section, HeaderIndex, KNOWN_HEADERS};
