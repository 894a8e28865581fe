use chrono::{Datelike, Local};

use crate::config::selectors;
use crate::dom::Page;
use crate::error::Result;

pub fn fill_current_year(page: &Page) -> Result<()> {
    let span = page.by_id(selectors::CURRENT_YEAR)?;
    span.set_text_content(Some(&Local::now().year().to_string()));
    Ok(())
}
