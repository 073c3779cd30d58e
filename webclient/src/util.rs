use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::*;

pub fn parse_url(url: impl AsRef<str>) -> Result<Url> {
    match Url::parse(url.as_ref()) {
        Ok(url) => Ok(url),
        Err(e) => Err(Error::InvalidSyntaxUrl {
            url: url.as_ref().to_owned(),
            source: e,
        }),
    }
}

pub fn parse_selector(sel: impl AsRef<str>) -> Result<Selector> {
    let sel = sel.as_ref();
    Selector::parse(sel).map_err(|e| Error::InvalidSelector {
        selector: sel.to_owned(),
        reason: format!("{:?}", e),
    })
}

pub trait DocExt {
    /// First element matching to `sel`, or `None` if nothing matches.
    fn select_first_opt(&self, sel: &str) -> Result<Option<ElementRef>>;
}

impl DocExt for Html {
    fn select_first_opt(&self, sel: &str) -> Result<Option<ElementRef>> {
        let sel = self::parse_selector(sel)?;
        Ok(self.select(&sel).next())
    }
}

pub trait ElementRefExt {
    /// Concatenated descendant text, or `None` if the element has no text at all.
    fn inner_text(&self) -> Option<String>;
}

impl<'a> ElementRefExt for ElementRef<'a> {
    fn inner_text(&self) -> Option<String> {
        let s: String = self.text().collect();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }
}
