use scraper::ElementRef;

use crate::{model::Sample, util::ElementRefExt as _};

/// `None` if the element is absent or has no text.
/// Otherwise trailing whitespace is stripped; leading whitespace is kept as is.
pub fn extract_sample_text(el: Option<ElementRef>) -> Option<String> {
    let raw = el?.inner_text()?;
    Some(raw.trim_end().to_owned())
}

pub fn parse_sample(ord: u32, input_el: Option<ElementRef>, output_el: Option<ElementRef>) -> Sample {
    Sample {
        ord,
        input: self::extract_sample_text(input_el),
        output: self::extract_sample_text(output_el),
    }
}
