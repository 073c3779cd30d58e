//! CSS selectors for the problem page of Baekjoon Online Judge.
//! They follow the current page structure; when the site changes, extraction yields `None`.

pub fn title() -> &'static str {
    "#problem_title"
}

pub fn time_limit() -> &'static str {
    "#problem-info > tbody > tr > td:nth-child(1)"
}

pub fn memory_limit() -> &'static str {
    "#problem-info > tbody > tr > td:nth-child(2)"
}

/// `ord` is 1-based.
pub fn sample_input(ord: u32) -> String {
    format!("#sample-input-{}", ord)
}

/// `ord` is 1-based.
pub fn sample_output(ord: u32) -> String {
    format!("#sample-output-{}", ord)
}
