use boj_webclient::{ProblemId, ProblemInfo, Sample, Url};

use crate::lang::Lang;

/// A fetched problem bound to the language of the file to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub id: ProblemId,
    pub lang: Lang,
    pub title: Option<String>,
    pub url: Url,
    pub time_limit: Option<String>,
    pub memory_limit: Option<String>,
    pub samples: Vec<Sample>,
}

impl Problem {
    pub fn new(info: ProblemInfo, lang: Lang) -> Self {
        let ProblemInfo {
            id,
            url,
            title,
            time_limit,
            memory_limit,
            samples,
        } = info;
        Self {
            id,
            lang,
            title,
            url,
            time_limit,
            memory_limit,
            samples,
        }
    }

    /// `{id}.{extension}`
    pub fn filename(&self) -> String {
        format!("{}.{}", self.id, self.lang.extension())
    }

    pub fn title_or_unknown(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN)
    }
}

pub const UNKNOWN: &str = "Unknown";
