use async_trait::async_trait;
use reqwest::StatusCode;
use scraper::Html;

use crate::{error::*, model::*, scrape, util};

pub const DEFAULT_JUDGE_URL: &str = "https://www.acmicpc.net";

pub struct BojClient {
    http: reqwest::Client,
    judge_url: Url,
}

impl BojClient {
    pub fn new() -> Result<Self> {
        let judge_url = util::parse_url(DEFAULT_JUDGE_URL)?;
        Self::with_judge_url(judge_url)
    }

    /// `judge_url` is the origin that serves `/problem/{id}`.
    pub fn with_judge_url(judge_url: Url) -> Result<Self> {
        let http = reqwest::Client::builder().gzip(true).build()?;
        Ok(Self { http, judge_url })
    }

    pub fn judge_url(&self) -> &Url {
        &self.judge_url
    }
}

#[async_trait]
impl Client for BojClient {
    fn problem_url(&self, id: ProblemId) -> Result<Url> {
        let base = self.judge_url.as_str().trim_end_matches('/');
        util::parse_url(format!("{}/problem/{}", base, id))
    }

    async fn fetch_problem_info(&self, id: ProblemId) -> Result<ProblemInfo> {
        let url = self.problem_url(id)?;
        log::debug!("GET {}", url);

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        log::debug!("Response {} from {}", status, url);

        if status == StatusCode::NOT_FOUND {
            return Err(Error::ProblemNotFound {
                problem_id: id,
                requested_url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(Error::UnexpectedResponseCode {
                got: status,
                requested_url: url.to_string(),
            });
        }

        let html = resp.text().await?;
        let doc = Html::parse_document(&html);
        scrape::scrape_problem_info(&doc, id, url)
    }
}
