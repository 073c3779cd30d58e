use scraper::Html;

use crate::{
    error::*,
    model::{ProblemId, ProblemInfo, Sample, Url},
    sample, selector,
    util::{DocExt as _, ElementRefExt as _},
};

/// Trimmed text of the first element matching to `sel`.
/// Absent element, or element without text, yields `None`.
fn scrape_text_field(doc: &Html, sel: &str) -> Result<Option<String>> {
    let text = doc
        .select_first_opt(sel)?
        .and_then(|el| el.inner_text())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty());
    Ok(text)
}

/// Collect samples from #1 until neither the input nor the output element exists.
/// An element which exists but has no text does not stop the iteration.
pub fn scrape_samples(doc: &Html) -> Result<Vec<Sample>> {
    let mut samples = Vec::with_capacity(4);
    for ord in 1.. {
        let input_el = doc.select_first_opt(&selector::sample_input(ord))?;
        let output_el = doc.select_first_opt(&selector::sample_output(ord))?;
        if input_el.is_none() && output_el.is_none() {
            break;
        }
        samples.push(sample::parse_sample(ord, input_el, output_el));
    }
    Ok(samples)
}

pub fn scrape_problem_info(doc: &Html, id: ProblemId, url: Url) -> Result<ProblemInfo> {
    let title = scrape_text_field(doc, selector::title())?;
    let time_limit = scrape_text_field(doc, selector::time_limit())?;
    let memory_limit = scrape_text_field(doc, selector::memory_limit())?;
    let samples = self::scrape_samples(doc)?;

    log::debug!(
        "Scraped problem {}: title={:?}, time_limit={:?}, memory_limit={:?}, {} samples",
        id,
        title,
        time_limit,
        memory_limit,
        samples.len()
    );

    Ok(ProblemInfo {
        id,
        url,
        title,
        time_limit,
        memory_limit,
        samples,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn problem_page(body: &str) -> Html {
        Html::parse_document(&format!(
            "<!DOCTYPE html><html><head><title>BOJ</title></head><body>{}</body></html>",
            body
        ))
    }

    const INFO_TABLE: &str = r#"
<table id="problem-info">
  <thead><tr><th>시간 제한</th><th>메모리 제한</th></tr></thead>
  <tbody><tr><td> 1 sec </td><td>256 MB</td><td>1</td></tr></tbody>
</table>"#;

    fn url() -> Url {
        Url::parse("https://www.acmicpc.net/problem/1000").unwrap()
    }

    #[test]
    fn scrape_full_problem() {
        let doc = problem_page(&format!(
            r#"<span id="problem_title">A+B</span>{}
<pre id="sample-input-1">1 2
</pre>
<pre id="sample-output-1">3
</pre>"#,
            INFO_TABLE
        ));

        let info = scrape_problem_info(&doc, ProblemId(1000), url()).unwrap();
        assert_eq!(
            info,
            ProblemInfo {
                id: ProblemId(1000),
                url: url(),
                title: Some("A+B".to_owned()),
                time_limit: Some("1 sec".to_owned()),
                memory_limit: Some("256 MB".to_owned()),
                samples: vec![Sample {
                    ord: 1,
                    input: Some("1 2".to_owned()),
                    output: Some("3".to_owned()),
                }],
            }
        );
    }

    #[test]
    fn missing_fields_are_none() {
        let doc = problem_page("<p>Under maintenance</p>");
        let info = scrape_problem_info(&doc, ProblemId(1), url()).unwrap();
        assert_eq!(info.title, None);
        assert_eq!(info.time_limit, None);
        assert_eq!(info.memory_limit, None);
        assert!(info.samples.is_empty());

        let doc = problem_page(r#"<span id="problem_title"></span>"#);
        let info = scrape_problem_info(&doc, ProblemId(1), url()).unwrap();
        assert_eq!(info.title, None);
    }

    #[test]
    fn samples_stop_at_first_fully_absent_ord() {
        let doc = problem_page(
            r#"
<pre id="sample-input-1">a</pre><pre id="sample-output-1">A</pre>
<pre id="sample-input-2">b</pre><pre id="sample-output-2">B</pre>
<pre id="sample-input-3">c</pre><pre id="sample-output-3">C</pre>
<pre id="sample-input-5">e</pre><pre id="sample-output-5">E</pre>"#,
        );

        let samples = scrape_samples(&doc).unwrap();
        let ords: Vec<_> = samples.iter().map(|s| s.ord).collect();
        assert_eq!(ords, [1, 2, 3]);
        assert_eq!(samples[2].input.as_deref(), Some("c"));
        assert_eq!(samples[2].output.as_deref(), Some("C"));
    }

    #[test]
    fn empty_output_elem_does_not_stop_iteration() {
        let doc = problem_page(
            r#"
<pre id="sample-input-1">1</pre><pre id="sample-output-1"></pre>
<pre id="sample-input-2">2</pre><pre id="sample-output-2">two</pre>"#,
        );

        let samples = scrape_samples(&doc).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].input.as_deref(), Some("1"));
        assert_eq!(samples[0].output, None);
        assert_eq!(samples[1].output.as_deref(), Some("two"));
    }

    #[test]
    fn one_sided_sample_continues_iteration() {
        let doc = problem_page(
            r#"
<pre id="sample-input-1">1</pre>
<pre id="sample-output-2">out</pre>"#,
        );

        let samples = scrape_samples(&doc).unwrap();
        assert_eq!(
            samples,
            [
                Sample {
                    ord: 1,
                    input: Some("1".to_owned()),
                    output: None,
                },
                Sample {
                    ord: 2,
                    input: None,
                    output: Some("out".to_owned()),
                },
            ]
        );
    }
}
