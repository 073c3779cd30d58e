use chrono::{DateTime, Local};

use crate::problem::Problem;

#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn push_section(lines: &mut Vec<String>, indent: &str, heading: String, body: Option<&str>) {
    lines.push(format!("{}{}", indent, heading));
    let Some(body) = body else {
        return
    };
    for line in body.lines() {
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{}{}{}", indent, indent, line));
        }
    }
}

/// Render the comment block placed at the top of a new source file.
/// There is no separator after the closing delimiter.
///
/// Delimiters inside the title or samples are not escaped.
pub fn render(problem: &Problem, created_at: DateTime<Local>) -> String {
    let lang = problem.lang.descriptor();
    let indent = lang.indent;

    let mut lines = Vec::with_capacity(6 + problem.samples.len() * 4);
    lines.push(lang.comment_open.to_owned());
    lines.push(format!("{}File: {}", indent, problem.filename()));
    lines.push(format!("{}Title: {}", indent, problem.title_or_unknown()));
    lines.push(format!("{}URL: {}", indent, problem.url));

    for sample in &problem.samples {
        push_section(
            &mut lines,
            indent,
            format!("Input #{}:", sample.ord),
            sample.input.as_deref(),
        );
        push_section(
            &mut lines,
            indent,
            format!("Output #{}:", sample.ord),
            sample.output.as_deref(),
        );
    }

    lines.push(format!(
        "{}Created At: {}",
        indent,
        created_at.format(CREATED_AT_FORMAT)
    ));
    lines.push(lang.comment_close.to_owned());

    lines.join(LINE_SEP)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lang::Lang;
    use boj_webclient::{ProblemId, Sample, Url};
    use chrono::TimeZone as _;

    fn created_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 5, 1, 9, 30, 0).unwrap()
    }

    fn problem(lang: Lang, samples: Vec<Sample>) -> Problem {
        Problem {
            id: ProblemId(1000),
            lang,
            title: Some("A+B".to_owned()),
            url: Url::parse("https://www.acmicpc.net/problem/1000").unwrap(),
            time_limit: Some("2 초".to_owned()),
            memory_limit: Some("128 MB".to_owned()),
            samples,
        }
    }

    fn sample(ord: u32, input: Option<&str>, output: Option<&str>) -> Sample {
        Sample {
            ord,
            input: input.map(ToOwned::to_owned),
            output: output.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn render_python() {
        let p = problem(Lang::Python, vec![sample(1, Some("1 2"), Some("3"))]);
        let expected = [
            "\"\"\"",
            "    File: 1000.py",
            "    Title: A+B",
            "    URL: https://www.acmicpc.net/problem/1000",
            "    Input #1:",
            "        1 2",
            "    Output #1:",
            "        3",
            "    Created At: 2023-05-01 09:30:00",
            "\"\"\"",
        ]
        .join(LINE_SEP);
        assert_eq!(render(&p, created_at()), expected);
    }

    #[test]
    fn render_cpp_with_multiline_samples() {
        let p = problem(
            Lang::Cpp,
            vec![
                sample(1, Some("2\n  1 2\n\n3 4"), Some("3\n7")),
                sample(2, Some("0"), Some("0")),
            ],
        );
        let expected = [
            "/*",
            "\tFile: 1000.cpp",
            "\tTitle: A+B",
            "\tURL: https://www.acmicpc.net/problem/1000",
            "\tInput #1:",
            "\t\t2",
            "\t\t  1 2",
            "",
            "\t\t3 4",
            "\tOutput #1:",
            "\t\t3",
            "\t\t7",
            "\tInput #2:",
            "\t\t0",
            "\tOutput #2:",
            "\t\t0",
            "\tCreated At: 2023-05-01 09:30:00",
            "*/",
        ]
        .join(LINE_SEP);
        assert_eq!(render(&p, created_at()), expected);
    }

    #[test]
    fn render_missing_values() {
        let mut p = problem(Lang::C, vec![sample(1, None, None)]);
        p.title = None;
        let expected = [
            "/*",
            "\tFile: 1000.c",
            "\tTitle: Unknown",
            "\tURL: https://www.acmicpc.net/problem/1000",
            "\tInput #1:",
            "\tOutput #1:",
            "\tCreated At: 2023-05-01 09:30:00",
            "*/",
        ]
        .join(LINE_SEP);
        assert_eq!(render(&p, created_at()), expected);
    }

    #[test]
    fn render_without_samples() {
        let p = problem(Lang::Python, vec![]);
        let header = render(&p, created_at());
        let url_then_timestamp = format!(
            "URL: https://www.acmicpc.net/problem/1000{}    Created At:",
            LINE_SEP
        );
        assert!(header.contains(&url_then_timestamp));
        assert!(!header.ends_with(LINE_SEP));
    }
}
