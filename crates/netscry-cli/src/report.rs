//! HTML report export.
//!
//! Renders the result tree into a standalone styled document. Status
//! values map to CSS classes here; the core data stays markup-free.

use chrono::Local;
use netscry_core::{SiteResult, TargetResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Write the full result tree to `path` as a standalone HTML document.
pub fn write_html(results: &[TargetResult], path: &Path) -> std::io::Result<()> {
    fs::write(path, render_document(results))
}

fn render_document(results: &[TargetResult]) -> String {
    let mut body = String::new();

    for target in results {
        let _ = writeln!(body, "    <h1>Results for {}</h1>", escape(&target.target));

        for category in &target.categories {
            let _ = writeln!(body, "    <h2>{}</h2>", escape(&category.name));

            for site in &category.sites {
                let _ = writeln!(body, "    {}", render_site(site));
            }
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>netscry results</title>
    <style>
        body {{ font-family: sans-serif; margin: 20px; background-color: #1a1a1a; color: #f0f0f0; }}
        h1 {{ color: #00bcd4; border-bottom: 2px solid #00bcd4; padding-bottom: 10px; margin-top: 30px; }}
        h2 {{ color: #9c27b0; margin-top: 20px; }}
        p {{ margin: 5px 0; }}
        .found {{ color: #4caf50; }}
        .possible {{ color: #ff9800; }}
        .not_found {{ color: #f44336; }}
        .skipped {{ color: #9e9e9e; }}
        .timeout, .error {{ color: #f44336; font-weight: bold; }}
        a {{ color: #00bcd4; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        footer {{ margin-top: 30px; color: #9e9e9e; }}
    </style>
</head>
<body>
{body}    <footer>Generated by netscry on {timestamp}</footer>
</body>
</html>
"#,
        body = body,
        timestamp = Local::now().format("%Y-%m-%d %H:%M:%S"),
    )
}

fn render_site(site: &SiteResult) -> String {
    let class = site.status.as_str();
    let name = escape(&site.name);
    let message = escape(&site.message);

    match &site.url {
        Some(url) => {
            let url = escape(url);
            format!(
                r#"<p class="{class}">{name}: {message} <a href="{url}" target="_blank">{url}</a></p>"#
            )
        }
        None => format!(r#"<p class="{class}">{name}: {message}</p>"#),
    }
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use netscry_core::{CategoryResult, ProbeStatus};
    use tempfile::TempDir;

    fn sample_results() -> Vec<TargetResult> {
        vec![TargetResult {
            target: "alice".to_string(),
            categories: vec![CategoryResult {
                name: "Social".to_string(),
                sites: vec![
                    SiteResult {
                        name: "alpha".to_string(),
                        url: Some("https://alpha.test/u/alice".to_string()),
                        status: ProbeStatus::Found,
                        response_code: Some(200),
                        message: "Account found.".to_string(),
                        matched_check_texts: Vec::new(),
                        matched_not_found_texts: Vec::new(),
                    },
                    SiteResult::skipped("beta", None),
                ],
            }],
        }]
    }

    #[test]
    fn test_document_structure() {
        let html = render_document(&sample_results());
        assert!(html.contains("<h1>Results for alice</h1>"));
        assert!(html.contains("<h2>Social</h2>"));
        assert!(html.contains(r#"class="found""#));
        assert!(html.contains(r#"class="skipped""#));
        assert!(html.contains(r#"<a href="https://alpha.test/u/alice""#));
    }

    #[test]
    fn test_escaping() {
        let mut results = sample_results();
        results[0].target = "<script>".to_string();
        let html = render_document(&results);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_write_html() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("results.html");

        write_html(&sample_results(), &path).expect("write report");

        let contents = fs::read_to_string(&path).expect("read report");
        assert!(contents.starts_with("<!DOCTYPE html>"));
        assert!(contents.contains("alice"));
    }
}
