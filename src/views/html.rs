//! HTML rendering for the browser page.

use crate::models::{SubmissionState, SELECTED_NUM_FIELD};
use crate::paging::{PageIndex, MAX_PAGE};
use crate::storage::CURRENT_PAGE_KEY;

use super::{DESCRIPTION, TITLE};

const BODY_STYLE: &str = "font-family: system-ui, sans-serif; line-height: 1.8; text-align: center";

/// Escapes special HTML characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the numbers as a passive list.
pub fn list_view(numbers: &[u32]) -> String {
    let mut html = String::from(r#"<ul style="list-style: none; padding-inline-start: 0px">"#);
    for n in numbers {
        html.push_str(&format!("<li>{}</li>", n));
    }
    html.push_str("</ul>");
    html
}

/// Renders the numbers as a single-choice picker with an empty first option.
pub fn selection_view(numbers: &[u32]) -> String {
    let mut html = format!(r#"<select name="{}">"#, SELECTED_NUM_FIELD);
    html.push_str(r#"<option value=""></option>"#);
    for n in numbers {
        html.push_str(&format!(r#"<option value="{0}">&nbsp;&nbsp;{0}</option>"#, n));
    }
    html.push_str("</select>");
    html
}

/// Renders previous/next triggers around the `NN / MM` indicator.
///
/// A trigger at the boundary is rendered disabled.
pub fn pager_view(page: PageIndex) -> String {
    let mut html = String::from("<div>");

    if page.is_first() {
        html.push_str(r#"<button type="button" disabled style="margin-right: 10px">Previous</button>"#);
    } else {
        html.push_str(&nav_button(page.get() - 1, "Previous", "margin-right: 10px"));
    }

    html.push_str(&format!("{} / {:02}", page.padded(), MAX_PAGE));

    if page.is_last() {
        html.push_str(r#"<button type="button" disabled style="margin-left: 10px">Next</button>"#);
    } else {
        html.push_str(&nav_button(page.get() + 1, "Next", "margin-left: 10px"));
    }

    html.push_str("</div>");
    html
}

fn nav_button(target: u32, label: &str, style: &str) -> String {
    format!(
        r#"<form method="get" action="/page/{}" style="display: inline"><button type="submit" style="{}">{}</button></form>"#,
        target,
        style,
        html_escape(label)
    )
}

/// Renders the sentence for the last submission.
pub fn submission_view(state: &SubmissionState) -> String {
    format!("<p>{}</p>", html_escape(&state.sentence()))
}

/// Wraps a body in a complete document.
fn document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{}">
    <title>{}</title>
</head>
<body>
<div style="{}">
{}
</div>
</body>
</html>"#,
        html_escape(DESCRIPTION),
        html_escape(TITLE),
        BODY_STYLE,
        body
    )
}

/// Shell shown until the persisted page index is known.
///
/// The script reads the stored page and navigates to it; the server clamps
/// whatever it receives.
pub fn loading_view() -> String {
    let body = format!(
        r#"<h1>Loading page number...</h1>
<script>
(function () {{
    var stored = parseInt(window.localStorage.getItem("{key}"), 10);
    window.location.replace("/page/" + (isNaN(stored) ? 1 : stored));
}})();
</script>"#,
        key = CURRENT_PAGE_KEY
    );
    document(&body)
}

/// Full page for a resolved page index.
///
/// The embedded script persists the page so the next visit resumes here.
pub fn page_view(page: PageIndex, numbers: &[u32], submission: &SubmissionState) -> String {
    let body = format!(
        r#"<script>window.localStorage.setItem("{key}", "{page}");</script>
{pager}
<h3>Selectable options</h3>
{list}
<form method="post" action="/page/{page}">
{select}
&nbsp;&nbsp;&nbsp;
<button type="submit">Send</button>
</form>
{submission}"#,
        key = CURRENT_PAGE_KEY,
        page = page.get(),
        pager = pager_view(page),
        list = list_view(numbers),
        select = selection_view(numbers),
        submission = submission_view(submission),
    );
    document(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_view_preserves_order() {
        let html = list_view(&[3, 1, 2]);
        assert!(html.contains("<li>3</li><li>1</li><li>2</li>"));
        assert!(html.starts_with("<ul"));
    }

    #[test]
    fn test_selection_view_has_placeholder_first() {
        let html = selection_view(&[17, 18]);
        let placeholder = html.find(r#"<option value=""></option>"#).unwrap();
        let first = html.find(r#"<option value="17">&nbsp;&nbsp;17</option>"#).unwrap();
        let second = html.find(r#"<option value="18">"#).unwrap();
        assert!(placeholder < first && first < second);
        assert!(html.contains(r#"name="selected-num""#));
    }

    #[test]
    fn test_pager_disables_boundaries() {
        let first = pager_view(PageIndex::FIRST);
        assert!(first.contains(r#"disabled style="margin-right: 10px">Previous"#));
        assert!(first.contains(r#"action="/page/2""#));
        assert!(first.contains("01 / 10"));

        let last = pager_view(PageIndex::LAST);
        assert!(last.contains(r#"disabled style="margin-left: 10px">Next"#));
        assert!(last.contains(r#"action="/page/9""#));
        assert!(last.contains("10 / 10"));

        let middle = pager_view(PageIndex::new(5).unwrap());
        assert!(!middle.contains("disabled"));
    }

    #[test]
    fn test_page_view_persists_page() {
        let page = PageIndex::new(3).unwrap();
        let html = page_view(page, &page.contents(), &SubmissionState::Sent(20));
        assert!(html.contains(r#"localStorage.setItem("currentPage", "3")"#));
        assert!(html.contains(r#"action="/page/3""#));
        assert!(html.contains("<li>24</li>"));
        assert!(html.contains("You sent: 20"));
    }

    #[test]
    fn test_loading_view_has_no_page_content() {
        let html = loading_view();
        assert!(html.contains("Loading page number..."));
        assert!(html.contains(r#"localStorage.getItem("currentPage")"#));
        assert!(!html.contains("<select"));
        assert!(!html.contains("<li>"));
    }
}
