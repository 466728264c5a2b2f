//! Browser page handlers.

use axum::{
    extract::{rejection::FormRejection, Path},
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::debug;

use crate::context::RequestContext;
use crate::error::AppResult;
use crate::models::{SubmissionState, SubmitForm};
use crate::paging::PageIndex;
use crate::views::html;

/// GET / - Loading shell that resolves the persisted page in the browser.
pub async fn index() -> Response {
    no_store(Html(html::loading_view()))
}

/// GET /page/{page} - Full page for the (clamped) page index.
pub async fn show_page(ctx: RequestContext, Path(raw): Path<String>) -> Response {
    let page = resolve_page(&raw);
    debug!(request_id = %ctx.request_id, page = page.get(), "render page");
    no_store(Html(html::page_view(
        page,
        &page.contents(),
        &SubmissionState::NotSubmitted,
    )))
}

/// POST /page/{page} - Full page with the submitted selection echoed.
pub async fn submit_page(
    ctx: RequestContext,
    Path(raw): Path<String>,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> AppResult<Response> {
    let page = resolve_page(&raw);
    let num = super::decode_form(form)
        .and_then(|form| form.selection())
        .map_err(|e| e.with_request_id(&ctx.request_id))?;

    super::submit::log_submission(&ctx, num);

    let state = match num {
        Some(n) => SubmissionState::Sent(n),
        None => SubmissionState::Empty,
    };
    Ok(no_store(Html(html::page_view(page, &page.contents(), &state))))
}

/// GET /health - Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Clamps the path segment into a page index; non-integers resolve to page 1.
fn resolve_page(raw: &str) -> PageIndex {
    PageIndex::parse_clamped(raw).unwrap_or_default()
}

fn no_store(body: impl IntoResponse) -> Response {
    let mut response = body.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
