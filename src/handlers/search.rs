//! Page search handler.

use axum::{extract::rejection::FormRejection, Form, Json};
use tracing::debug;

use crate::context::RequestContext;
use crate::error::AppResult;
use crate::models::SearchForm;

use super::decode_form;

/// POST /search - Numbers on the requested page.
pub async fn search(
    ctx: RequestContext,
    form: Result<Form<SearchForm>, FormRejection>,
) -> AppResult<Json<Vec<u32>>> {
    let page = decode_form(form)
        .and_then(|form| form.page())
        .map_err(|e| e.with_request_id(&ctx.request_id))?;

    let contents = page.contents();
    debug!(request_id = %ctx.request_id, page = page.get(), "search");
    Ok(Json(contents))
}
