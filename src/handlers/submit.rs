//! Selection submit handler.

use axum::{extract::rejection::FormRejection, Form, Json};
use tracing::info;

use crate::context::RequestContext;
use crate::error::AppResult;
use crate::models::{SubmitForm, SubmitResponse};

use super::decode_form;

/// POST /submit - Echoes the selected number, or `null` for no selection.
pub async fn submit(
    ctx: RequestContext,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> AppResult<Json<SubmitResponse>> {
    let num = decode_form(form)
        .and_then(|form| form.selection())
        .map_err(|e| e.with_request_id(&ctx.request_id))?;

    log_submission(&ctx, num);
    Ok(Json(SubmitResponse { num }))
}

pub(crate) fn log_submission(ctx: &RequestContext, num: Option<i64>) {
    match num {
        Some(n) => info!(request_id = %ctx.request_id, "submitted {}", n),
        None => info!(request_id = %ctx.request_id, "submitted empty"),
    }
}
