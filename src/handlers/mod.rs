//! Request handlers.

mod page;
mod search;
mod submit;

pub use page::*;
pub use search::*;
pub use submit::*;

use axum::extract::rejection::FormRejection;
use axum::Form;

use crate::error::{AppError, AppResult, ErrorCode};

/// Unwraps a decoded form, turning a decoding failure into `InvalidForm`.
pub(crate) fn decode_form<T>(form: Result<Form<T>, FormRejection>) -> AppResult<T> {
    form.map(|Form(inner)| inner)
        .map_err(|e| AppError::with_message(ErrorCode::InvalidForm, e.body_text()))
}
