//! Form-encoded request bodies, decoded and validated at the boundary.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::paging::PageIndex;

/// Form field carrying the selected number.
pub const SELECTED_NUM_FIELD: &str = "selected-num";

/// Body of a search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "page-num", default)]
    pub page_num: Option<String>,
}

impl SearchForm {
    pub fn new(page: PageIndex) -> Self {
        Self {
            page_num: Some(page.get().to_string()),
        }
    }

    /// Parses `page-num` into a page index.
    ///
    /// Missing or non-integer values and values outside `[1, MAX_PAGE]` are
    /// rejected rather than coerced.
    pub fn page(&self) -> AppResult<PageIndex> {
        let raw = self
            .page_num
            .as_deref()
            .map(str::trim)
            .ok_or_else(|| AppError::new(ErrorCode::InvalidPageNumber))?;

        let value: i64 = raw.parse().map_err(|_| {
            AppError::with_message(
                ErrorCode::InvalidPageNumber,
                format!("The page number '{}' is not an integer.", raw),
            )
        })?;

        u32::try_from(value)
            .ok()
            .and_then(PageIndex::new)
            .ok_or_else(|| AppError::new(ErrorCode::PageOutOfRange))
    }
}

/// Body of a submit request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitForm {
    #[serde(rename = "selected-num", default)]
    pub selected_num: Option<String>,
}

impl SubmitForm {
    pub fn new(selected: Option<i64>) -> Self {
        Self {
            selected_num: selected.map(|n| n.to_string()),
        }
    }

    /// Parses `selected-num`. Absent or blank means no selection.
    pub fn selection(&self) -> AppResult<Option<i64>> {
        match self.selected_num.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                AppError::with_message(
                    ErrorCode::InvalidSelection,
                    format!("The selected number '{}' is not an integer.", raw),
                )
            }),
        }
    }
}
