//! Plain-text rendering for the terminal client.

use crate::models::SubmissionState;
use crate::paging::{PageIndex, MAX_PAGE};

pub fn list_view(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(|n| format!("  {}", n))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered choices; choice 0 is the empty option.
pub fn selection_view(numbers: &[u32]) -> String {
    let mut choices = vec!["(none)".to_string()];
    choices.extend(numbers.iter().map(|n| format!("  {}", n)));
    format!("[{}]", choices.join(" |"))
}

/// Pager line; disabled triggers are shown as dashes.
pub fn pager_view(page: PageIndex, can_go_previous: bool, can_go_next: bool) -> String {
    let previous = if can_go_previous { "<prev" } else { " ----" };
    let next = if can_go_next { "next>" } else { "---- " };
    format!("{}  {} / {:02}  {}", previous, page.padded(), MAX_PAGE, next)
}

pub fn submission_view(state: &SubmissionState) -> String {
    state.sentence()
}

pub fn loading_view() -> String {
    "Loading page number...".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_marks_disabled_triggers() {
        assert_eq!(pager_view(PageIndex::FIRST, false, true), " ----  01 / 10  next>");
        assert_eq!(pager_view(PageIndex::LAST, true, false), "<prev  10 / 10  ---- ");
    }

    #[test]
    fn test_selection_starts_with_empty_choice() {
        assert_eq!(selection_view(&[1, 2]), "[(none) |  1 |  2]");
    }

    #[test]
    fn test_list_one_per_line() {
        assert_eq!(list_view(&[9, 10]), "  9\n  10");
    }
}
