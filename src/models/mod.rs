//! Request and response models.

mod forms;
mod submission;

pub use forms::*;
pub use submission::*;
