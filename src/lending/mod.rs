mod errors;
mod overdue;
mod service;

pub use errors::{LendingError, Result};
pub use overdue::find_overdue_items;
pub use service::{borrow_item, check_in_item};
