//! Application Stores
//!
//! Reactive state shared through the Leptos context API, one store per
//! concern.

mod activity;
mod assignee;
mod session;
mod toast;
mod todo;

#[cfg(test)]
mod fake;

pub use activity::{Activity, ActivityStore};
pub use assignee::AssigneeStore;
pub use session::EditSession;
pub use toast::{Toast, ToastStore};
pub use todo::TodoStore;
