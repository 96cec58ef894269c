//! UI Components
//!
//! Leptos components for the four screens and the shared widgets.

mod activity_feed;
mod assignee_panel;
mod assignee_picker;
mod delete_confirm_button;
mod new_todo_form;
mod toast_host;
mod todo_editor;
mod todo_list;

pub use activity_feed::ActivityFeed;
pub use assignee_panel::AssigneePanel;
pub use assignee_picker::AssigneePicker;
pub use delete_confirm_button::DeleteConfirmButton;
pub use new_todo_form::NewTodoForm;
pub use toast_host::ToastHost;
pub use todo_editor::TodoEditor;
pub use todo_list::TodoList;
