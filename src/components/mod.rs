//! UI Components
//!
//! Leptos components for the todo list.

mod footer;
mod item_list;
mod new_item_form;
mod title_bar;
mod todo_item;

pub use footer::Footer;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use title_bar::TitleBar;
pub use todo_item::TodoItem;
