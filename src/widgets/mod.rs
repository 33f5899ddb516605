//! Reusable widget state.

pub mod selection_list;

pub use selection_list::SelectionList;
