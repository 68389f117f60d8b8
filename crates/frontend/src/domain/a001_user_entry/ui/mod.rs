pub mod delete_dialog;
pub mod details;
pub mod list;
