pub mod date_input;
pub mod page_header;

pub use date_input::DateInput;
pub use page_header::PageHeader;
