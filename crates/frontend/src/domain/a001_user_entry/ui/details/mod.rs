//! Registration form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands over `RegistrationForm`
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::UserEntryDetails;
pub use view_model::RegistrationViewModel;
