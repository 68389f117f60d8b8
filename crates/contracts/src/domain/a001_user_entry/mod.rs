pub mod aggregate;
pub mod form_state;
pub mod store;
pub mod validation;

pub use aggregate::{local_date, local_midnight, IdGenerator, UserEntry, UserEntryDraft, UserEntryId};
pub use form_state::{RegistrationForm, SubmitError, SubmitOutcome};
pub use store::{KeyValueStore, MemoryStore, RecordStore, StoreError};
pub use validation::{validate, Field, FieldErrors};
