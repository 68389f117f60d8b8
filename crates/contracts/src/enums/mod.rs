pub mod gender;
pub mod hobby;

pub use gender::Gender;
pub use hobby::Hobby;
