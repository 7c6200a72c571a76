pub mod api_error;
pub mod card;
pub mod set;

pub use api_error::*;
pub use card::*;
pub use set::*;
