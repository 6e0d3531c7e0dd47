//! Entity structs for stride domain objects.

mod session;

pub use session::{Session, SessionRow};
