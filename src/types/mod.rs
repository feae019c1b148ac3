pub mod far;
pub mod identifiers;
pub mod session;

pub use far::Far;
pub use identifiers::{FARID, SEID, TEID};
pub use session::{Session, SessionError};
