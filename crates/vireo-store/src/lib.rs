// Vireo storage layer
// MySQL pool construction, schema migrations, and the user/publication
// repositories. Every repository operation is a single parameterized
// statement; multi-step consistency (idempotent follows, saturating like
// counters) is pushed into the statements themselves.

pub mod db;
pub mod publications;
pub mod users;

pub use publications::PublicationRepo;
pub use users::{UserCredentials, UserRepo};
