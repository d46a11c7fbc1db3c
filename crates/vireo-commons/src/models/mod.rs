//! Domain models for users and publications.
//!
//! Each entity comes in two shapes: a read model that maps 1:1 onto the rows
//! the repositories project (and is what handlers serialize back to clients),
//! and a draft that request bodies deserialize into. Drafts go through a
//! two-phase `prepare` (validate, then normalize) before persistence.

mod publication;
mod user;

pub use publication::{Publication, PublicationDraft};
pub use user::{PrepareStage, User, UserDraft};
