//! # vireo-commons
//!
//! Shared types for the vireo backend: runtime settings, domain models,
//! and field validation.
//!
//! The domain models are the single source of truth for the wire shapes of
//! users and publications. Read models (`User`, `Publication`) never carry
//! password material; the payload types (`UserDraft`, `PublicationDraft`)
//! are what handlers deserialize request bodies into and run `prepare` on
//! before anything reaches storage.

pub mod models;
pub mod settings;
pub mod validation;

// Re-export commonly used types
pub use models::{PrepareStage, Publication, PublicationDraft, User, UserDraft};
pub use settings::{AuthSettings, DatabaseSettings, ServerSettings, Settings, SettingsError};
pub use validation::ValidationError;
