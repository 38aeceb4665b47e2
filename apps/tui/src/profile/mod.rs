// Form State Manager: the profile mapping, per-field validation rules, and
// the local JSON cache it round-trips through. Mutation flows one way:
// UI key event → FormState::update_field → validation + cache write.

pub mod form;
pub mod models;
pub mod store;
pub mod validation;

// Re-export the public API consumed by the render and ui modules.
pub use form::FormState;
pub use models::{Field, ResumeProfile};
pub use store::ProfileStore;
