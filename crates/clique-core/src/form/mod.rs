//! Declarative form model
//!
//! - `field`: field specs, values and rendered descriptors
//! - `schema`: ordered schema plus required-field policy
//! - `state`: the per-screen value container

pub mod field;
pub mod schema;
pub mod state;

pub use field::{FieldDescriptor, FieldKind, FieldSpec, FieldValue, KeyboardHint};
pub use schema::FormSchema;
pub use state::FormState;
