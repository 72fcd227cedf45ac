//! metagen form: the metadata generator form, without a widget toolkit
//!
//! - `default_metadata`: the tree every session starts from
//! - `Section` + `Visibility`: hideable groups of fields
//! - `FieldSpec` / `FIELDS`: every input, its path and how its text is coerced
//! - `FormSession`: the state one user edits, and its generate/reset action
//!
//! # Example
//!
//! ```rust
//! use metagen_core_store::path;
//! use metagen_form::FormSession;
//!
//! let mut session = FormSession::new();
//! session.input(&path!("title.default"), "Hello").unwrap();
//! session.input(&path!("robots.index"), "false").unwrap();
//!
//! let code = session.generate();
//! assert!(code.contains("\"default\": \"Hello\""));
//! assert!(code.contains("\"index\": false"));
//! ```

mod defaults;
pub mod field;
mod section;
mod session;

pub use defaults::default_metadata;
pub use field::{Binding, FieldKind, FieldSpec, FIELDS};
pub use section::{Section, UnknownSection, Visibility};
pub use session::{Action, FormSession};
