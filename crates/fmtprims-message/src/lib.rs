//! Arity-checked error message templates for JSON Schema validation results.
//!
//! Each [`ErrorCode`] is bound to one English template with a fixed number of
//! `{}` placeholders. Rendering with the wrong number of arguments is an error
//! rather than garbled text.
//!
//! ```
//! use fmtprims_message::{ErrorCode, Message};
//!
//! let message = Message::render(ErrorCode::XMustBeOfTypeY, &[&"age", &"integer"]).unwrap();
//! assert_eq!(message.description(), "age must be of type integer");
//! assert_eq!(message.code().as_str(), "X_MUST_BE_OF_TYPE_Y");
//! ```

pub mod catalog;
pub mod code;
pub mod error;
pub mod message;

pub use catalog::{Template, TemplateCatalog};
pub use code::ErrorCode;
pub use error::{MessageError, Result};
pub use message::{Message, CONTEXT_ROOT};
