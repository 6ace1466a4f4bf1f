#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # vcf-adapter-vcard
//!
//! vCard 3.0 (RFC 2426) and 4.0 (RFC 6350) serializer.
//!
//! Serialization is pure apart from the REV timestamp and the random UID.
//! Lines are joined with `\n` and never folded.
//!
//! ## Example Usage
//!
//! ```rust
//! use vcf_adapter_vcard::serialize;
//! use vcf_model::{Contact, VCardVersion};
//!
//! let contact = Contact::from_pairs([("last_name", "Gump"), ("first_name", "Forrest")]);
//! let output = serialize(&contact, VCardVersion::V4);
//!
//! assert!(output.text.contains("FN:Forrest Gump\n"));
//! assert_eq!(output.filename, "gump_forrest.vcf");
//! ```

pub mod escape;
pub mod media;
pub mod serializer;
pub mod syntax;

pub use escape::escape;
pub use media::ImageKind;
pub use serializer::{VCardSerializer, serialize, serialize_fields};
pub use syntax::Syntax;
