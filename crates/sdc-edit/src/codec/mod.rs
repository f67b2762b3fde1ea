//! Compilation into the Wikibase claim wire format.

pub mod edit;
pub mod reference;
pub mod value;

pub use edit::{encode_edit, ClaimCompiler};
pub use reference::{build_reference, RetrievalDate};
pub use value::{compile_qualifiers, compile_value_snak};
