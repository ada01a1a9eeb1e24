//!
//! Stateless helpers shared by the SCORE execution engine: integer codecs,
//! hex validation, hashing, case conversion, response checks, type
//! annotation resolution and builtin address lookups. Each submodule provides
//! a focused toolkit; none of them hold state.
//!

pub mod annotation;
pub mod builtin;
pub mod case;
pub mod config;
pub mod error;
pub mod hash;
pub mod hex;
pub mod int;
pub mod response;

pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        annotation::{PlainType, TypeAnnotation, get_main_type_from_annotation},
        builtin::{BuiltinScores, is_builtin_score},
        case::to_camel_case,
        hash::sha3_256,
        hex::{is_lowercase_hex_string, is_lowercase_hex_value},
        int::{byte_length_of_int, int_from_bytes, int_to_bytes},
        response::check_error_response,
    };
}
