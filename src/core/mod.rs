// Core modules implementing tokenization, validation, and error modeling.
pub mod error;
pub mod source;
pub mod token;
pub mod tokenize;
pub mod validate;
