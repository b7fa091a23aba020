//! The sig parsing pipeline: normalize, label, segment, build.

pub mod builder;
pub mod latin;
pub mod normalize;
pub mod parser;
pub mod rules;
pub mod segment;

pub use latin::*;
pub use parser::*;
