//! Card collections dealt from texture sets

mod builder;
mod card;

pub use builder::*;
pub use card::*;
