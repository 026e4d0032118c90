mod literal;
mod term;

pub use literal::{typed_literal, LiteralExt};
pub use term::{Term, TermKind, TermRef};
