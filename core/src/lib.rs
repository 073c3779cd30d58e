pub mod action;
pub mod header;
pub mod lang;
pub mod problem;
pub mod style;
pub mod writer;

#[cfg(test)]
mod testing;

pub use crate::lang::Lang;
pub use crate::problem::Problem;
