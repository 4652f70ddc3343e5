pub mod env;
mod generator;
mod interface;

#[cfg(test)]
mod tests;

pub use generator::Generator;
pub use interface::*;
