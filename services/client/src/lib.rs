pub mod adapters;
pub mod config;
pub mod error;
pub mod widgets;

#[cfg(test)]
mod testing;
