//! Application services, configuration and persistence wiring for the Dasher CLI.

pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
pub mod uuids;

#[cfg(test)]
mod test;
