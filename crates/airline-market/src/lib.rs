//! Synthetic Australian domestic airline market data.
//!
//! Generators take an explicit random stream ([`market::MarketSimulator`]) so
//! every report can be replayed from a seed. Narrative analysis is delegated
//! to an [`analyst::MarketAnalyst`] collaborator.

pub mod analyst;
pub mod config;
pub mod error;
pub mod market;
pub mod telemetry;
