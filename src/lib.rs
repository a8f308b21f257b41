//! Client for the Cheeze Wizards API.
//!
//! Fetches wizards and duels from one of the hosted deployments and decodes them into
//! typed values. The client only reads; it never mutates remote state.

pub(crate) mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;

pub use client::{CheezeWizards, CheezeWizardsApi};
pub use config::{CheezeWizardsConfig, CheezeWizardsConfigBuilder, Environment};
pub use error::CheezeWizardsError;
pub use models::{Affinity, Duel, Wizard};
pub use query::{DuelQuery, DuelQueryBuilder, WizardQuery, WizardQueryBuilder};
