//! Route handlers for the campdeck REST API.

pub mod campaigns;
pub mod health;
pub mod workflow;
