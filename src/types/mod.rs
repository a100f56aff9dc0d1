//! Core domain types for campdeck.

mod campaign;

pub use campaign::{Campaign, CampaignStatus, ParseStatusError};
