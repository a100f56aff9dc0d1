//! File-backed campaign store.
//!
//! The store owns the persisted `Campaign` records and is the only writer of
//! `campaigns.json`. Callers construct it from config and pass it where
//! needed; nothing in the crate reaches for ambient global state. Every
//! mutation writes through to disk.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::Config;
use crate::types::{Campaign, CampaignStatus};
use crate::workflow;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignStore {
    pub campaigns: Vec<Campaign>,

    #[serde(skip)]
    store_file: PathBuf,
}

impl CampaignStore {
    /// Load the store from `campaigns.json`, creating the data directory if
    /// needed. A missing file yields an empty store; a corrupt file is an
    /// error rather than silent data loss.
    pub fn load(config: &Config) -> Result<Self> {
        let data_path = config.data_path();
        fs::create_dir_all(&data_path).context("Failed to create data directory")?;

        let store_file = config.campaigns_file();

        if store_file.exists() {
            let contents =
                fs::read_to_string(&store_file).context("Failed to read campaign store")?;
            let mut store: CampaignStore =
                serde_json::from_str(&contents).context("Failed to parse campaign store")?;
            store.store_file = store_file;
            Ok(store)
        } else {
            Ok(Self {
                campaigns: Vec::new(),
                store_file,
            })
        }
    }

    pub fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&self.store_file, contents).context("Failed to write campaign store")?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn get(&self, id: Uuid) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    /// Create a campaign and persist it, returning the new id.
    pub fn create(
        &mut self,
        title: String,
        brand: String,
        budget_krw: Option<u64>,
        influencer_count: Option<u32>,
    ) -> Result<Uuid> {
        let mut campaign = Campaign::new(title, brand);
        campaign.budget_krw = budget_krw;
        campaign.influencer_count = influencer_count;
        let id = campaign.id;

        self.campaigns.push(campaign);
        self.save()?;
        Ok(id)
    }

    /// Insert a pre-built campaign (used by seeding and tests).
    pub fn insert(&mut self, campaign: Campaign) -> Result<()> {
        self.campaigns.push(campaign);
        self.save()
    }

    /// Set a campaign's status and bump its updated_at timestamp.
    pub fn set_status(&mut self, id: Uuid, status: CampaignStatus) -> Result<()> {
        let Some(campaign) = self.campaigns.iter_mut().find(|c| c.id == id) else {
            bail!("campaign {id} not found");
        };
        campaign.status = status;
        campaign.updated_at = chrono::Utc::now();
        self.save()
    }

    /// Advance a campaign one step along the happy path, returning the new
    /// status.
    pub fn advance(&mut self, id: Uuid) -> Result<CampaignStatus> {
        let Some(campaign) = self.campaigns.iter_mut().find(|c| c.id == id) else {
            bail!("campaign {id} not found");
        };
        campaign.status = campaign.status.advanced();
        campaign.updated_at = chrono::Utc::now();
        let status = campaign.status;
        self.save()?;
        Ok(status)
    }

    pub fn remove(&mut self, id: Uuid) -> Result<()> {
        let before = self.campaigns.len();
        self.campaigns.retain(|c| c.id != id);
        if self.campaigns.len() == before {
            bail!("campaign {id} not found");
        }
        self.save()
    }

    /// Campaigns still in flight, for the dashboard's default view.
    pub fn active_campaigns(&self) -> Vec<&Campaign> {
        self.campaigns.iter().filter(|c| c.is_active()).collect()
    }

    /// Campaigns currently at the given workflow stage.
    pub fn by_stage(&self, stage: u8) -> Vec<&Campaign> {
        self.campaigns
            .iter()
            .filter(|c| workflow::stage_for(Some(*c)).stage == stage)
            .collect()
    }

    /// Campaigns updated within the last `hours` hours, newest first.
    pub fn recently_updated(&self, hours: u64) -> Vec<&Campaign> {
        let cutoff = chrono::Utc::now() - chrono::Duration::hours(hours as i64);
        let mut recent: Vec<&Campaign> = self
            .campaigns
            .iter()
            .filter(|c| c.updated_at > cutoff)
            .collect();
        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, CampaignStore) {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();
        let store = CampaignStore::load(&config).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_load_empty_store() {
        let (_dir, store) = test_store();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_create_and_get() {
        let (_dir, mut store) = test_store();
        let id = store
            .create("왕홍 뷰티 캠페인".to_string(), "글로우랩".to_string(), Some(50_000_000), Some(3))
            .unwrap();

        let campaign = store.get(id).unwrap();
        assert_eq!(campaign.brand, "글로우랩");
        assert_eq!(campaign.status, CampaignStatus::Creating);
        assert_eq!(campaign.budget_krw, Some(50_000_000));
    }

    #[test]
    fn test_persists_across_reload() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();

        let id = {
            let mut store = CampaignStore::load(&config).unwrap();
            store
                .create("캠페인".to_string(), "브랜드".to_string(), None, None)
                .unwrap()
        };

        let store = CampaignStore::load(&config).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(id).is_some());
    }

    #[test]
    fn test_set_status_updates_timestamp() {
        let (_dir, mut store) = test_store();
        let id = store
            .create("캠페인".to_string(), "브랜드".to_string(), None, None)
            .unwrap();
        let created_at = store.get(id).unwrap().updated_at;

        store.set_status(id, CampaignStatus::Producing).unwrap();

        let campaign = store.get(id).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Producing);
        assert!(campaign.updated_at >= created_at);
    }

    #[test]
    fn test_set_status_unknown_id() {
        let (_dir, mut store) = test_store();
        let err = store
            .set_status(Uuid::new_v4(), CampaignStatus::Live)
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_advance() {
        let (_dir, mut store) = test_store();
        let id = store
            .create("캠페인".to_string(), "브랜드".to_string(), None, None)
            .unwrap();

        let status = store.advance(id).unwrap();
        assert_eq!(status, CampaignStatus::Submitted);
        assert_eq!(store.get(id).unwrap().status, CampaignStatus::Submitted);
    }

    #[test]
    fn test_remove() {
        let (_dir, mut store) = test_store();
        let id = store
            .create("캠페인".to_string(), "브랜드".to_string(), None, None)
            .unwrap();

        store.remove(id).unwrap();
        assert!(store.is_empty());
        assert!(store.remove(id).is_err());
    }

    #[test]
    fn test_by_stage() {
        let (_dir, mut store) = test_store();
        let a = store
            .create("A".to_string(), "브랜드".to_string(), None, None)
            .unwrap();
        let b = store
            .create("B".to_string(), "브랜드".to_string(), None, None)
            .unwrap();
        store.set_status(a, CampaignStatus::Producing).unwrap();
        store.set_status(b, CampaignStatus::Live).unwrap();

        assert_eq!(store.by_stage(3).len(), 1);
        assert_eq!(store.by_stage(3)[0].id, a);
        assert_eq!(store.by_stage(5).len(), 1);
        assert!(store.by_stage(2).is_empty());
    }

    #[test]
    fn test_active_campaigns_excludes_finished() {
        let (_dir, mut store) = test_store();
        let a = store
            .create("A".to_string(), "브랜드".to_string(), None, None)
            .unwrap();
        let b = store
            .create("B".to_string(), "브랜드".to_string(), None, None)
            .unwrap();
        store.set_status(a, CampaignStatus::Completed).unwrap();
        store.set_status(b, CampaignStatus::Monitoring).unwrap();

        let active = store.active_campaigns();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b);
    }

    #[test]
    fn test_recently_updated_sorted_newest_first() {
        let (_dir, mut store) = test_store();
        let a = store
            .create("A".to_string(), "브랜드".to_string(), None, None)
            .unwrap();
        let _b = store
            .create("B".to_string(), "브랜드".to_string(), None, None)
            .unwrap();
        store.set_status(a, CampaignStatus::Planning).unwrap();

        let recent = store.recently_updated(24);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, a);
    }
}
