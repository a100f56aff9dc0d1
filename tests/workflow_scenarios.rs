//! End-to-end workflow derivation scenarios.
//!
//! Drives a campaign through the store and checks the derived stage, step
//! list and tab gating at each point of the lifecycle.

use tempfile::TempDir;

use campdeck::config::Config;
use campdeck::store::CampaignStore;
use campdeck::types::CampaignStatus;
use campdeck::workflow::{
    self, TAB_CONTENT_PLANS, TAB_CONTENT_PRODUCTION, TAB_CONTENT_REVIEW,
};

fn test_store() -> (TempDir, Config, CampaignStore) {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut config = Config::default();
    config.paths.data = temp_dir.path().to_string_lossy().to_string();
    let store = CampaignStore::load(&config).expect("load store");
    (temp_dir, config, store)
}

#[test]
fn producing_campaign_full_derivation() {
    let (_dir, _config, mut store) = test_store();
    let id = store
        .create("왕홍 캠페인".to_string(), "글로우랩".to_string(), None, None)
        .unwrap();
    store.set_status(id, CampaignStatus::Producing).unwrap();

    let campaign = store.get(id).unwrap();
    let stage = workflow::stage_for(Some(campaign));
    assert_eq!(stage.stage, 3);
    assert_eq!(stage.title, "콘텐츠 제작");
    assert_eq!(stage.progress, 60);

    let steps = workflow::workflow_steps(stage.stage);
    assert!(steps[0].completed);
    assert!(steps[1].completed);
    assert!(steps[2].current && !steps[2].completed);
    assert!(!steps[3].completed && !steps[3].current);
    assert!(!steps[4].completed && !steps[4].current);

    assert!(workflow::tab_enabled(TAB_CONTENT_PRODUCTION, stage.stage));
    assert!(!workflow::tab_enabled(TAB_CONTENT_REVIEW, stage.stage));
    assert_eq!(workflow::default_tab(stage.stage), TAB_CONTENT_PRODUCTION);
}

#[test]
fn stage_progresses_monotonically_along_happy_path() {
    let (_dir, _config, mut store) = test_store();
    let id = store
        .create("캠페인".to_string(), "브랜드".to_string(), None, None)
        .unwrap();

    let mut last_stage = 0u8;
    let mut last_progress = 0u8;

    loop {
        let stage = workflow::stage_for(store.get(id));
        assert!(stage.stage >= last_stage, "stage regressed at {stage:?}");
        assert!(
            stage.progress >= last_progress,
            "progress regressed at {stage:?}"
        );
        last_stage = stage.stage;
        last_progress = stage.progress;

        let status = store.advance(id).unwrap();
        if status == CampaignStatus::Completed {
            break;
        }
    }

    let stage = workflow::stage_for(store.get(id));
    assert_eq!(stage.stage, 5);
    assert_eq!(stage.progress, 100);
}

#[test]
fn tab_gates_open_in_order() {
    let (_dir, _config, mut store) = test_store();
    let id = store
        .create("캠페인".to_string(), "브랜드".to_string(), None, None)
        .unwrap();

    // Stage 1: everything content-related gated, yet the default tab still
    // points at content-plans (known product inconsistency, kept as-is)
    let stage = workflow::stage_for(store.get(id)).stage;
    assert_eq!(stage, 1);
    assert!(!workflow::tab_enabled(TAB_CONTENT_PLANS, stage));
    assert_eq!(workflow::default_tab(stage), TAB_CONTENT_PLANS);

    store.set_status(id, CampaignStatus::Planning).unwrap();
    let stage = workflow::stage_for(store.get(id)).stage;
    assert!(workflow::tab_enabled(TAB_CONTENT_PLANS, stage));
    assert!(!workflow::tab_enabled(TAB_CONTENT_PRODUCTION, stage));

    store.set_status(id, CampaignStatus::PlanApproved).unwrap();
    let stage = workflow::stage_for(store.get(id)).stage;
    assert!(workflow::tab_enabled(TAB_CONTENT_PRODUCTION, stage));
    assert!(!workflow::tab_enabled(TAB_CONTENT_REVIEW, stage));

    store.set_status(id, CampaignStatus::ContentReview).unwrap();
    let stage = workflow::stage_for(store.get(id)).stage;
    assert!(workflow::tab_enabled(TAB_CONTENT_REVIEW, stage));

    // Unknown tab names stay permissive at every stage
    for s in 1..=5u8 {
        assert!(workflow::tab_enabled("settlement-report", s));
    }
}

#[test]
fn derivation_survives_store_reload() {
    let (_dir, config, mut store) = test_store();
    let id = store
        .create("캠페인".to_string(), "브랜드".to_string(), None, None)
        .unwrap();
    store
        .set_status(id, CampaignStatus::ContentRevision)
        .unwrap();
    drop(store);

    let store = CampaignStore::load(&config).unwrap();
    let stage = workflow::stage_for(store.get(id));
    assert_eq!(stage.stage, 4);
    assert_eq!(stage.progress, 80);
    assert_eq!(stage.title, "콘텐츠 검수");
}
