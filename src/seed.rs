//! Sample campaign fixtures.
//!
//! `campdeck seed` fills an empty store with campaigns covering every
//! workflow stage so the dashboard has something to show out of the box.

use anyhow::Result;

use crate::store::CampaignStore;
use crate::types::{Campaign, CampaignStatus};

/// Fixture set: (title, brand, status, budget KRW, influencer count).
fn fixtures() -> Vec<(&'static str, &'static str, CampaignStatus, u64, u32)> {
    vec![
        (
            "왕홍 뷰티 신제품 런칭",
            "글로우랩",
            CampaignStatus::Recruiting,
            80_000_000,
            5,
        ),
        (
            "더우인 스킨케어 리뷰",
            "서울코스메틱",
            CampaignStatus::Planning,
            45_000_000,
            3,
        ),
        (
            "샤오홍슈 K-푸드 챌린지",
            "한강식품",
            CampaignStatus::PlanReview,
            30_000_000,
            8,
        ),
        (
            "여름 선케어 숏폼 시리즈",
            "글로우랩",
            CampaignStatus::Producing,
            60_000_000,
            4,
        ),
        (
            "패션 하울 라이브커머스",
            "모던서울",
            CampaignStatus::ContentReview,
            120_000_000,
            2,
        ),
        (
            "웨이보 K-뷰티 앰배서더",
            "서울코스메틱",
            CampaignStatus::Live,
            200_000_000,
            1,
        ),
        (
            "설 연휴 한정판 프로모션",
            "한강식품",
            CampaignStatus::Completed,
            25_000_000,
            6,
        ),
        (
            "가을 신상 티저",
            "모던서울",
            CampaignStatus::Paused,
            15_000_000,
            2,
        ),
    ]
}

/// Seed the store with sample campaigns.
///
/// Skips a non-empty store unless `force` is set. Returns the number of
/// campaigns written.
pub fn seed_campaigns(store: &mut CampaignStore, force: bool) -> Result<usize> {
    if !store.is_empty() && !force {
        tracing::info!(existing = store.len(), "Store not empty, skipping seed");
        return Ok(0);
    }

    if force {
        store.campaigns.clear();
    }

    let fixtures = fixtures();
    let count = fixtures.len();

    for (title, brand, status, budget_krw, influencer_count) in fixtures {
        let mut campaign = Campaign::new(title, brand);
        campaign.status = status;
        campaign.budget_krw = Some(budget_krw);
        campaign.influencer_count = Some(influencer_count);
        store.insert(campaign)?;
    }

    tracing::info!(count, "Seeded sample campaigns");
    Ok(count)
}
