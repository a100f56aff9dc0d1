use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::panels::{CampaignListPanel, HeaderBar, StatusBar, TabBar, WorkflowPanel};
use crate::types::Campaign;
use crate::workflow;

pub struct Dashboard {
    pub list_panel: CampaignListPanel,
    /// Currently active detail tab (one of [`workflow::ALL_TABS`])
    pub active_tab: &'static str,
    pub campaign_count: usize,
    pub active_count: usize,
    /// Campaigns updated within the configured history window
    pub recent_count: usize,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            list_panel: CampaignListPanel::new("CAMPAIGNS".to_string()),
            active_tab: workflow::TAB_OVERVIEW,
            campaign_count: 0,
            active_count: 0,
            recent_count: 0,
        }
    }

    /// Replace the campaign list, clamping the selection and resetting the
    /// active tab to the stage default for the newly selected campaign.
    pub fn update_campaigns(&mut self, campaigns: Vec<Campaign>) {
        self.campaign_count = campaigns.len();
        self.active_count = campaigns.iter().filter(|c| c.is_active()).count();

        let selected = self
            .list_panel
            .state
            .selected()
            .map(|i| i.min(campaigns.len().saturating_sub(1)));
        self.list_panel.campaigns = campaigns;
        if self.list_panel.campaigns.is_empty() {
            self.list_panel.state.select(None);
        } else {
            self.list_panel.state.select(selected.or(Some(0)));
        }
        self.reset_active_tab();
    }

    pub fn selected_campaign(&self) -> Option<&Campaign> {
        self.list_panel.selected()
    }

    fn selected_stage(&self) -> u8 {
        workflow::stage_for(self.selected_campaign()).stage
    }

    pub fn select_next(&mut self) {
        self.list_panel.select_next();
        self.reset_active_tab();
    }

    pub fn select_prev(&mut self) {
        self.list_panel.select_prev();
        self.reset_active_tab();
    }

    /// Reset the active tab to the stage's default, falling back to the
    /// overview when the default itself is gated off (the stage-1 case).
    fn reset_active_tab(&mut self) {
        let stage = self.selected_stage();
        let default = workflow::default_tab(stage);
        self.active_tab = if workflow::tab_enabled(default, stage) {
            default
        } else {
            workflow::TAB_OVERVIEW
        };
    }

    /// Cycle to the next enabled tab.
    pub fn next_tab(&mut self) {
        self.cycle_tab(1);
    }

    /// Cycle to the previous enabled tab.
    pub fn prev_tab(&mut self) {
        self.cycle_tab(workflow::ALL_TABS.len() - 1);
    }

    fn cycle_tab(&mut self, step: usize) {
        let stage = self.selected_stage();
        let tabs = workflow::ALL_TABS;
        let current = tabs
            .iter()
            .position(|name| *name == self.active_tab)
            .unwrap_or(0);

        // At most one full cycle; every stage has at least one enabled tab.
        let mut index = current;
        for _ in 0..tabs.len() {
            index = (index + step) % tabs.len();
            if workflow::tab_enabled(tabs[index], stage) {
                self.active_tab = tabs[index];
                return;
            }
        }
    }

    /// Activate a tab if the gate allows it at the current stage.
    pub fn try_activate_tab(&mut self, tab: &'static str) -> bool {
        if workflow::tab_enabled(tab, self.selected_stage()) {
            self.active_tab = tab;
            true
        } else {
            false
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Min(10),   // body
                Constraint::Length(2), // status bar
            ])
            .split(frame.area());

        HeaderBar {
            version: env!("CARGO_PKG_VERSION"),
        }
        .render(frame, outer[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(outer[1]);

        self.list_panel.render(frame, body[0], true);

        let detail = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // workflow panel
                Constraint::Length(3), // tab bar
                Constraint::Min(3),    // tab content
            ])
            .split(body[1]);

        let selected = self.list_panel.selected().cloned();
        WorkflowPanel::render(frame, detail[0], selected.as_ref());

        let stage = workflow::stage_for(selected.as_ref()).stage;
        TabBar::render(frame, detail[1], self.active_tab, stage);

        self.render_tab_content(frame, detail[2], selected.as_ref());

        StatusBar {
            campaign_count: self.campaign_count,
            active_count: self.active_count,
            recent_count: self.recent_count,
        }
        .render(frame, outer[2]);
    }

    fn render_tab_content(
        &self,
        frame: &mut Frame,
        area: ratatui::layout::Rect,
        campaign: Option<&Campaign>,
    ) {
        let block = Block::default().borders(Borders::ALL);

        let Some(campaign) = campaign else {
            frame.render_widget(block, area);
            return;
        };

        let lines: Vec<Line> = match self.active_tab {
            workflow::TAB_CONTENT_PLANS => vec![
                Line::from("콘텐츠 기획안"),
                Line::from(Span::styled(
                    "인플루언서 기획안 검토 및 승인 대기 목록",
                    Style::default().fg(Color::Gray),
                )),
            ],
            workflow::TAB_CONTENT_PRODUCTION => vec![
                Line::from("콘텐츠 제작 현황"),
                Line::from(Span::styled(
                    "승인된 기획안 기준 제작 진행 상태",
                    Style::default().fg(Color::Gray),
                )),
            ],
            workflow::TAB_CONTENT_REVIEW => vec![
                Line::from("콘텐츠 검수"),
                Line::from(Span::styled(
                    "제출된 콘텐츠 검수 및 수정 요청",
                    Style::default().fg(Color::Gray),
                )),
            ],
            _ => {
                let budget = campaign
                    .budget_krw
                    .map_or("-".to_string(), |b| format!("₩{b}"));
                let influencers = campaign
                    .influencer_count
                    .map_or("-".to_string(), |n| n.to_string());
                vec![
                    Line::from(vec![
                        Span::styled("브랜드  ", Style::default().fg(Color::Gray)),
                        Span::raw(campaign.brand.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("상태    ", Style::default().fg(Color::Gray)),
                        Span::raw(campaign.status.to_string()),
                    ]),
                    Line::from(vec![
                        Span::styled("예산    ", Style::default().fg(Color::Gray)),
                        Span::raw(budget),
                    ]),
                    Line::from(vec![
                        Span::styled("인플루언서 ", Style::default().fg(Color::Gray)),
                        Span::raw(influencers),
                    ]),
                    Line::from(vec![
                        Span::styled("업데이트 ", Style::default().fg(Color::Gray)),
                        Span::raw(campaign.updated_at.format("%Y-%m-%d %H:%M").to_string()),
                    ]),
                ]
            }
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CampaignStatus;

    fn campaign(status: CampaignStatus) -> Campaign {
        let mut c = Campaign::new("캠페인", "브랜드");
        c.status = status;
        c
    }

    #[test]
    fn test_update_selects_first_and_resets_tab() {
        let mut dashboard = Dashboard::new();
        dashboard.update_campaigns(vec![campaign(CampaignStatus::Producing)]);

        assert_eq!(dashboard.list_panel.state.selected(), Some(0));
        // Stage 3 default is content-production, which the gate allows
        assert_eq!(dashboard.active_tab, workflow::TAB_CONTENT_PRODUCTION);
    }

    #[test]
    fn test_stage_one_default_tab_falls_back_to_overview() {
        let mut dashboard = Dashboard::new();
        dashboard.update_campaigns(vec![campaign(CampaignStatus::Recruiting)]);

        // default_tab(1) is content-plans but the gate disables it below
        // stage 2, so the dashboard lands on the overview instead
        assert_eq!(dashboard.active_tab, workflow::TAB_OVERVIEW);
    }

    #[test]
    fn test_try_activate_gated_tab() {
        let mut dashboard = Dashboard::new();
        dashboard.update_campaigns(vec![campaign(CampaignStatus::Recruiting)]);

        assert!(!dashboard.try_activate_tab(workflow::TAB_CONTENT_REVIEW));
        assert_eq!(dashboard.active_tab, workflow::TAB_OVERVIEW);

        assert!(dashboard.try_activate_tab(workflow::TAB_OVERVIEW));
    }

    #[test]
    fn test_next_tab_skips_disabled() {
        let mut dashboard = Dashboard::new();
        dashboard.update_campaigns(vec![campaign(CampaignStatus::Planning)]);

        // Stage 2: overview and content-plans enabled, others gated
        dashboard.active_tab = workflow::TAB_OVERVIEW;
        dashboard.next_tab();
        assert_eq!(dashboard.active_tab, workflow::TAB_CONTENT_PLANS);
        dashboard.next_tab();
        assert_eq!(dashboard.active_tab, workflow::TAB_OVERVIEW);
    }

    #[test]
    fn test_prev_tab_cycles_backwards() {
        let mut dashboard = Dashboard::new();
        dashboard.update_campaigns(vec![campaign(CampaignStatus::Live)]);

        // Stage 5: everything enabled
        dashboard.active_tab = workflow::TAB_OVERVIEW;
        dashboard.prev_tab();
        assert_eq!(dashboard.active_tab, workflow::TAB_CONTENT_REVIEW);
    }

    #[test]
    fn test_selection_change_resets_tab() {
        let mut dashboard = Dashboard::new();
        dashboard.update_campaigns(vec![
            campaign(CampaignStatus::Live),
            campaign(CampaignStatus::Planning),
        ]);

        assert_eq!(dashboard.active_tab, workflow::TAB_CONTENT_REVIEW);
        dashboard.select_next();
        assert_eq!(dashboard.active_tab, workflow::TAB_CONTENT_PLANS);
    }

    #[test]
    fn test_empty_dashboard() {
        let mut dashboard = Dashboard::new();
        dashboard.update_campaigns(Vec::new());
        assert!(dashboard.selected_campaign().is_none());
        assert_eq!(dashboard.active_tab, workflow::TAB_OVERVIEW);
    }
}
