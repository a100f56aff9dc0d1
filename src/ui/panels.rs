use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::types::Campaign;
use crate::workflow::{self, WorkflowStage, WorkflowStep};

/// Color used for a workflow stage marker.
fn stage_color(stage: u8) -> Color {
    match stage {
        1 => Color::Gray,
        2 => Color::Yellow,
        3 => Color::Cyan,
        4 => Color::Magenta,
        5 => Color::Green,
        _ => Color::Gray,
    }
}

pub struct CampaignListPanel {
    pub campaigns: Vec<Campaign>,
    pub state: ListState,
    pub title: String,
}

impl CampaignListPanel {
    pub fn new(title: String) -> Self {
        Self {
            campaigns: Vec::new(),
            state: ListState::default(),
            title,
        }
    }

    pub fn selected(&self) -> Option<&Campaign> {
        self.state.selected().and_then(|i| self.campaigns.get(i))
    }

    pub fn select_next(&mut self) {
        if self.campaigns.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.campaigns.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.campaigns.is_empty() {
            return;
        }
        let prev = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(prev));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let max_title_len = (area.width as usize).saturating_sub(8);

        let items: Vec<ListItem> = self
            .campaigns
            .iter()
            .map(|c| {
                let stage = workflow::stage_for(Some(c)).stage;
                let marker = format!("{stage}/5");

                let title = if c.title.chars().count() > max_title_len {
                    let truncated: String = c.title.chars().take(max_title_len.saturating_sub(1)).collect();
                    format!("{truncated}…")
                } else {
                    c.title.clone()
                };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{marker} "),
                            Style::default().fg(stage_color(stage)),
                        ),
                        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(&c.brand, Style::default().fg(Color::Gray)),
                        Span::raw(" "),
                        Span::styled(c.status.as_str(), Style::default().fg(Color::DarkGray)),
                    ]),
                ])
            })
            .collect();

        let title = format!("{} ({})", self.title, self.campaigns.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

/// Renders the derived workflow for the selected campaign: stage title and
/// description, progress gauge and the five milestone steps.
pub struct WorkflowPanel;

impl WorkflowPanel {
    pub fn render(frame: &mut Frame, area: Rect, campaign: Option<&Campaign>) {
        let stage: WorkflowStage = workflow::stage_for(campaign);
        let steps = workflow::workflow_steps(stage.stage);

        let block = Block::default().title("진행 단계").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if campaign.is_none() {
            let empty = Paragraph::new(Span::styled(
                "캠페인을 선택하세요",
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(empty, inner);
            return;
        }

        let rows = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                ratatui::layout::Constraint::Length(1), // title
                ratatui::layout::Constraint::Length(1), // description
                ratatui::layout::Constraint::Length(1), // gauge
                ratatui::layout::Constraint::Length(1), // steps
                ratatui::layout::Constraint::Min(0),
            ])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            stage.title,
            Style::default()
                .fg(stage_color(stage.stage))
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, rows[0]);

        let description = Paragraph::new(Span::styled(
            stage.description,
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(description, rows[1]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(stage_color(stage.stage)))
            .percent(u16::from(stage.progress))
            .label(format!("{}%", stage.progress));
        frame.render_widget(gauge, rows[2]);

        frame.render_widget(Paragraph::new(Self::steps_line(&steps)), rows[3]);
    }

    fn steps_line(steps: &[WorkflowStep; 5]) -> Line<'static> {
        let mut spans = Vec::new();
        for step in steps {
            let (glyph, style) = if step.completed {
                ("✓", Style::default().fg(Color::Green))
            } else if step.current {
                ("●", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(format!("{glyph} "), style));
            spans.push(Span::styled(format!("{} ", step.title), style));
            if step.id < 5 {
                spans.push(Span::styled("─ ", Style::default().fg(Color::DarkGray)));
            }
        }
        Line::from(spans)
    }
}

/// Tab strip with gated tabs dimmed.
pub struct TabBar;

impl TabBar {
    pub fn render(frame: &mut Frame, area: Rect, active_tab: &str, stage: u8) {
        let titles: Vec<Line> = workflow::ALL_TABS
            .iter()
            .map(|name| {
                let enabled = workflow::tab_enabled(name, stage);
                let style = if !enabled {
                    Style::default().fg(Color::DarkGray)
                } else if *name == active_tab {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(*name, style))
            })
            .collect();

        let selected = workflow::ALL_TABS
            .iter()
            .position(|name| *name == active_tab)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .block(Block::default().borders(Borders::ALL))
            .divider("│");

        frame.render_widget(tabs, area);
    }
}

pub struct HeaderBar {
    pub version: &'static str,
}

impl HeaderBar {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let content = Line::from(vec![
            Span::styled(
                " Campdeck",
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" v{}", self.version),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                "  한→중 인플루언서 캠페인 대시보드",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let bar = Paragraph::new(content).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(bar, area);
    }
}

pub struct StatusBar {
    pub campaign_count: usize,
    pub active_count: usize,
    pub recent_count: usize,
}

impl StatusBar {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let counts = Span::styled(
            format!(
                " {}/{} active │ {} recent",
                self.active_count, self.campaign_count, self.recent_count
            ),
            Style::default().fg(Color::Gray),
        );

        let help = Span::styled(
            "  [↑↓] select  [←→/Tab] tabs  [s] advance status  [r] reload  [q] quit",
            Style::default().fg(Color::DarkGray),
        );

        let bar = Paragraph::new(Line::from(vec![counts, help]))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(bar, area);
    }
}
