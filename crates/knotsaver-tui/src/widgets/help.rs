use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the key reference overlay centred on the screen
    pub fn render(frame: &mut Frame, app: &App) {
        let rows = help_rows(app);
        let area = frame.area();

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.status_bg));

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(key, label)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<10}", key),
                        Style::default()
                            .fg(app.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(label, Style::default().fg(app.theme.muted)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Key column and description for each help row
fn help_rows(app: &App) -> Vec<(String, String)> {
    let keys = &app.key_labels;
    let mut rows = vec![
        (keys.toggle_help.clone(), "Show Help".to_string()),
        (keys.reset.clone(), "Restart".to_string()),
        (keys.toggle_pause.clone(), "Pause/Play".to_string()),
        (keys.increase_steps.clone(), "More points".to_string()),
        (keys.decrease_steps.clone(), "Less points".to_string()),
        (keys.quit.clone(), "Quit".to_string()),
        ("click".to_string(), "Add control point".to_string()),
        (String::new(), String::new()),
    ];
    rows.push((app.state.steps().to_string(), "Current points".to_string()));
    rows
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
