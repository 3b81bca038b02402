use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status_text = status_text(app);
        let help_hint = help_hint(app);

        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(app.theme.foreground)
                    .bg(app.theme.status_bg),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.status_bg),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.muted).bg(app.theme.status_bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn help_hint(app: &App) -> String {
    format!(
        " {}:help {}:quit ",
        app.key_labels.toggle_help, app.key_labels.quit
    )
}

fn status_text(app: &App) -> String {
    let mode = if app.state.is_paused() { "PAUSED" } else { "RUNNING" };
    format!(
        " {} | Steps: {} | Points: {}",
        mode,
        app.state.steps(),
        app.state.polyline().len()
    )
}
