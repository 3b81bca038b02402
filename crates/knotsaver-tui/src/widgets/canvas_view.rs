use knotsaver_core::draw::{DrawCommand, DrawStyle, Rgb};
use knotsaver_core::Canvas;
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas as CanvasWidget, Circle, Context, Line, Points},
    Frame,
};

use crate::app::App;

pub struct KnotCanvasWidget;

impl KnotCanvasWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let canvas = *app.state.canvas();
        let commands: &[DrawCommand] = app
            .frame
            .as_ref()
            .map(|f| f.commands.as_slice())
            .unwrap_or(&[]);

        let widget = CanvasWidget::default()
            .background_color(app.theme.background)
            .marker(Marker::Braille)
            .x_bounds([0.0, canvas.width])
            .y_bounds([0.0, canvas.height])
            .paint(|ctx| {
                for command in commands {
                    draw_command(ctx, command, &canvas);
                }
            });

        frame.render_widget(widget, area);
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Canvas y grows downward, ratatui's grows upward
fn flip(canvas: &Canvas, x: f64, y: f64) -> (f64, f64) {
    (x, canvas.height - y)
}

fn draw_command(ctx: &mut Context, command: &DrawCommand, canvas: &Canvas) {
    let color = to_color(command.color);
    match command.style {
        DrawStyle::Points => {
            let coords: Vec<(f64, f64)> = command
                .points
                .iter()
                .map(|p| flip(canvas, p.x, p.y))
                .collect();
            for &(x, y) in &coords {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: command.width as f64,
                    color,
                });
            }
            ctx.draw(&Points {
                coords: &coords,
                color,
            });
        }
        DrawStyle::Line => {
            for (a, b) in command.segments() {
                let (x1, y1) = flip(canvas, a.x, a.y);
                let (x2, y2) = flip(canvas, b.x, b.y);
                ctx.draw(&Line::new(x1, y1, x2, y2, color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotsaver_core::animation::FixedVelocity;
    use knotsaver_core::{AppConfig, Vec2d};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::event::AppEvent;
    use crate::theme::Theme;

    #[test]
    fn test_flip() {
        let canvas = Canvas::default();
        assert_eq!(flip(&canvas, 10.0, 0.0), (10.0, 600.0));
        assert_eq!(flip(&canvas, 10.0, 600.0), (10.0, 0.0));
    }

    #[test]
    fn test_renders_curve_cells() {
        let mut app = App::new(&AppConfig::default(), Theme::default()).unwrap();
        let area = Rect::new(0, 0, 40, 20);
        app.set_canvas_area(area);
        let clicks = [
            AppEvent::Click { column: 5, row: 3 },
            AppEvent::Click { column: 35, row: 3 },
            AppEvent::Click { column: 20, row: 17 },
        ];
        app.step(&clicks, &mut FixedVelocity(Vec2d::ZERO));

        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal
            .draw(|frame| KnotCanvasWidget::render(frame, area, &app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let drawn = buffer
            .content()
            .iter()
            .filter(|cell| !matches!(cell.symbol(), " " | "\u{2800}"))
            .count();
        assert!(drawn > 0);
    }
}
