mod canvas_view;
mod help;
mod status_bar;

pub use canvas_view::KnotCanvasWidget;
pub use help::HelpWidget;
pub use status_bar::StatusBarWidget;
