use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::App;
use crate::config::Config;
use crate::document::MapDocument;

/// 40x10 plan with three areas; the left room is owner drawn
pub const PLAN: &str = r#"
width = 40
height = 10
tool_tip = "Plan"

[[area]]
shape = "rect"
coords = "0, 0, 10, 5"
tool_tip = "Hall"
tab_order = 1
access_key = "h"

[[area]]
shape = "rect"
coords = "20, 0, 30, 5"
tool_tip = "Den"
tab_order = 2
access_key = "d"

[[area]]
shape = "rect"
coords = "0, 6, 10, 10"
tool_tip = "Shed"
tab_order = 3
owner_draw = true
"#;

pub fn test_app_with(document: &str, config: &Config) -> App {
    let map = MapDocument::parse(document).unwrap().to_map().unwrap();
    App::new(map, "plan.toml", config)
}

pub fn test_app() -> App {
    let config = Config {
        map: crate::config::MapConfig {
            center_image: false,
            owner_draw: false,
        },
        ..Config::default()
    };
    test_app_with(PLAN, &config)
}

pub fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

/// Render one frame and return the terminal for inspection
pub fn render(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|f| app.render(f)).unwrap();
    terminal
}

pub fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, row)].symbol().to_string())
        .collect()
}
