use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use imagemap::app::App;
use imagemap::config;
use imagemap::document::MapDocument;
use imagemap::geometry::Point;

/// Interactive image map explorer
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Explore image map hot-spots in the terminal with mouse and keyboard"
)]
struct Args {
    /// Map document (TOML)
    file: PathBuf,

    /// Print the areas in storage order and exit
    #[arg(long)]
    list: bool,

    /// Print the area at an image point and exit
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    hit: Option<Point>,
}

fn parse_point(text: &str) -> Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {:?}", text))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate {:?}: {}", s.trim(), e))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

fn main() -> Result<()> {
    // Writes to /tmp/imagemap-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/imagemap-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== IMAGEMAP DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let document = MapDocument::load(&args.file)?;
    let mut map = document.to_map()?;

    if args.list {
        for (index, area) in map.areas().iter().enumerate() {
            println!("{}: {}", index, area);
        }
        return Ok(());
    }

    if let Some(point) = args.hit {
        match map.resolve(point) {
            Some(index) => {
                let area = map.areas().get(index).map(ToString::to_string);
                println!("{}: {}", index, area.unwrap_or_default());
            }
            None => println!("No area at {}", point),
        }
        return Ok(());
    }

    let title = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut app = App::new(map, &title, &config_result.config);
    app.warning = config_result.warning;

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== IMAGEMAP DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, mouse capture and
/// focus reporting
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("10,20"), Ok(Point::new(10, 20)));
        assert_eq!(parse_point(" -3 , 4 "), Ok(Point::new(-3, 4)));
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
    }
}
