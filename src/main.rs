// canspy: live CAN bus frame monitor for a serial bridge

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use canspy::config::Config;
use canspy::logging;
use canspy::monitor::Monitor;
use canspy::source::{LineSource, ReaderLineSource, SerialLineSource};
use canspy::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let log_guard = logging::init(&config.log_file, &config.log_level)?;
    info!(?config, "starting");

    // Open the source before touching the terminal so errors print normally
    let source: Box<dyn LineSource> = match &config.replay {
        Some(path) => Box::new(ReaderLineSource::open(path)?),
        None => match SerialLineSource::open(config.serial_settings()) {
            Ok(source) => Box::new(source),
            Err(e) => {
                eprintln!("Error: cannot open {}: {}", config.port, e);
                drop(log_guard);
                std::process::exit(1);
            }
        },
    };

    let monitor = Monitor::new(source);
    let mut app = App::new(monitor, config.render_options(), config.poll_interval());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Close the port and flush logs before reporting
    drop(app);
    drop(log_guard);

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
