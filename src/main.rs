use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use todo_tui::config::{Config, default_config_path, load_config};
use todo_tui::error::Result;
use todo_tui::logging;
use todo_tui::ui::view::semantics::Screen;
use todo_tui::ui::{TodoList, handle_key_event, handle_mouse_event, render};

/// 终端待办列表
#[derive(Parser)]
#[command(name = "todo-tui", version)]
#[command(about = "A small to-do list in the terminal")]
struct Cli {
    /// 配置文件路径，默认 ~/.config/todo-tui/config.toml
    #[arg(short, long, env = "TODO_TUI_CONFIG")]
    config: Option<PathBuf>,

    /// 日志文件路径，默认 ~/.local/share/todo-tui/todo-tui.log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.or_else(default_config_path) {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };

    let log_path = match cli.log_file {
        Some(path) => path,
        None => logging::default_log_path()?,
    };
    logging::init(&log_path, config.log_level()?)?;

    let mut app = TodoList::with_state(config.labels(), config.initial_items(), "");
    tracing::info!(items = app.items().len(), "starting");

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    tracing::info!(items = app.items().len(), "exiting");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut TodoList) -> Result<()> {
    loop {
        let mut screen = Screen::default();
        terminal.draw(|f| screen = render(f, app))?;

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key.code),
            Event::Mouse(mouse) => handle_mouse_event(app, &screen, mouse),
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
