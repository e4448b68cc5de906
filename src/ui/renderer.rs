//! Terminal lifecycle and the main event loop

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io;

use super::app_component::AppComponent;
use super::core::{Component, EventHandler, EventType};
use crate::config::Config;

/// Run the TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config);
    let mut event_handler = EventHandler::new();

    log::info!("droplist started");
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore the terminal even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Draw-on-demand event loop
async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                let action = app.handle_key_events(key);
                app.apply_action(action);
                needs_render = true;
            }
            EventType::Mouse(mouse) => {
                app.handle_mouse_event(mouse);
                needs_render = true;
            }
            EventType::Resize(width, height) => {
                app.set_area(Rect::new(0, 0, width, height));
                needs_render = true;
            }
            EventType::Tick | EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    log::info!("droplist exiting");
    Ok(())
}
