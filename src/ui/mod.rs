//! Terminal UI: component tree, layout, and the render loop.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;

use crate::api::ApiClient;
use crate::config::Config;
use app::AppComponent;
use core::{EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Run the composer UI until the user quits. Owns terminal setup and
/// teardown; panics and errors both restore the terminal.
pub async fn run_app(config: Config, api: ApiClient) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(api, &config);
    let mut event_handler = EventHandler::new();

    app.trigger_startup_fetch();

    let result = run_loop(&mut terminal, &mut app, &mut event_handler).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;
    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
        }

        let event = event_handler.next_event().await?;
        // Idle ticks with no background work pending do not dirty the frame
        needs_render = !matches!(event, EventType::Tick) || app.active_task_count() > 0 || app.banner_visible();
        app.handle_event(event).await?;

        if app.should_quit() {
            return Ok(());
        }
    }
}
