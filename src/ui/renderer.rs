use crate::api::create_api;
use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{actions::Action, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Set up the terminal, run the event loop until the user quits, then restore
/// the terminal even if the loop failed.
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let api = create_api(&config.api)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(api, &config);
    let mut event_handler = EventHandler::new();

    app.trigger_initial_load();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                app.handle_event(EventType::Key(key));
                needs_render = true;
            }
            EventType::Resize(w, h) => {
                app.handle_event(EventType::Resize(w, h));
                needs_render = true;
            }
            EventType::Tick => {
                // Background results are applied on tick
                for action in app.process_background_actions() {
                    if let Action::Quit = app.dispatch(action) {
                        return Ok(());
                    }
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
