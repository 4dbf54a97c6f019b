//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and animation ticks.
//! - Route input to `MainView` and apply the `Effect`s it returns.
//!
//! Ticking strategy
//! - A dedicated input task polls `crossterm` and forwards events over a
//!   channel.
//! - The ticker runs at a frame-ish interval (33 ms) only while a dropdown
//!   transition or height animation is in flight; otherwise it idles at 5 s.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dropnav_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

const FAST_INTERVAL: Duration = Duration::from_millis(33);
const IDLE_INTERVAL: Duration = Duration::from_millis(5000);

/// Spawn an input task that polls terminal input and forwards `crossterm`
/// events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(poll_interval) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                }
                Ok(true) => match event::read() {
                    Ok(event) => {
                        // Throttle mouse move events to once per poll interval.
                        let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                        if is_mouse_move {
                            if last_mouse_move.elapsed() < poll_interval {
                                continue;
                            }
                            last_mouse_move = Instant::now();
                        }
                        if let Err(e) = sender.blocking_send(event) {
                            debug!("Input receiver dropped: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read event: {}", e);
                        break;
                    }
                },
                Err(e) => {
                    warn!("Failed to poll events: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, main_view: &mut MainView) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

fn apply_effects(app: &mut App, effects: Vec<Effect>) {
    let now = Instant::now();
    for effect in effects {
        app.apply_effect(effect, now);
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the input
/// task, runs the event loop, and restores the terminal on exit.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut current_interval = IDLE_INTERVAL;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    while !app.should_quit {
        // Sampled before the tick so the frame that completes an animation
        // still gets drawn.
        let needs_animation = app.is_animating(Instant::now());
        let target_interval = if needs_animation { FAST_INTERVAL } else { IDLE_INTERVAL };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(app, main_view, event);
                apply_effects(app, effects);
                needs_render = true;
            }

            _ = ticker.tick() => {
                let effects = main_view.handle_message(app, &Msg::Tick);
                needs_render = needs_animation || !effects.is_empty();
                apply_effects(app, effects);
            }

            _ = signal::ctrl_c() => { break; }
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}
