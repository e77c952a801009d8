use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Paragraph},
    Terminal,
};
use tokio::sync::mpsc;

use termfolio_core::prefs::FilePreferenceStore;
use termfolio_core::relay::RelayClient;
use termfolio_core::{AppConfig, Portfolio, ThemeController};
use termfolio_tui::{
    app::{App, Mode, NoticeKind, RippleHost},
    event::{AppEvent, EventHandler, SendResult},
    input::{handle_key_event, Action},
    keymap::Keymap,
    layout::{build_document, Document, SectionId},
    scroll::ScrollConfigExt,
    widgets::{
        loader::LoaderWidget, modal::ModalWidget, navbar::NavbarWidget,
        notification::NotificationWidget, status_bar::StatusBarWidget,
    },
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Termfolio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Portfolio content and the persisted theme preference
    let portfolio = Portfolio::load_or_sample(&AppConfig::portfolio_path());
    let prefs_dir = AppConfig::prefs_path()
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let theme_controller = ThemeController::load(Box::new(FilePreferenceStore::new(prefs_dir)));

    let relay = Arc::new(RelayClient::new(config.relay.clone())?);

    let mut app = App::new(
        config.clone(),
        portfolio,
        theme_controller,
        Instant::now(),
    );

    // Event handler polls faster while animations are in flight
    let animation_tick_ms = config.ui.scroll.animation_tick_duration().as_millis() as u64;
    let event_handler = EventHandler::new(config.ui.tick_rate_ms, animation_tick_ms);

    // Channel for async relay delivery results
    let (send_tx, mut send_rx) = mpsc::unbounded_channel::<SendResult>();

    // Checked at the END of each iteration to pick the NEXT tick rate
    let mut needs_fast_update = true;

    loop {
        let now = Instant::now();
        app.tick(now);

        // Process any completed relay deliveries (non-blocking)
        while let Ok(result) = send_rx.try_recv() {
            match result {
                SendResult::Success => app.on_send_result(Ok(()), now),
                SendResult::Failure { error } => app.on_send_result(Err(error), now),
            }
        }

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: navbar + content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);
            let content = main_layout[1];
            app.viewport_height = content.height;
            app.last_layout_width = content.width;

            // Lay the document out for this width, advance the scroll
            // animation and run the scroll-path effects
            let doc = build_document(&app, content.width);
            let offset = app.scroll.update(doc.max_scroll(content.height));
            app.on_frame(offset, &doc, now);

            frame.render_widget(
                Block::default().style(Style::default().bg(app.theme.bg0)),
                size,
            );
            frame.render_widget(
                Paragraph::new(doc.lines.clone())
                    .style(Style::default().bg(app.theme.bg0))
                    .scroll((offset, 0)),
                content,
            );

            NavbarWidget::render(frame, main_layout[0], &app);
            let percent = scroll_percent(offset, &doc, content.height);
            StatusBarWidget::render(frame, main_layout[2], &app, percent);

            if let Mode::Modal(index) = app.mode {
                ModalWidget::render(frame, &app, index);
            }
            NotificationWidget::render(frame, &app);
            LoaderWidget::render(frame, &app);
        })?;

        // Handle events (use faster tick rate during animations)
        if let Some(event) = event_handler.next(needs_fast_update)? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action, &relay, &send_tx);
                }
                AppEvent::Resize(_, _) => {
                    // The document is rebuilt per frame; nothing to invalidate
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn scroll_percent(offset: u16, doc: &Document, viewport_height: u16) -> u8 {
    let max = doc.max_scroll(viewport_height);
    if max == 0 {
        100
    } else {
        (u32::from(offset) * 100 / u32::from(max)).min(100) as u8
    }
}

/// Apply one input action to the app state
fn handle_action(
    app: &mut App,
    action: Action,
    relay: &Arc<RelayClient>,
    send_tx: &mpsc::UnboundedSender<SendResult>,
) {
    let now = Instant::now();

    // Any action other than the 'g' prefix clears the pending sequence
    if action != Action::PendingG {
        app.pending_key = None;
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::PendingG => app.pending_key = Some('g'),

        Action::ScrollDown => scroll_with(app, |app, max| app.scroll.scroll_down(max)),
        Action::ScrollUp => scroll_with(app, |app, max| app.scroll.scroll_up(max)),
        Action::ScrollHalfPageDown => {
            let h = app.viewport_height;
            scroll_with(app, |app, max| app.scroll.scroll_half_page_down(h, max));
        }
        Action::ScrollHalfPageUp => {
            let h = app.viewport_height;
            scroll_with(app, |app, max| app.scroll.scroll_half_page_up(h, max));
        }
        Action::ScrollPageDown => {
            let h = app.viewport_height;
            scroll_with(app, |app, max| app.scroll.scroll_full_page_down(h, max));
        }
        Action::ScrollPageUp => {
            let h = app.viewport_height;
            scroll_with(app, |app, max| app.scroll.scroll_full_page_up(h, max));
        }
        Action::JumpToTop | Action::ScrollToTop => {
            if action == Action::ScrollToTop {
                app.spawn_ripple(RippleHost::ToTop, now);
            }
            scroll_with(app, |app, max| app.scroll.scroll_to(0, max));
        }
        Action::JumpToBottom => scroll_with(app, |app, max| app.scroll.scroll_to(max, max)),

        Action::NextSection => jump_section(app, 1, now),
        Action::PrevSection => jump_section(app, -1, now),
        Action::GoToSection(id) => {
            app.spawn_ripple(RippleHost::NavLink(id), now);
            scroll_to_section(app, id);
        }

        Action::ToggleTheme => app.toggle_theme(),
        Action::OpenContactForm => {
            app.mode = Mode::ContactForm;
            scroll_to_section(app, SectionId::Contact);
        }
        Action::ComposeEmail => {
            let channel = app.config.contact.preferred_channel;
            let url = channel.compose_url(&app.portfolio.contact.email, "Hello from termfolio");
            app.open_url(&url, now);
        }

        Action::Select => match app.active_section() {
            SectionId::Projects => {
                app.spawn_ripple(RippleHost::ProjectCard(app.focused_project), now);
                app.mode = Mode::Modal(app.focused_project);
            }
            SectionId::Contact => {
                app.mode = Mode::ContactForm;
            }
            _ => {}
        },
        Action::NextItem => app.focus_next_project(),
        Action::PrevItem => app.focus_prev_project(),

        // Contact form
        Action::InputChar(c) => {
            let field = app.form.focus;
            app.form.value_mut(field).push(c);
        }
        Action::Backspace => {
            let field = app.form.focus;
            app.form.value_mut(field).pop();
        }
        Action::NextField => app.form.focus_next(),
        Action::PrevField => app.form.focus_prev(),
        Action::Submit => {
            app.spawn_ripple(RippleHost::Submit, now);
            if let Some(message) = app.submit_form() {
                if relay.is_configured() {
                    let relay = relay.clone();
                    let tx = send_tx.clone();
                    tokio::spawn(async move {
                        let result = match relay.send(&message).await {
                            Ok(()) => SendResult::Success,
                            Err(e) => SendResult::Failure {
                                error: e.to_string(),
                            },
                        };
                        let _ = tx.send(result);
                    });
                } else {
                    app.on_send_result(
                        Err("email relay is not configured".to_string()),
                        now,
                    );
                }
            }
        }

        // Project popup
        Action::OpenDemo => {
            if let Mode::Modal(index) = app.mode {
                if let Some(url) = app
                    .portfolio
                    .projects
                    .get(index)
                    .and_then(|p| p.demo_url.clone())
                {
                    app.open_url(&url, now);
                } else {
                    app.notify("No demo link for this project", NoticeKind::Info, now);
                }
            }
        }
        Action::OpenRepo => {
            if let Mode::Modal(index) = app.mode {
                if let Some(url) = app
                    .portfolio
                    .projects
                    .get(index)
                    .and_then(|p| p.repo_url.clone())
                {
                    app.open_url(&url, now);
                } else {
                    app.notify("No repository link for this project", NoticeKind::Info, now);
                }
            }
        }

        Action::ExitMode => app.mode = Mode::Normal,
        Action::None => {}
    }

    // Keep the popup pointed at the focused card while switching
    if let Mode::Modal(_) = app.mode {
        if matches!(action, Action::NextItem | Action::PrevItem) {
            app.mode = Mode::Modal(app.focused_project);
        }
    }
}

/// Run a scroll mutation against the current document's max offset
fn scroll_with<F: FnOnce(&mut App, u16)>(app: &mut App, f: F) {
    let doc = build_document(app, last_width(app));
    let max = doc.max_scroll(app.viewport_height);
    f(app, max);
}

fn jump_section(app: &mut App, step: i32, now: Instant) {
    let current = app.active_section().index() as i32;
    let len = SectionId::ALL.len() as i32;
    let next = (current + step).rem_euclid(len) as usize;
    let id = SectionId::ALL[next];
    app.spawn_ripple(RippleHost::NavLink(id), now);
    scroll_to_section(app, id);
}

fn scroll_to_section(app: &mut App, id: SectionId) {
    let doc = build_document(app, last_width(app));
    let max = doc.max_scroll(app.viewport_height);
    app.scroll.scroll_to(doc.section_top(id), max);
}

fn last_width(app: &App) -> u16 {
    // Section tops only depend on width through text wrapping; the
    // next frame re-resolves against the real width anyway
    app.last_layout_width.max(40)
}
