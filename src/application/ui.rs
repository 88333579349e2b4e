use std::io;
use std::path::Path;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::Step;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::uploads;
use crate::domain::services::AppState;
use crate::domain::services::IntakeMode;
use crate::domain::services::Transcript;

fn draw_form<B: Backend>(frame: &mut Frame<B>, app_state: &AppState<'_>) {
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Min(10),
        Constraint::Length(3),
    ];
    if app_state.error_banner.is_some() {
        constraints.insert(1, Constraint::Length(1));
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    frame.render_widget(
        Paragraph::new("Schritt 1: Projektbeschreibung")
            .style(Style::default().add_modifier(Modifier::BOLD)),
        layout[0],
    );

    let mut idx = 1;
    if let Some(banner) = &app_state.error_banner {
        frame.render_widget(
            Paragraph::new(banner.as_str()).style(Style::default().fg(Color::Red)),
            layout[idx],
        );
        idx += 1;
    }

    app_state.intake.render(frame, layout[idx]);
    idx += 1;

    match app_state.intake.mode {
        IntakeMode::PathEntry => {
            app_state.intake.render_path_entry(frame, layout[idx]);
        }
        IntakeMode::Editing => {
            frame.render_widget(
                Paragraph::new(
                    "Tab: Feld wechseln | Strg+O: Datei importieren | Strg+S: Absenden | Strg+C: Beenden",
                )
                .block(Block::default().borders(Borders::ALL)),
                layout[idx],
            );
        }
    }
}

fn draw_missing_form<B: Backend>(frame: &mut Frame<B>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
        .split(frame.size());

    frame.render_widget(
        Paragraph::new("Keine Daten von Schritt 1 vorhanden. Bitte gehen Sie zurück zu Schritt 1.")
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Schritt 2: Analyse und Dialog"),
            ),
        layout[0],
    );
    frame.render_widget(Paragraph::new("Enter: Zurück zu Schritt 1"), layout[1]);
}

fn draw_chat<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState<'_>,
    chat_input: &tui_textarea::TextArea<'_>,
    loading: &Loading,
) {
    if app_state.session.completed_form().is_none() {
        draw_missing_form(frame);
        return;
    }

    let mut constraints = vec![Constraint::Length(1)];
    if app_state.show_context {
        constraints.push(Constraint::Length(14));
    }
    constraints.push(Constraint::Min(1));
    if app_state.error_banner.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Max(4));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    frame.render_widget(
        Paragraph::new("Schritt 2: Analyse und Dialog (Strg+K: Kontext)")
            .style(Style::default().add_modifier(Modifier::BOLD)),
        layout[0],
    );

    let mut idx = 1;
    if app_state.show_context {
        let context = app_state.session.completed_form().unwrap().format_context();
        frame.render_widget(
            Paragraph::new(context).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Kontext aus Schritt 1"),
            ),
            layout[idx],
        );
        idx += 1;
    }

    let transcript_rect = layout[idx];
    if transcript_rect.width != app_state.last_known_width
        || transcript_rect.height != app_state.last_known_height
    {
        app_state.set_rect(transcript_rect);
    }

    let lines = Transcript::lines(
        &app_state.session.messages,
        app_state.stream_buffer.as_ref(),
        app_state.transcript_width(),
    );
    frame.render_widget(
        Paragraph::new(lines).scroll((app_state.scroll.position, 0)),
        transcript_rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        transcript_rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );
    idx += 1;

    if let Some(banner) = &app_state.error_banner {
        frame.render_widget(
            Paragraph::new(banner.as_str()).style(Style::default().fg(Color::Red)),
            layout[idx],
        );
        idx += 1;
    }

    if app_state.waiting_for_backend {
        loading.render(frame, layout[idx]);
    } else {
        frame.render_widget(chat_input.widget(), layout[idx]);
    }
}

async fn import_file(app_state: &mut AppState<'_>) {
    let path = app_state.intake.path();

    match uploads::read_text_file(Path::new(&path)).await {
        Ok(text) => {
            app_state.intake.set_focused_text(&text);
            app_state.error_banner = None;
        }
        Err(err) => {
            app_state.error_banner = Some(err.to_string());
        }
    }

    app_state.intake.cancel_path_entry();
}

async fn handle_form_event(app_state: &mut AppState<'_>, event: Event) -> Result<()> {
    match event {
        Event::KeyboardTab() => {
            app_state.intake.next_field();
        }
        Event::KeyboardBackTab() => {
            app_state.intake.prev_field();
        }
        Event::KeyboardCTRLS() => {
            app_state.error_banner = None;
            let form = app_state.intake.to_form_data();
            app_state.submit_form(form);
        }
        Event::KeyboardCTRLO() => {
            app_state.error_banner = None;
            app_state.intake.begin_path_entry();
        }
        Event::KeyboardEsc() => {
            app_state.intake.cancel_path_entry();
        }
        Event::KeyboardEnter() => {
            if app_state.intake.mode == IntakeMode::PathEntry {
                import_file(app_state).await;
            } else {
                app_state.intake.input(Input {
                    key: Key::Enter,
                    ctrl: false,
                    alt: false,
                });
            }
        }
        Event::KeyboardPaste(text) => {
            app_state.intake.insert_str(&text);
        }
        Event::KeyboardCharInput(input) => {
            app_state.intake.input(input);
        }
        Event::UIScrollUp() => {
            app_state.intake.input(Input {
                key: Key::Up,
                ctrl: false,
                alt: false,
            });
        }
        Event::UIScrollDown() => {
            app_state.intake.input(Input {
                key: Key::Down,
                ctrl: false,
                alt: false,
            });
        }
        _ => {}
    }

    return Ok(());
}

fn handle_chat_event(
    app_state: &mut AppState<'_>,
    chat_input: &mut tui_textarea::TextArea<'_>,
    event: Event,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<()> {
    if app_state.session.completed_form().is_none() {
        if let Event::KeyboardEnter() = event {
            app_state.step = Step::Form;
        }
        return Ok(());
    }

    match event {
        Event::KeyboardEnter() => {
            let input_str = chat_input.lines().join("\n");
            if input_str.trim().is_empty() {
                return Ok(());
            }

            if let Some(prompt) = app_state.begin_turn(&input_str) {
                *chat_input = TextArea::chat_input();
                tx.send(Action::AgentRequest(prompt))?;
            }
        }
        Event::KeyboardCTRLK() => {
            app_state.show_context = !app_state.show_context;
        }
        Event::KeyboardPaste(text) => {
            chat_input.insert_str(&text);
        }
        Event::KeyboardCharInput(input) => {
            chat_input.input(input);
        }
        Event::UIScrollUp() => {
            app_state.scroll.up();
        }
        Event::UIScrollDown() => {
            app_state.scroll.down();
        }
        Event::UIScrollPageUp() => {
            app_state.scroll.up_page();
        }
        Event::UIScrollPageDown() => {
            app_state.scroll.down_page();
        }
        _ => {}
    }

    return Ok(());
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut chat_input = TextArea::chat_input();
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        app_state.intake.insert_str("Beispielprojekt: Lagerverwaltung");
    }

    loop {
        terminal.draw(|frame| match app_state.step {
            Step::Form => draw_form(frame, app_state),
            Step::Chat => draw_chat(frame, app_state, &chat_input, &loading),
        })?;

        match events.next().await? {
            Event::AgentResponse(res) => {
                app_state.handle_agent_response(res);
            }
            Event::AgentError(text) => {
                app_state.handle_agent_error(text);
            }
            Event::UITick() => {}
            Event::UIResize() => {}
            Event::KeyboardCTRLC() => {
                if app_state.waiting_for_backend {
                    tx.send(Action::AgentAbort())?;
                    app_state.abort_turn();
                    continue;
                }
                break;
            }
            event => {
                // Input is ignored while a response is streaming.
                if app_state.waiting_for_backend {
                    continue;
                }

                match app_state.step {
                    Step::Form => handle_form_event(app_state, event).await?,
                    Step::Chat => handle_chat_event(app_state, &mut chat_input, event, &tx)?,
                }
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::new();
    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
