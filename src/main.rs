mod app;
mod catalog;
mod config;
mod event;
mod session;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use app::{App, AppScreen};
use catalog::Language;
use event::{AppEvent, EventHandler};
use session::countdown::SELECTION_SECS;
use ui::components::countdown_bar::CountdownBar;
use ui::components::subtopic_list::SubtopicList;
use ui::components::topic_card::TopicCard;
use ui::layout::PickerLayout;

rust_i18n::i18n!("locales", fallback = "en");

#[derive(Parser)]
#[command(name = "aihe", version, about = "Terminal conversation topic picker")]
struct Cli {
    #[arg(short, long, help = "Interface and catalog language (en, fi)")]
    language: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(code) = cli.language {
        let language = Language::from_code(&code)?;
        app.set_language(language);
    }
    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
            app.config.theme = theme_name;
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(200));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            AppEvent::Tick => app.pump_timer(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Picker => handle_picker_key(app, key),
        AppScreen::Settings => handle_settings_key(app, key),
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Char('r') => app.outside_interaction(),
        KeyCode::Char('c') => app.go_to_settings(),
        KeyCode::Char(ch @ '1'..='5') => {
            app.activate_card(ch as usize - '1' as usize);
        }
        KeyCode::Left | KeyCode::Char('h') => app.prev_card(),
        KeyCode::Right | KeyCode::Char('l') => app.next_card(),
        KeyCode::Enter => app.activate_focused_card(),
        KeyCode::Down | KeyCode::Char('j') => app.next_subtopic(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_subtopic(),
        KeyCode::Char(' ') => app.activate_focused_subtopic(),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.leave_settings(),
        KeyCode::Up | KeyCode::Char('k') => {
            if app.settings_selected > 0 {
                app.settings_selected -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.settings_selected < 1 {
                app.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            app.settings_cycle_forward();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.settings_cycle_backward();
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.screen != AppScreen::Picker {
        return;
    }

    let layout = PickerLayout::new(area, app.session.displayed.len());

    if let Some(index) = layout.card_hit(mouse.column, mouse.row) {
        app.activate_card(index);
        return;
    }

    if app.session.subtopics_expanded {
        if let Some(topic) = app.session.selected_topic() {
            if let Some(index) = layout.subtopic_hit(topic.subtopics.len(), mouse.column, mouse.row)
            {
                app.activate_subtopic(index);
                return;
            }
        }
    }

    // Anything not on a card or subtopic row counts as an outside click.
    app.outside_interaction();
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(app.theme.colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Picker => render_picker(frame, app),
        AppScreen::Settings => render_settings(frame, app),
    }
}

fn render_picker(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let session = &app.session;

    let layout = PickerLayout::new(area, session.displayed.len());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", t!("app_title")),
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} | {}", t!("app_subtitle"), session.language.label()),
            Style::default()
                .fg(colors.text_dim())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    for (i, (topic, rect)) in session
        .displayed
        .iter()
        .zip(layout.cards.iter())
        .enumerate()
    {
        let card = TopicCard {
            topic,
            key_hint: i + 1,
            focused: i == app.focused_card,
            selected: session.selected.as_deref() == Some(topic.name.as_str())
                && session.timer_running(),
            theme: app.theme,
        };
        frame.render_widget(card, *rect);
    }

    let heading = match session.selected_topic() {
        Some(topic) if session.timer_running() => Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {}: ", t!("selected_topic")),
                Style::default().fg(colors.text_dim()),
            ),
            Span::styled(
                topic.name.clone(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        _ => Paragraph::new(Line::from(Span::styled(
            format!(" {}", t!("choose_topic")),
            Style::default().fg(colors.fg()),
        ))),
    };
    frame.render_widget(heading, layout.heading);

    if session.subtopics_expanded {
        if let Some(topic) = session.selected_topic() {
            let list = SubtopicList {
                title: t!("subtopics").to_string(),
                subtopics: &topic.subtopics,
                focused: app.focused_subtopic,
                selected: session.selected_subtopic.as_deref(),
                theme: app.theme,
            };
            frame.render_widget(list, layout.subtopics);
        }
    }

    if session.timer_running() {
        let bar = CountdownBar {
            label: t!("time_left").to_string(),
            seconds_remaining: session.seconds_remaining,
            total_seconds: SELECTION_SECS,
            theme: app.theme,
        };
        frame.render_widget(bar, layout.countdown);
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", t!("footer_picker")),
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn render_settings(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let centered = ui::layout::centered_rect(60, 60, area);

    let block = Block::bordered()
        .title(format!(" {} ", t!("settings")))
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let fields: Vec<(String, String)> = vec![
        (
            t!("language").to_string(),
            app.session.language.label().to_string(),
        ),
        (t!("theme").to_string(), app.config.theme.clone()),
    ];

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(fields.len() as u16 * 3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        format!("  {}", t!("settings_hint")),
        Style::default().fg(colors.text_dim()),
    )));
    header.render(layout[0], frame.buffer_mut());

    let field_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(3))
                .collect::<Vec<_>>(),
        )
        .split(layout[1]);

    for (i, (label, value)) in fields.iter().enumerate() {
        let is_selected = i == app.settings_selected;
        let indicator = if is_selected { " > " } else { "   " };

        let label_text = format!("{indicator}{label}:");
        let value_text = format!("  < {value} >");

        let label_style = Style::default()
            .fg(if is_selected {
                colors.accent()
            } else {
                colors.fg()
            })
            .add_modifier(if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });

        let value_style = Style::default().fg(if is_selected {
            colors.accent()
        } else {
            colors.text_dim()
        });

        let lines = vec![
            Line::from(Span::styled(label_text, label_style)),
            Line::from(Span::styled(value_text, value_style)),
        ];
        Paragraph::new(lines).render(field_layout[i], frame.buffer_mut());
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        format!("  {}", t!("footer_settings")),
        Style::default().fg(colors.accent()),
    )));
    footer.render(layout[3], frame.buffer_mut());
}
