// Bid Ledger dashboard - load, inspect and sort the ledger interactively

use anyhow::Result;
use bid_ledger::{load_bids, quick_sort, selection_sort, Bid, CsvSource};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// Outcome of the most recent menu action, shown in the status bar.
pub struct ActionReport {
    pub label: &'static str,
    pub count: usize,
    pub elapsed: Duration,
}

pub struct App {
    pub csv_path: String,
    pub bids: Vec<Bid>,
    pub state: TableState,
    pub last_action: Option<ActionReport>,
    pub notice: Option<String>,
}

impl App {
    pub fn new(csv_path: String) -> Self {
        Self {
            csv_path,
            bids: Vec::new(),
            state: TableState::default(),
            last_action: None,
            notice: None,
        }
    }

    /// Menu 1: load bids from the CSV. A partial load keeps whatever rows
    /// made it in and surfaces the error in the notice line.
    pub fn load(&mut self) {
        let start = Instant::now();

        let outcome = match CsvSource::from_path(Path::new(&self.csv_path)) {
            Ok(source) => load_bids(&source),
            Err(e) => {
                self.notice = Some(format!("{:#}", e));
                return;
            }
        };

        self.bids = outcome.bids;
        self.notice = outcome
            .error
            .map(|e| format!("Load stopped early: {:#}", e));
        self.last_action = Some(ActionReport {
            label: "Load Bids",
            count: self.bids.len(),
            elapsed: start.elapsed(),
        });
        self.state
            .select(if self.bids.is_empty() { None } else { Some(0) });
    }

    /// Menu 3: selection sort all bids by title.
    pub fn sort_selection(&mut self) {
        self.run_sort("Selection Sort", selection_sort);
    }

    /// Menu 4: quick sort all bids by title.
    pub fn sort_quick(&mut self) {
        self.run_sort("Quick Sort", quick_sort);
    }

    fn run_sort(&mut self, label: &'static str, engine: fn(&mut [Bid])) {
        if self.bids.is_empty() {
            self.notice = Some("No bids loaded. Press 1 to load bids first.".to_string());
            return;
        }

        let start = Instant::now();
        engine(&mut self.bids);
        self.last_action = Some(ActionReport {
            label,
            count: self.bids.len(),
            elapsed: start.elapsed(),
        });
        self.notice = None;
        self.state.select(Some(0));
    }

    pub fn next(&mut self) {
        let len = self.bids.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.bids.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.bids.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 20).min(len - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(20),
            None => 0,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('1') => app.load(),
                KeyCode::Char('3') => app.sort_selection(),
                KeyCode::Char('4') => app.sort_quick(),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Home => app.state.select(Some(0)),
                KeyCode::End => {
                    if !app.bids.is_empty() {
                        app.state.select(Some(app.bids.len() - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Bid table
            Constraint::Length(4), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_table(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            "Bid Ledger",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Loaded bids: {}", app.bids.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("CSV: {}", app.csv_path),
            Style::default().fg(Color::White),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Auction ID", "Title", "Winning Bid", "Fund"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        });
    let header = Row::new(header_cells).height(1);

    let rows = app.bids.iter().map(|bid| {
        Row::new(vec![
            Cell::from(bid.bid_id.clone()),
            Cell::from(bid.title.clone()),
            Cell::from(format!("${:.2}", bid.amount)),
            Cell::from(bid.fund.clone()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Percentage(50),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Bids "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let action_line = match &app.last_action {
        Some(report) => Line::from(vec![
            Span::styled(report.label, Style::default().fg(Color::Green)),
            Span::raw(format!(
                ": {} bids in {} microseconds ({:.3} s)",
                report.count,
                report.elapsed.as_micros(),
                report.elapsed.as_secs_f64()
            )),
        ]),
        None => Line::from(Span::styled(
            "No action yet",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let second_line = match &app.notice {
        Some(notice) => Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "1 load | 3 selection sort | 4 quick sort | ↑/↓ navigate | q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let status = Paragraph::new(vec![action_line, second_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(status, area);
}
