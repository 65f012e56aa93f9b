use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::actions::{
    ActionDispatcher, AssetAction, Notice, NoticeKind, SystemBrowser, SystemClipboard,
    available_actions,
};
use crate::catalog::Catalog;
use crate::context::CatalogContext;
use crate::model::AssetRecord;
use crate::session::{CatalogSession, LoadOutcome};
use crate::tui::TuiRunOptions;
use crate::view::{CatalogView, Selection, ViewQuery, view};

use super::input::Input;
use super::rows::{clamp_selected, cycle_selection};
use super::worker::{AppEvent, ChannelNotifier, spawn_action, spawn_load};

mod actions;
mod event_loop;
mod render;

const NOTICES_KEPT: usize = 20;

pub(super) fn run(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let ctx = CatalogContext::open(opts.config.as_deref(), &opts.overrides)
        .context("resolve configuration")?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(ctx);
    app.reload();
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    ctx: CatalogContext,
    session: CatalogSession,
    catalog: Arc<Catalog>,

    selection: Selection,
    search: Input,
    searching: bool,
    /// Index into the flattened records of the current view.
    selected: usize,

    notices: Vec<Notice>,
    pending_actions: usize,

    // Kept open for the whole session so copied text outlives worker threads.
    clipboard: SystemClipboard,

    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
    quit: bool,
}

impl App {
    fn new(ctx: CatalogContext) -> Self {
        let session = CatalogSession::new(ctx.priority());
        let catalog = session.catalog();
        let mut clipboard = SystemClipboard::new();
        if let Err(err) = clipboard.ensure_open() {
            tracing::warn!(error = %err, "clipboard unavailable");
        }
        let (tx, rx) = mpsc::channel();
        Self {
            ctx,
            session,
            catalog,
            selection: Selection::All,
            search: Input::default(),
            searching: false,
            selected: 0,
            notices: Vec::new(),
            pending_actions: 0,
            clipboard,
            tx,
            rx,
            quit: false,
        }
    }

    fn query(&self) -> ViewQuery {
        ViewQuery {
            selection: self.selection.clone(),
            search: self.search.trimmed().map(str::to_string),
        }
    }

    fn current_view(&self) -> CatalogView<'_> {
        view(
            &self.catalog,
            self.session.priority(),
            self.ctx.variant(),
            &self.query(),
        )
    }

    fn selected_record(&self) -> Option<AssetRecord> {
        let v = self.current_view();
        v.flat().get(self.selected).map(|r| (*r).clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.current_view().record_count();
        self.selected = clamp_selected(self.selected, len);
    }

    fn move_by(&mut self, delta: isize) {
        let len = self.current_view().record_count();
        let next = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta as usize)
        };
        self.selected = clamp_selected(next, len);
    }

    fn move_to_end(&mut self) {
        let len = self.current_view().record_count();
        self.selected = len.saturating_sub(1);
    }

    fn cycle_category(&mut self, forward: bool) {
        if !self.ctx.variant().has_category_filter {
            return;
        }
        let next = cycle_selection(&self.current_view().choices, forward);
        self.selection = next;
        self.selected = 0;
    }

    fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    fn reload(&mut self) {
        let ticket = self.session.begin_load();
        tracing::info!(generation = ticket.generation(), "reload started");
        spawn_load(
            self.ctx.client.clone(),
            self.ctx.manifest_url(),
            self.ctx.variant().vector_capable,
            ticket,
            self.tx.clone(),
        );
    }

    fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
        if self.notices.len() > NOTICES_KEPT {
            let excess = self.notices.len() - NOTICES_KEPT;
            self.notices.drain(..excess);
        }
    }

    fn drain_events(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.handle_event(ev);
        }
    }

    fn handle_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::Loaded { ticket, result } => match self.session.complete(ticket, result) {
                LoadOutcome::Applied { records } => {
                    self.catalog = self.session.catalog();
                    self.clamp_selection();
                    tracing::info!(records, "catalog replaced");
                }
                LoadOutcome::Failed(err) => {
                    tracing::warn!(error = %err, "load failed");
                    self.push_notice(Notice::new(
                        NoticeKind::Failure,
                        "Error loading assets",
                        "Check your internet connection and repository URL",
                    ));
                }
                LoadOutcome::Stale => {}
            },
            AppEvent::Notice(notice) => self.push_notice(notice),
            AppEvent::ActionFinished => {
                self.pending_actions = self.pending_actions.saturating_sub(1);
            }
        }
    }
}
