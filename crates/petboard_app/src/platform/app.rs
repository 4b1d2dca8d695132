use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use petboard_core::{update, AppState, Effect, Msg};
use petboard_logging::app_info;

use super::commands::{self, Command, HELP_TEXT};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence::ApiBaseStore;
use super::ui;

const EVENT_POLL: Duration = Duration::from_millis(50);
/// Upper bound on waiting for in-flight calls; reqwest timeouts fire first.
const PENDING_DEADLINE: Duration = Duration::from_secs(120);

pub fn run_app() -> io::Result<()> {
    logging::initialize(LogDestination::File);

    let config_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let store = ApiBaseStore::new(config_dir);
    let base = store.get();
    app_info!("Starting petboard against {}", base);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(&base, msg_tx);

    let mut session = Session {
        state: AppState::new(),
        runner,
        store,
        msg_rx,
        pending: 0,
    };

    // Initial load, mirroring a page open.
    session.dispatch(Msg::ApiBaseRestored(base));
    session.dispatch(Msg::RefreshClicked);
    session.wait_for_pending();
    session.render_if_dirty();

    loop {
        print!("petboard> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match commands::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{HELP_TEXT}"),
            Command::Empty => {}
            Command::Invalid(message) => println!("{message}"),
            Command::Msgs(msgs) => {
                for msg in msgs {
                    session.dispatch(msg);
                }
                session.wait_for_pending();
            }
        }

        session.drain_events();
        session.render_if_dirty();
    }

    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    store: ApiBaseStore,
    msg_rx: mpsc::Receiver<Msg>,
    pending: usize,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut forward = Vec::new();
        for effect in effects {
            if let Effect::ConfirmDelete { pet_id } = effect {
                if confirm_delete() {
                    self.dispatch(Msg::DeleteConfirmed { pet_id });
                }
            } else {
                forward.push(effect);
            }
        }
        self.pending += self.runner.enqueue(forward, &self.store);
    }

    /// Block until every in-flight call has answered, feeding completions
    /// (and the reloads they trigger) back through the update loop.
    fn wait_for_pending(&mut self) {
        let deadline = Instant::now() + PENDING_DEADLINE;
        while self.pending > 0 && Instant::now() < deadline {
            match self.msg_rx.recv_timeout(EVENT_POLL) {
                Ok(msg) => {
                    self.pending = self.pending.saturating_sub(1);
                    self.dispatch(msg);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            self.dispatch(msg);
        }
    }

    fn render_if_dirty(&mut self) {
        if self.state.consume_dirty() {
            println!();
            for line in ui::render::render(&self.state.view()) {
                println!("{line}");
            }
        }
    }
}

fn confirm_delete() -> bool {
    print!("Delete this pet? [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
