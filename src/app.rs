use crate::auth::AuthApi;
use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger;
use crate::session::{SessionContext, SessionProvider};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    session: SessionContext,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        logger::init(LevelFilter::Debug)?;

        info!("Starting application...");
        let provider = SessionProvider::mount();
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let state = State::new(tx.clone(), provider.context(), config.last_email.clone())?;
        let mut app = App {
            state: Arc::new(Mutex::new(state)),
            session: provider.context(),
            config,
        };
        app.start_network(rx)?;
        let result = app.start_ui(tx).await;

        // Remember the email for the next start
        {
            let state = app.state.lock().await;
            app.config.last_email = state.remembered_email();
            if let Err(e) = app.config.save() {
                error!("Failed to save config on exit: {}", e);
            }
        }

        provider.unmount();
        info!("Exiting application...");
        result
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> Result<()> {
        debug!("Creating new thread for asynchronous networking...");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let mut api = AuthApi::new(&self.config.api_url)?;
        let cloned_state = Arc::clone(&self.state);
        let session = self.session.clone();
        let timeout = self.config.request_timeout;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut network_event_handler =
                    NetworkEventHandler::new(&cloned_state, session, &mut api, timeout);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self, net_sender: NetworkEventSender) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        net_sender.send(NetworkEvent::Me)?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result = loop {
            let mut state = self.state.lock().await;
            let session = match self.session.view() {
                Ok(session) => session,
                Err(e) => break Err(e.into()),
            };
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &state, &session)) {
                break Err(e.into());
            }
            match terminal_event_handler.handle_next(&mut state) {
                Ok(true) => (),
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}
