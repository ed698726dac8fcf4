use crate::pages::{Page, PageField};
use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => handle_key(state, key),
            Event::Tick => {
                state.advance_spinner();
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle a single key press for the view currently shown. Returns false if
/// exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(true);
    }
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return Ok(false);
    }

    let session = state.session_view()?;
    match state.current_view(&session) {
        View::Home => handle_home_key(state, key),
        View::Login => handle_form_key(state, key, State::login_mut),
        View::Register => handle_form_key(state, key, State::register_mut),
    }
}

fn handle_home_key(state: &mut State, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        KeyCode::Char('r') => state.refresh_user()?,
        KeyCode::Char('l') => state.sign_out(),
        _ => trace!("Ignoring terminal event '{:?}' on home view.", key),
    }
    Ok(true)
}

fn handle_form_key<F: PageField>(
    state: &mut State,
    key: KeyEvent,
    page: impl Fn(&mut State) -> &mut Page<F>,
) -> Result<bool> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        (KeyCode::F(2), _) | (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            state.toggle_page();
        }
        (KeyCode::Tab, _) | (KeyCode::Down, _) => page(state).next_field(),
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => page(state).previous_field(),
        (KeyCode::Backspace, _) => page(state).pop_char(),
        (KeyCode::Enter, _) => {
            page(state).submit();
        }
        // AltGr arrives as CONTROL | ALT on some platforms
        (KeyCode::Char(c), modifiers) if modifiers != KeyModifiers::CONTROL => {
            page(state).push_char(c)
        }
        _ => trace!("Ignoring terminal event '{:?}' on form view.", key),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::pages::{LoginField, RegisterField};
    use crate::session::{Event as SessionEvent, SessionProvider};
    use fake::{Fake, Faker};
    use std::sync::mpsc::Receiver;

    fn state() -> (State, SessionProvider, Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        let provider = SessionProvider::mount();
        let state = State::new(tx, provider.context(), None).unwrap();
        (state, provider, rx)
    }

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(press(state, KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_ctrl_c_exits_everywhere() {
        let (mut state, provider, _rx) = state();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key(&mut state, ctrl_c).unwrap());

        provider
            .context()
            .dispatch(SessionEvent::LogIn(Faker.fake()))
            .unwrap();
        assert!(!handle_key(&mut state, ctrl_c).unwrap());
    }

    #[test]
    fn test_typing_and_submitting_login() {
        let (mut state, _provider, rx) = state();
        type_text(&mut state, "ada@example.com");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "secret");
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.login().value(LoginField::Password), "secre");
        match rx.try_recv() {
            Ok(NetworkEvent::SignIn(credentials)) => {
                assert_eq!(credentials.email, "ada@example.com");
                assert_eq!(credentials.password, "secre");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_shifted_characters_are_typed() {
        let (mut state, _provider, _rx) = state();
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert!(handle_key(&mut state, key).unwrap());
        assert_eq!(state.login().value(LoginField::Email), "A");
    }

    #[test]
    fn test_toggle_to_register() {
        let (mut state, _provider, _rx) = state();
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.page(), View::Register);

        type_text(&mut state, "Ada");
        press(&mut state, KeyCode::Up);
        assert_eq!(state.register().focus(), RegisterField::Password);
        assert_eq!(state.register().value(RegisterField::FirstName), "Ada");

        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        handle_key(&mut state, ctrl_r).unwrap();
        assert_eq!(state.page(), View::Login);
    }

    #[test]
    fn test_escape_exits_form() {
        let (mut state, _provider, _rx) = state();
        assert!(!press(&mut state, KeyCode::Esc));
    }

    #[test]
    fn test_home_keys() {
        let (mut state, provider, rx) = state();
        provider
            .context()
            .dispatch(SessionEvent::LogIn(Faker.fake()))
            .unwrap();

        assert!(press(&mut state, KeyCode::Char('r')));
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::Me)));
        assert!(press(&mut state, KeyCode::Char('l')));
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::SignOut)));
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert_eq!(state.login().value(LoginField::Email), "");
    }

    #[test]
    fn test_released_keys_ignored() {
        let (mut state, _provider, _rx) = state();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(handle_key(&mut state, key).unwrap());
        assert_eq!(state.login().value(LoginField::Email), "");
    }

    #[test]
    fn test_altgr_characters_are_typed() {
        let (mut state, _provider, _rx) = state();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        assert!(handle_key(&mut state, KeyEvent::new(KeyCode::Char('@'), altgr)).unwrap());
        assert_eq!(state.login().value(LoginField::Email), "@");

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut state, ctrl_x).unwrap());
        assert_eq!(state.login().value(LoginField::Email), "@");
    }

    #[test]
    fn test_home_keys_during_refresh() {
        let (mut state, provider, rx) = state();
        let context = provider.context();
        context.dispatch(SessionEvent::LogIn(Faker.fake())).unwrap();

        assert!(press(&mut state, KeyCode::Char('r')));
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::Me)));
        context.dispatch(SessionEvent::FetchingUser).unwrap();

        assert!(press(&mut state, KeyCode::Char('x')));
        assert_eq!(state.login().value(LoginField::Email), "");
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert_eq!(state.login().value(LoginField::Email), "");

        assert!(press(&mut state, KeyCode::Char('l')));
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::SignOut)));
        assert_eq!(state.refreshing_user(), None);
    }
}
