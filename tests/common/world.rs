use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use cucumber::World;
use routeline::app::io::{MockEventStream, MockRenderStream, ScreenHandle};
use routeline::app::AppController;
use routeline::config::Settings;
use routeline::UiState;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub type TestController = AppController<MockEventStream, MockRenderStream>;

/// How long a scenario waits for an outstanding fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(World)]
#[world(init = Self::new)]
pub struct RoutelineWorld {
    /// Application under test, created by the "application is started" step
    pub controller: Option<TestController>,

    /// Screen of the mock render stream
    pub screen: Option<ScreenHandle>,

    /// Mock HTTP server standing in for the placeholder API
    pub mock_server: Option<MockServer>,

    /// Base URL the application is started with
    pub base_url: String,

    pub terminal_size: (u16, u16),
}

impl std::fmt::Debug for RoutelineWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutelineWorld")
            .field("base_url", &self.base_url)
            .field("terminal_size", &self.terminal_size)
            .field("started", &self.controller.is_some())
            .finish()
    }
}

impl RoutelineWorld {
    pub fn new() -> Self {
        Self {
            controller: None,
            screen: None,
            mock_server: None,
            base_url: String::new(),
            terminal_size: (80, 24),
        }
    }

    /// Start the mock server on first use and point the app at it
    pub async fn mock_server(&mut self) -> &MockServer {
        if self.mock_server.is_none() {
            let server = MockServer::start().await;
            self.base_url = server.uri();
            self.mock_server = Some(server);
        }
        self.mock_server
            .as_ref()
            .expect("mock server was just started")
    }

    /// Serve a JSON body (or anything else) at a path
    pub async fn serve(&mut self, route_path: &str, status: u16, body: &str, delay: Duration) {
        let template = ResponseTemplate::new(status)
            .set_body_raw(body.to_string(), "application/json")
            .set_delay(delay);
        let server = self.mock_server().await;
        Mock::given(method("GET"))
            .and(path(route_path))
            .respond_with(template)
            .mount(server)
            .await;
    }

    /// Point the app at a port nothing listens on
    pub fn use_unreachable_api(&mut self) {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve a local port");
        let port = listener.local_addr().expect("listener has an address").port();
        drop(listener);
        self.base_url = format!("http://127.0.0.1:{port}");
    }

    pub fn start_application(&mut self) -> Result<()> {
        let render_stream = MockRenderStream::with_size(self.terminal_size);
        self.screen = Some(render_stream.screen_handle());

        let settings = Settings {
            base_url: self.base_url.clone(),
            ..Settings::default()
        };
        let mut controller = AppController::with_io_streams(
            &settings,
            None,
            MockEventStream::empty(),
            render_stream,
        )?;
        controller.render_pending()?;
        self.controller = Some(controller);
        Ok(())
    }

    pub fn controller(&mut self) -> &mut TestController {
        self.controller
            .as_mut()
            .expect("the application has not been started")
    }

    pub fn state(&self) -> &UiState {
        self.controller
            .as_ref()
            .expect("the application has not been started")
            .view_model()
            .state()
    }

    pub fn screen_text(&self) -> String {
        self.screen
            .as_ref()
            .expect("the application has not been started")
            .text()
    }

    pub fn press_key(&mut self, key: &str) -> Result<()> {
        let key_event = match key {
            "Escape" | "Esc" => KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()),
            "Enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()),
            "Tab" => KeyEvent::new(KeyCode::Tab, KeyModifiers::empty()),
            "BackTab" | "Shift+Tab" => KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            "Backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::empty()),
            "Up" => KeyEvent::new(KeyCode::Up, KeyModifiers::empty()),
            "Down" => KeyEvent::new(KeyCode::Down, KeyModifiers::empty()),
            "Left" => KeyEvent::new(KeyCode::Left, KeyModifiers::empty()),
            "Right" => KeyEvent::new(KeyCode::Right, KeyModifiers::empty()),
            "PageUp" => KeyEvent::new(KeyCode::PageUp, KeyModifiers::empty()),
            "PageDown" => KeyEvent::new(KeyCode::PageDown, KeyModifiers::empty()),
            "Ctrl+C" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            single if single.chars().count() == 1 => {
                let ch = single.chars().next().unwrap_or(' ');
                KeyEvent::new(KeyCode::Char(ch), KeyModifiers::empty())
            }
            other => anyhow::bail!("Unknown key '{other}'"),
        };

        self.send_event(Event::Key(key_event))
    }

    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.send_event(Event::Key(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::empty(),
            )))?;
        }
        Ok(())
    }

    pub fn send_event(&mut self, event: Event) -> Result<()> {
        let controller = self.controller();
        controller.handle_event(event)?;
        controller.render_pending()
    }

    /// Apply finished fetches and repaint, as one pass of the event loop does
    pub fn tick(&mut self) -> Result<usize> {
        let controller = self.controller();
        let processed = controller.process_fetch_responses();
        controller.render_pending()?;
        Ok(processed)
    }

    pub async fn wait_for_fetch(&mut self) -> Result<bool> {
        self.controller().wait_for_fetch(FETCH_TIMEOUT).await
    }
}

impl Default for RoutelineWorld {
    fn default() -> Self {
        Self::new()
    }
}
