//! Interactive shell loop
//!
//! Reads commands line by line. Each action starts on the shell task and runs
//! until it first waits on the network; only the remainder moves to a
//! background task. Effects that need no request therefore apply in input
//! order, and a slow request never blocks the next command.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Poll;

use futures_util::future::poll_fn;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

use crate::application::{dispatch, SessionClient};
use crate::ui::terminal::commands::{parse_command, ShellCommand, USAGE};
use crate::ui::terminal::renderer::TerminalUi;

/// Run until `quit` or end of input. In-flight actions are awaited before
/// returning.
pub async fn run_shell<R, W>(
    input: R,
    client: SessionClient,
    ui: Arc<TerminalUi<W>>,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let mut lines = input.lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Help)) => ui.print(USAGE),
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(ShellCommand::Action(action))) => {
                let client = client.clone();
                let mut task = Box::pin(async move { dispatch(&client, action).await });
                if poll_once(&mut task).await.is_pending() {
                    in_flight.spawn(task);
                }
            }
            Err(e) => ui.print(&format!("{}\nType `help` for the list of commands.\n", e)),
        }

        while let Some(finished) = in_flight.try_join_next() {
            log_join_error(finished);
        }
    }

    while let Some(finished) = in_flight.join_next().await {
        log_join_error(finished);
    }
    tracing::debug!("Shell closed");
    Ok(())
}

/// Poll `future` exactly once from the calling task
async fn poll_once<F>(future: &mut Pin<Box<F>>) -> Poll<F::Output>
where
    F: Future + ?Sized,
{
    poll_fn(|cx| Poll::Ready(future.as_mut().poll(cx))).await
}

fn log_join_error(result: Result<(), tokio::task::JoinError>) {
    if let Err(e) = result {
        tracing::error!("UI action task failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use crate::ports::outbound::{ApiError, MockRawApiPort, RawApiPort};
    use gamevault_domain::{ClientSettings, Tab};
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tokio::io::BufReader;
    use tokio::sync::Semaphore;

    /// Writer whose contents stay reachable after it is handed out
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Logs in immediately; inventory requests wait until `gate` has a permit
    struct GatedApi {
        gate: Arc<Semaphore>,
    }

    #[async_trait::async_trait]
    impl RawApiPort for GatedApi {
        async fn get_json_authorized(&self, _url: &str, _token: &str) -> Result<Value, ApiError> {
            let _permit = self.gate.acquire().await;
            Ok(json!({"inventory": []}))
        }

        async fn post_json(&self, _url: &str, _body: &Value) -> Result<Value, ApiError> {
            Ok(json!({"success": true, "accessToken": "tok1", "userId": "42", "username": "demo"}))
        }
    }

    fn setup(
        raw: impl RawApiPort + 'static,
    ) -> (SessionClient, Arc<TerminalUi<SharedBuffer>>, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let ui = Arc::new(TerminalUi::new(buffer.clone()));
        let client = SessionClient::new(
            Api::new(Arc::new(raw)),
            &create_mock_platform(),
            ui.clone(),
            ClientSettings::default(),
        );
        (client, ui, buffer)
    }

    #[tokio::test]
    async fn test_help_errors_and_quit() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().never();

        let (client, ui, buffer) = setup(raw);
        let input = BufReader::new(&b"help\ndance\n\nquit\nlogin demo demo123\n"[..]);
        run_shell(input, client, ui).await.unwrap();

        let text = buffer.text();
        assert!(text.contains(USAGE));
        assert!(text.contains("Unknown command: dance\nType `help`"));
    }

    #[tokio::test]
    async fn test_actions_run_until_end_of_input() {
        let (client, ui, buffer) = setup(MockRawApiPort::new());
        let input = BufReader::new(&b"tab profile\n"[..]);
        run_shell(input, client.clone(), ui).await.unwrap();

        assert_eq!(client.active_tab(), Tab::Profile);
        assert!(buffer.text().contains("-- profile --"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_instant_actions_apply_in_input_order() {
        for _ in 0..500 {
            let (client, ui, _) = setup(MockRawApiPort::new());
            let input = BufReader::new(&b"tab profile\ntab settings\nauto on\nauto off\n"[..]);
            run_shell(input, client.clone(), ui).await.unwrap();

            assert_eq!(client.active_tab(), Tab::Settings);
            assert!(!client.settings().auto_refresh_enabled);
        }
    }

    #[tokio::test]
    async fn test_slow_request_continues_in_background() {
        let gate = Arc::new(Semaphore::new(0));
        let (client, ui, buffer) = setup(GatedApi { gate: gate.clone() });

        let input = BufReader::new(&b"login demo demo123\ntab profile\n"[..]);
        let shell = tokio::spawn(run_shell(input, client.clone(), ui));

        while client.active_tab() != Tab::Profile {
            tokio::task::yield_now().await;
        }
        assert!(!buffer.text().contains("Inventory ("));

        gate.add_permits(1);
        shell.await.unwrap().unwrap();

        let text = buffer.text();
        let welcome = text.find("== Welcome, demo").unwrap();
        let loading = text.find("Loading inventory...").unwrap();
        let profile = text.find("-- profile --").unwrap();
        let inventory = text.find("Inventory (").unwrap();
        assert!(welcome < loading && loading < profile && profile < inventory);
    }

    #[tokio::test]
    async fn test_settings_panel_shows_saved_settings() {
        let (client, ui, buffer) = setup(MockRawApiPort::new());
        let input = BufReader::new(&b"settings http://new.test/api on\ntab settings\n"[..]);
        run_shell(input, client, ui).await.unwrap();

        assert!(buffer
            .text()
            .contains("-- settings --\nAPI URL: http://new.test/api\nAuto-refresh: on\n"));
    }
}
