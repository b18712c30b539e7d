#[cfg(test)]
pub mod test_helpers {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::options::{Icon, SubscriptionOptions};
    use crate::session::CookieSource;

    pub const TEST_SESSION: &str = "sess-42";

    pub fn ticket_options(subscribed: bool) -> SubscriptionOptions {
        SubscriptionOptions {
            thing: "ticket".to_string(),
            subscribed,
            subscribed_to_tool: false,
            url: "/sub".to_string(),
            icon: Icon {
                glyph: "✉".to_string(),
                css: "fa-envelope".to_string(),
            },
        }
    }

    pub fn test_app(subscribed: bool) -> App {
        App::new(
            ticket_options(subscribed),
            &Config::default(),
            CookieSource::Header(format!("_session_id={}", TEST_SESSION)),
        )
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Raw HTTP request as seen by [`serve_once`]
    #[derive(Debug, Clone, Default)]
    pub struct CapturedRequest {
        pub request_line: String,
        pub headers: Vec<String>,
        pub body: String,
    }

    impl CapturedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers.iter().find_map(|h| {
                let (key, value) = h.split_once(':')?;
                key.eq_ignore_ascii_case(name).then(|| value.trim())
            })
        }
    }

    /// Accept one connection, answer with `status` and `body`, return the request
    ///
    /// Returns the base url (`http://127.0.0.1:<port>`) and a handle yielding the
    /// captured request once the exchange finishes.
    ///
    /// Only understands a `Content-Length` body. A chunked request body would
    /// be read as empty, which is fine for reqwest's form POST.
    pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let body = body.to_string();

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut captured = CapturedRequest::default();
            reader.read_line(&mut captured.request_line).unwrap();

            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end().to_string();
                if line.is_empty() {
                    break;
                }
                if let Some((key, value)) = line.split_once(':')
                    && key.eq_ignore_ascii_case("content-length")
                {
                    content_length = value.trim().parse().unwrap();
                }
                captured.headers.push(line);
            }

            let mut buf = vec![0u8; content_length];
            reader.read_exact(&mut buf).unwrap();
            captured.body = String::from_utf8(buf).unwrap();

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            captured
        });

        (base_url, handle)
    }
}
