// tests/common/mod.rs
//
// One-shot HTTP stub on localhost for exercising the remote source.
//
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub enum Reply {
    Status(u16, &'static str),
    Hang(Duration),
}

pub struct Stub {
    pub url: String,
    handle: JoinHandle<String>,
}

impl Stub {
    /// Serve exactly one request, answering with `reply`.
    pub fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/v1/animals", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 { break; }
                if line == "\r\n" { break; }
                head.push_str(&line);
            }

            let mut stream = stream;
            match reply {
                Reply::Status(code, body) => {
                    let resp = format!(
                        "HTTP/1.1 {code} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(resp.as_bytes());
                    let _ = stream.flush();
                }
                Reply::Hang(d) => thread::sleep(d),
            }
            head
        });

        Self { url, handle }
    }

    /// Request head (request line + headers) as received.
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

pub const TEMPLATE: &str = "<h1>My Animal Repository</h1>\n<ul class='cards'>\n__REPLACE_ANIMALS_INFO__</ul>\n";
