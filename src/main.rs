//! PPL Language Server Binary
//!
//! Speaks the Language Server Protocol over stdin/stdout with
//! Content-Length framing. Logging goes to stderr; stdout carries the
//! protocol.

use clap::Parser;
use ppl_lsp::docs::{render_markdown, DocRegistry};
use ppl_lsp::error::{Result, ServerError};
use ppl_lsp::server::{LspMessage, PplLanguageServer};
use serde_json::json;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Language server for the HP Prime Programming Language
#[derive(Parser)]
#[command(name = "ppl-lsp")]
#[command(version)]
#[command(about = "Language server for the HP Prime Programming Language", long_about = None)]
struct Cli {
    /// Log filter (tracing env-filter syntax)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the rendered hover markdown for a keyword and exit
    #[arg(long, value_name = "KEYWORD")]
    dump: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level))
        .with_writer(io::stderr)
        .init();

    if let Some(keyword) = cli.dump {
        let registry = DocRegistry::new();
        match registry.lookup(&keyword) {
            Some(record) => println!("{}", render_markdown(record)),
            None => {
                eprintln!("no documentation for {:?}", keyword);
                std::process::exit(1);
            }
        }
        return;
    }

    info!("Starting PPL Language Server");

    let server = PplLanguageServer::new();
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = io::stdout();

    loop {
        match read_message(&mut reader) {
            Ok(Some(body)) => handle_message(&server, &body, &mut stdout),
            Ok(None) => {
                info!("Client closed the stream");
                break;
            }
            Err(e) => {
                warn!("Transport error: {}", e);
                break;
            }
        }
    }
}

/// Read one Content-Length framed message. `Ok(None)` means clean EOF.
fn read_message<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut content_length: Option<usize> = None;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim_end();
        if line.is_empty() {
            break;
        }

        if line.to_lowercase().starts_with("content-length:") {
            let value = line.split(':').nth(1).unwrap_or("").trim();
            content_length = Some(
                value
                    .parse()
                    .map_err(|_| ServerError::InvalidHeader(line.to_string()))?,
            );
        }
        // Content-Type is the only other header the protocol defines; ignored.
    }

    let len = content_length
        .ok_or_else(|| ServerError::InvalidHeader("missing Content-Length".to_string()))?;

    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    Ok(Some(String::from_utf8(buf)?))
}

fn handle_message(server: &PplLanguageServer, body: &str, stdout: &mut io::Stdout) {
    debug!("Received message: {}", body);

    let message: LspMessage = match serde_json::from_str(body) {
        Ok(message) => message,
        Err(e) => {
            // Requests for capabilities we don't advertise land here too.
            debug!("Ignoring unsupported message: {}", e);
            return;
        }
    };

    match message {
        LspMessage::Initialize { id, params } => {
            let result = server.initialize(&params);
            send_response(stdout, &json!({"jsonrpc": "2.0", "id": id, "result": result}));
        }
        LspMessage::Initialized => {}
        LspMessage::Shutdown { id } => {
            send_response(stdout, &json!({"jsonrpc": "2.0", "id": id, "result": null}));
        }
        LspMessage::Exit => {
            info!("Exit requested");
            std::process::exit(0);
        }
        LspMessage::DidOpen { params } => server.did_open(&params),
        LspMessage::DidChange { params } => server.did_change(&params),
        LspMessage::DidClose { params } => server.did_close(&params),
        LspMessage::DidSave { .. } => {}
        LspMessage::Hover { id, params } => {
            let hover = server.hover(&params);
            send_response(stdout, &json!({"jsonrpc": "2.0", "id": id, "result": hover}));
        }
    }
}

fn send_response(stdout: &mut io::Stdout, payload: &serde_json::Value) {
    let content = payload.to_string();
    let framed = format!("Content-Length: {}\r\n\r\n{}", content.len(), content);
    if let Err(e) = stdout
        .write_all(framed.as_bytes())
        .and_then(|_| stdout.flush())
    {
        warn!("Failed to write response: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_framed_message() {
        let raw = b"Content-Length: 16\r\n\r\n{\"method\":\"foo\"}";
        let mut reader = Cursor::new(&raw[..]);
        let body = read_message(&mut reader).unwrap().unwrap();
        assert_eq!(body, "{\"method\":\"foo\"}");
    }

    #[test]
    fn test_read_eof() {
        let mut reader = Cursor::new(&b""[..]);
        assert!(read_message(&mut reader).unwrap().is_none());
    }

    #[test]
    fn test_missing_content_length_is_an_error() {
        let raw = b"Content-Type: application/json\r\n\r\n{}";
        let mut reader = Cursor::new(&raw[..]);
        assert!(read_message(&mut reader).is_err());
    }

    #[test]
    fn test_bad_content_length_is_an_error() {
        let raw = b"Content-Length: nope\r\n\r\n{}";
        let mut reader = Cursor::new(&raw[..]);
        assert!(read_message(&mut reader).is_err());
    }
}
