//! PPL Language Server Implementation

use crate::hover::HoverProvider;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// LSP message types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum LspMessage {
    #[serde(rename = "initialize")]
    Initialize { id: i64, params: InitializeParams },

    #[serde(rename = "initialized")]
    Initialized,

    #[serde(rename = "shutdown")]
    Shutdown { id: i64 },

    #[serde(rename = "exit")]
    Exit,

    #[serde(rename = "textDocument/didOpen")]
    DidOpen { params: DidOpenParams },

    #[serde(rename = "textDocument/didChange")]
    DidChange { params: DidChangeParams },

    #[serde(rename = "textDocument/didClose")]
    DidClose { params: DidCloseParams },

    #[serde(rename = "textDocument/didSave")]
    DidSave { params: DidSaveParams },

    #[serde(rename = "textDocument/hover")]
    Hover { id: i64, params: HoverParams },
}

/// Initialize request parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub process_id: Option<i64>,
    pub root_uri: Option<String>,
    #[serde(default)]
    pub capabilities: ClientCapabilities,
}

/// Client capabilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCapabilities {
    pub text_document: Option<TextDocumentClientCapabilities>,
}

/// Text document capabilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentClientCapabilities {
    pub hover: Option<HoverClientCapabilities>,
}

/// Hover capabilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoverClientCapabilities {}

/// Document open params
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenParams {
    pub text_document: TextDocumentItem,
}

/// Document change params
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeParams {
    pub text_document: VersionedTextDocumentIdentifier,
    pub content_changes: Vec<TextDocumentContentChangeEvent>,
}

/// Document close params
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCloseParams {
    pub text_document: TextDocumentIdentifier,
}

/// Document save params
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidSaveParams {
    pub text_document: TextDocumentIdentifier,
    pub text: Option<String>,
}

/// Hover params
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverParams {
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
}

/// Text document item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    pub uri: String,
    pub language_id: String,
    pub version: i64,
    pub text: String,
}

/// Text document identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDocumentIdentifier {
    pub uri: String,
}

/// Versioned text document identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionedTextDocumentIdentifier {
    pub uri: String,
    pub version: i64,
}

/// Text document change event (full sync)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDocumentContentChangeEvent {
    pub text: String,
}

/// Position in a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Range in a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Server capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    pub text_document_sync: TextDocumentSyncOptions,
    pub hover_provider: Option<bool>,
}

/// Text document sync options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSyncOptions {
    pub open_close: bool,
    pub change: u8, // 1 = Full, 2 = Incremental
    pub save: Option<SaveOptions>,
}

/// Save options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOptions {
    pub include_text: bool,
}

/// Initialize result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    pub capabilities: ServerCapabilities,
}

/// Hover result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hover {
    pub contents: MarkupContent,
    pub range: Option<Range>,
}

/// Markup content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupContent {
    pub kind: String,
    pub value: String,
}

/// Document state
struct DocumentState {
    content: String,
    version: i64,
}

/// PPL Language Server
pub struct PplLanguageServer {
    documents: Arc<RwLock<HashMap<String, DocumentState>>>,
    hover_provider: HoverProvider,
}

impl PplLanguageServer {
    /// Create a new language server
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
            hover_provider: HoverProvider::new(),
        }
    }

    /// Handle initialize request
    pub fn initialize(&self, _params: &InitializeParams) -> InitializeResult {
        InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: TextDocumentSyncOptions {
                    open_close: true,
                    change: 1, // Full sync
                    save: Some(SaveOptions { include_text: false }),
                },
                hover_provider: Some(true),
            },
        }
    }

    /// Handle document open
    pub fn did_open(&self, params: &DidOpenParams) {
        let mut docs = self.documents.write().unwrap();
        docs.insert(
            params.text_document.uri.clone(),
            DocumentState {
                content: params.text_document.text.clone(),
                version: params.text_document.version,
            },
        );
    }

    /// Handle document change
    pub fn did_change(&self, params: &DidChangeParams) {
        if let Some(change) = params.content_changes.last() {
            let mut docs = self.documents.write().unwrap();
            docs.insert(
                params.text_document.uri.clone(),
                DocumentState {
                    content: change.text.clone(),
                    version: params.text_document.version,
                },
            );
        }
    }

    /// Handle document close
    pub fn did_close(&self, params: &DidCloseParams) {
        let mut docs = self.documents.write().unwrap();
        docs.remove(&params.text_document.uri);
    }

    /// Handle hover request
    pub fn hover(&self, params: &HoverParams) -> Option<Hover> {
        let docs = self.documents.read().unwrap();

        if let Some(doc) = docs.get(&params.text_document.uri) {
            return self.hover_provider.get_hover(
                &doc.content,
                params.position.line as usize,
                params.position.character as usize,
            );
        }

        None
    }

    /// Version of an open document, if tracked
    pub fn document_version(&self, uri: &str) -> Option<i64> {
        let docs = self.documents.read().unwrap();
        docs.get(uri).map(|doc| doc.version)
    }
}

impl Default for PplLanguageServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_params(uri: &str, text: &str) -> DidOpenParams {
        DidOpenParams {
            text_document: TextDocumentItem {
                uri: uri.to_string(),
                language_id: "hp-prime".to_string(),
                version: 1,
                text: text.to_string(),
            },
        }
    }

    #[test]
    fn test_server_initialization() {
        let server = PplLanguageServer::new();
        let params = InitializeParams {
            process_id: Some(1234),
            root_uri: Some("file:///test".to_string()),
            capabilities: ClientCapabilities::default(),
        };

        let result = server.initialize(&params);
        assert!(result.capabilities.hover_provider.unwrap());
        assert_eq!(result.capabilities.text_document_sync.change, 1);
    }

    #[test]
    fn test_hover_on_open_document() {
        let server = PplLanguageServer::new();
        server.did_open(&open_params(
            "file:///test/demo.hpprgm",
            "EXPORT DEMO()\nBEGIN\n KILL;\nEND;",
        ));

        let hover = server.hover(&HoverParams {
            text_document: TextDocumentIdentifier {
                uri: "file:///test/demo.hpprgm".to_string(),
            },
            position: Position { line: 2, character: 2 },
        });

        assert!(hover.is_some());
        assert!(hover.unwrap().contents.value.contains("Stops the execution"));
    }

    #[test]
    fn test_hover_on_unknown_document() {
        let server = PplLanguageServer::new();
        let hover = server.hover(&HoverParams {
            text_document: TextDocumentIdentifier {
                uri: "file:///missing".to_string(),
            },
            position: Position { line: 0, character: 0 },
        });
        assert!(hover.is_none());
    }

    #[test]
    fn test_did_change_replaces_content() {
        let server = PplLanguageServer::new();
        server.did_open(&open_params("file:///t", "KILL;"));

        server.did_change(&DidChangeParams {
            text_document: VersionedTextDocumentIdentifier {
                uri: "file:///t".to_string(),
                version: 2,
            },
            content_changes: vec![TextDocumentContentChangeEvent {
                text: "RETURN 1;".to_string(),
            }],
        });

        assert_eq!(server.document_version("file:///t"), Some(2));
        let hover = server.hover(&HoverParams {
            text_document: TextDocumentIdentifier {
                uri: "file:///t".to_string(),
            },
            position: Position { line: 0, character: 0 },
        });
        assert!(hover.unwrap().contents.value.contains("RETURN expression;"));
    }

    #[test]
    fn test_did_close_drops_document() {
        let server = PplLanguageServer::new();
        server.did_open(&open_params("file:///t", "KILL;"));
        server.did_close(&DidCloseParams {
            text_document: TextDocumentIdentifier {
                uri: "file:///t".to_string(),
            },
        });
        assert_eq!(server.document_version("file:///t"), None);
    }

    #[test]
    fn test_message_parsing() {
        let raw = r#"{"jsonrpc":"2.0","id":7,"method":"textDocument/hover","params":{"textDocument":{"uri":"file:///t"},"position":{"line":0,"character":3}}}"#;
        let message: LspMessage = serde_json::from_str(raw).unwrap();
        match message {
            LspMessage::Hover { id, params } => {
                assert_eq!(id, 7);
                assert_eq!(params.position.character, 3);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
