use std::collections::HashMap;

use lsp_server::{Connection, Message, Request, Response};
use lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, DocumentSymbol, DocumentSymbolParams, DocumentSymbolResponse,
    InitializedParams, Location, SymbolInformation, SymbolKind, Uri, WorkspaceSymbolParams,
};
use serde_json::{from_value, Value};
use tracing::{debug, info, warn};

use crate::language::{self, NodeKind, OutlineNode};
use crate::scanning::{self, CancelToken};

pub struct ProdelLanguageServer {
    /// Map from URI to document content
    documents: HashMap<Uri, String>,
}

impl ProdelLanguageServer {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    /// Main server loop that handles incoming LSP messages
    pub fn run(
        mut self,
        connection: Connection,
    ) -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
        info!("Starting Language Server main loop");

        for message in &connection.receiver {
            match message {
                Message::Request(request) => {
                    if let Err(err) = self.handle_request(request, &|msg| {
                        connection
                            .sender
                            .send(msg)
                    }) {
                        warn!("Error handling request: {}", err);
                    }
                }
                Message::Notification(notification) => {
                    if notification.method == "exit" {
                        break;
                    }

                    if let Err(error) = self.handle_notification(notification) {
                        warn!("Error handling notification: {}", error);
                    }
                }
                Message::Response(_resp) => {
                    // We don't expect responses as a server
                    warn!("Received unexpected response message");
                }
            }
        }

        Ok(())
    }

    fn handle_request<E>(
        &mut self,
        req: Request,
        sender: &dyn Fn(Message) -> Result<(), E>,
    ) -> Result<(), Box<dyn std::error::Error + Sync + Send>>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match req
            .method
            .as_str()
        {
            "textDocument/documentSymbol" => {
                let params: DocumentSymbolParams = from_value(req.params)?;
                let result = self.handle_document_symbol(params);
                let response = Response::new_ok(req.id, result);
                sender(Message::Response(response))?;
            }
            "workspace/symbol" => {
                let params: WorkspaceSymbolParams = from_value(req.params)?;
                let result = self.handle_workspace_symbol(params);
                let response = Response::new_ok(req.id, result);
                sender(Message::Response(response))?;
            }
            "shutdown" => {
                info!("Language Server received shutdown request");
                let response = Response::new_ok(req.id, Value::Null);
                sender(Message::Response(response))?;
            }
            _ => {
                warn!("Unhandled request method: {}", req.method);
                let response = Response::new_err(
                    req.id,
                    lsp_server::ErrorCode::MethodNotFound as i32,
                    format!("Method not found: {}", req.method),
                );
                sender(Message::Response(response))?;
            }
        }
        Ok(())
    }

    fn handle_notification(
        &mut self,
        notification: lsp_server::Notification,
    ) -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
        match notification
            .method
            .as_str()
        {
            "initialized" => {
                let _params: InitializedParams = from_value(notification.params)?;
            }
            "textDocument/didOpen" => {
                let params: DidOpenTextDocumentParams = from_value(notification.params)?;
                self.handle_did_open(params);
            }
            "textDocument/didChange" => {
                let params: DidChangeTextDocumentParams = from_value(notification.params)?;
                self.handle_did_change(params);
            }
            "textDocument/didSave" => {
                let params: DidSaveTextDocumentParams = from_value(notification.params)?;
                debug!(
                    "Document saved: {:?}",
                    params
                        .text_document
                        .uri
                );
            }
            "textDocument/didClose" => {
                let params: DidCloseTextDocumentParams = from_value(notification.params)?;
                self.handle_did_close(params);
            }
            "$/cancelRequest" => {
                // Requests are answered synchronously in arrival order, so a
                // cancellation can only concern a request already answered.
                debug!("Cancel request received");
            }
            _ => {
                debug!("Unhandled notification method: {}", notification.method);
            }
        }
        Ok(())
    }

    fn handle_did_open(&mut self, params: DidOpenTextDocumentParams) {
        let uri = params
            .text_document
            .uri;
        let content = params
            .text_document
            .text;

        debug!("Document opened: {:?}", uri);

        self.documents
            .insert(uri, content);
    }

    fn handle_did_change(&mut self, params: DidChangeTextDocumentParams) {
        let uri = params
            .text_document
            .uri;

        // Sync is whole-document, so the last change carries the full text.
        if let Some(change) = params
            .content_changes
            .into_iter()
            .next_back()
        {
            debug!("Document changed: {:?}", uri);

            self.documents
                .insert(uri, change.text);
        }
    }

    fn handle_did_close(&mut self, params: DidCloseTextDocumentParams) {
        let uri = params
            .text_document
            .uri;
        debug!("Document closed: {:?}", uri);

        self.documents
            .remove(&uri);
    }

    fn handle_document_symbol(&self, params: DocumentSymbolParams) -> DocumentSymbolResponse {
        let uri = params
            .text_document
            .uri;

        debug!("Document symbol request: {:?}", uri);

        // Get content from our documents map
        let content = match self
            .documents
            .get(&uri)
        {
            Some(content) => content,
            None => {
                return DocumentSymbolResponse::Nested(vec![]);
            }
        };

        // Each request scans a fresh snapshot under its own token. A
        // cancelled scan answers with no symbols rather than stale ones.
        let cancel = CancelToken::new();
        let symbols = match scanning::outline(content, &cancel) {
            Some(nodes) => nodes
                .into_iter()
                .map(to_document_symbol)
                .collect(),
            None => vec![],
        };

        DocumentSymbolResponse::Nested(symbols)
    }

    fn handle_workspace_symbol(
        &self,
        params: WorkspaceSymbolParams,
    ) -> Option<Vec<SymbolInformation>> {
        let query = params
            .query
            .to_lowercase();
        debug!("Workspace symbol request: query={:?}", query);

        let mut all_symbols = Vec::new();

        // Search through all open documents
        for (uri, content) in &self.documents {
            let cancel = CancelToken::new();
            let nodes = match scanning::outline(content, &cancel) {
                Some(nodes) => nodes,
                None => continue,
            };

            let mut symbols = Vec::new();
            flatten_symbols(uri, &nodes, None, &mut symbols);

            // Filter symbols by query
            for symbol in symbols {
                if query.is_empty()
                    || symbol
                        .name
                        .to_lowercase()
                        .contains(&query)
                {
                    all_symbols.push(symbol);
                }
            }
        }

        Some(all_symbols)
    }
}

/// Convert an outline node and its children into the editor's nested
/// document symbol representation.
fn to_document_symbol(node: OutlineNode) -> DocumentSymbol {
    let kind = symbol_kind(&node);
    let range = convert_range(node.range);
    let selection_range = convert_range(node.selection_range);
    let children: Vec<DocumentSymbol> = node
        .children
        .into_iter()
        .map(to_document_symbol)
        .collect();

    #[allow(deprecated)]
    DocumentSymbol {
        name: node.name,
        detail: node.detail,
        kind,
        tags: None,
        deprecated: None,
        range,
        selection_range,
        children: if children.is_empty() {
            None
        } else {
            Some(children)
        },
    }
}

/// Flatten an outline into the location-based list used by workspace-wide
/// symbol search, recording each symbol's parent as its container.
fn flatten_symbols(
    uri: &Uri,
    nodes: &[OutlineNode],
    container: Option<&str>,
    result: &mut Vec<SymbolInformation>,
) {
    for node in nodes {
        #[allow(deprecated)]
        result.push(SymbolInformation {
            name: node
                .name
                .clone(),
            kind: symbol_kind(node),
            tags: None,
            deprecated: None,
            location: Location {
                uri: uri.clone(),
                range: convert_range(node.selection_range),
            },
            container_name: container.map(String::from),
        });
        flatten_symbols(uri, &node.children, Some(&node.name), result);
    }
}

fn symbol_kind(node: &OutlineNode) -> SymbolKind {
    match node.kind {
        // A forward or external declaration has no body; show it the way
        // editors show an interface member.
        NodeKind::Procedure if node.detail.is_some() => SymbolKind::INTERFACE,
        NodeKind::Procedure | NodeKind::MainBody => SymbolKind::FUNCTION,
        NodeKind::SubProcedure => SymbolKind::METHOD,
        NodeKind::Section => SymbolKind::NAMESPACE,
        NodeKind::Page => SymbolKind::STRING,
    }
}

fn convert_position(position: language::Position) -> lsp_types::Position {
    lsp_types::Position {
        line: position.line,
        character: position.character,
    }
}

fn convert_range(range: language::Range) -> lsp_types::Range {
    lsp_types::Range {
        start: convert_position(range.start),
        end: convert_position(range.end),
    }
}
