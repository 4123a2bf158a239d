use lsp_server::Connection;
use lsp_types::{
    InitializeParams, OneOf, ServerCapabilities, TextDocumentSyncCapability, TextDocumentSyncKind,
};
use tracing::{debug, info};

mod server;

pub fn run_language_server() {
    debug!("Starting Prodel Language Server");

    let (connection, threads) = Connection::stdio();

    let capabilities = serde_json::to_value(ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
        document_symbol_provider: Some(OneOf::Left(true)),
        workspace_symbol_provider: Some(OneOf::Left(true)),
        ..Default::default()
    })
    .unwrap();

    // extract any initialization parameters passed from the editor.
    if let Ok(params) = connection.initialize(capabilities) {
        let params = serde_json::from_value::<InitializeParams>(params).unwrap();

        if let Some(client) = &params.client_info {
            debug!("Connected to {}", client.name);
        }

        info!("Prodel Language Server starting on stdin");

        let server = server::ProdelLanguageServer::new();

        if let Err(e) = server.run(connection) {
            eprintln!("Server error: {}", e);
        }
    }

    threads
        .join()
        .unwrap();
}
