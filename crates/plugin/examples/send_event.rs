//! Fire a real trigger event using in-memory host backends.
//!
//! Run with:
//! `MAKER_EVENT=my_event MAKER_KEY=... cargo run -p hookline-plugin --example send_event`

use std::sync::Arc;

use hookline_core::ClientRecord;
use hookline_host::{ACCESS_KEY, EVENT_KEY, MemoryConfig, MemoryDirectory, MemoryStorage};
use hookline_plugin::{EventPlugin, Service};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let event = std::env::var("MAKER_EVENT").unwrap_or_else(|_| "hookline_demo".into());
    let key = std::env::var("MAKER_KEY").unwrap_or_else(|_| {
        eprintln!("MAKER_KEY not set; the request will be rejected by the endpoint");
        "demo-key".into()
    });

    // Plugin configuration, as the host platform would persist it.
    let config = MemoryConfig::new();
    config.set(EVENT_KEY, event);
    config.set(ACCESS_KEY, key);
    config.set("value1", "email");
    config.set("value2", "clientid");
    config.set("value3", "city");

    // A sample client record in the directory.
    let directory = MemoryDirectory::new();
    let record: ClientRecord = [
        ("clientid", "42"),
        ("email", "ada@example.com"),
        ("city", "Montreal"),
    ]
    .into_iter()
    .collect();
    directory.insert("42", record);

    let storage = Arc::new(MemoryStorage::new());
    let plugin = EventPlugin::new(Arc::new(directory), Arc::new(config), storage);

    let service = Service::new("svc-1", "42");
    match plugin.on_service_created(&service).await {
        Ok(()) => println!("event dispatched"),
        Err(err) => {
            eprintln!("dispatch failed: {err}");
            return;
        }
    }

    let summary = plugin
        .render_summary(&service)
        .await
        .expect("summary should render after a successful dispatch");
    println!("\n{summary}");
}
