// List navigation driver
//
// Reads one JSON call per line from stdin and writes one JSON result per line:
//   {"conversation": "c1", "api": "ListNav.getPage", "arguments": {...}}
// Mode and page sizes come from LIST_NAV_* environment variables.
// `--describe` prints the API catalog and exits.

use std::sync::Arc;

use anyhow::{Context, Result};
use list_navigation::api::ErrorBody;
use list_navigation::{
    ApiRouter, ConversationId, ListNavError, ListReference, MemorySessionStore, NavigatorOptions,
    PageNavigator, ProviderRegistry, SharedProvider, VecListProvider,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Deserialize)]
struct Call {
    conversation: ConversationId,
    api: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Reply {
    Ok { response: Value },
    Err(ErrorBody),
}

fn demo_registry() -> ProviderRegistry {
    let numbers: Vec<u32> = (1..=42).collect();

    ProviderRegistry::builder()
        .provider("numbers", VecListProvider::new(numbers))
        .factory(
            "catalog",
            |list_ref: &ListReference| -> list_navigation::Result<SharedProvider> {
                let category = list_ref.param("category").unwrap_or("all").to_string();
                let items: Vec<Value> = (1..=30)
                    .map(|i| json!({ "id": format!("{category}-{i}"), "name": format!("{category} item {i}") }))
                    .collect();
                Ok(Arc::new(VecListProvider::with_instance_id(
                    format!("catalog:{category}"),
                    items,
                )))
            },
        )
        .build()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let options = NavigatorOptions::from_env().context("reading LIST_NAV_* configuration")?;
    log::info!("Starting list navigation driver in {:?} mode", options.mode);

    let navigator = Arc::new(PageNavigator::new(
        demo_registry(),
        Arc::new(MemorySessionStore::new()),
        options,
    ));
    let router = ApiRouter::standard(navigator);

    let mut stdout = tokio::io::stdout();

    if std::env::args().any(|arg| arg == "--describe") {
        let catalog = serde_json::to_string_pretty(&router.describe())?;
        stdout.write_all(catalog.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<Call>(&line) {
            Ok(call) => match router
                .dispatch(&call.conversation, &call.api, call.arguments)
                .await
            {
                Ok(response) => Reply::Ok { response },
                Err(e) => {
                    log::debug!("{} {} failed: {}", call.conversation, call.api, e);
                    Reply::Err(ErrorBody::from(&e))
                }
            },
            Err(e) => Reply::Err(ErrorBody::from(&ListNavError::from(e))),
        };

        let mut out = serde_json::to_vec(&reply)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    Ok(())
}
