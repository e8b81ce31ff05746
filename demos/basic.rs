//! Walkthrough of the four operations against the in-memory client.
//!
//! Run with `RUST_LOG=debug` to see the facade's log lines. Swap in
//! `RestClient::new(&StoreConfig::new(project_id, api_key))?` to talk to the
//! hosted service instead.

use docstore::{Collections, MemoryClient};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = Collections::new(MemoryClient::new());

    let id = store
        .add("users", json!({ "name": "Alice", "age": 30 }))
        .await?;
    println!("added user {}", id);

    for user in store.get("users").await? {
        println!("user {}: {:?}", user.id, user.fields);
    }

    store.update("users", &id, json!({ "age": 31 })).await?;
    println!("user {} had a birthday", id);

    store.remove("users", &id).await?;
    println!("users left: {}", store.get("users").await?.len());

    Ok(())
}
