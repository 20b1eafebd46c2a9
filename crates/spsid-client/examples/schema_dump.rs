//! Fetch the SPSID schema and print it
//!
//! The endpoint comes from the first argument, the `SPSIDGUI_DB_URL`
//! environment variable, or the local default, in that order.
//!
//! Usage: cargo run --example schema_dump -- http://spsid.example.net:8080/rpc

use spsid_client::SpsidClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let url = std::env::args().nth(1);
    let client = SpsidClient::new(url.as_deref())?;
    println!("Endpoint: {}", client.endpoint());

    let schema = client.get_schema().await?;
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
