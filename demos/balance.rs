use std::io;

use smsc::{QueuePriority, SmscClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let alias = std::env::var("SMSC_ALIAS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_ALIAS environment variable is required",
        )
    })?;
    let api_key = std::env::var("SMSC_APIKEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_APIKEY environment variable is required",
        )
    })?;

    let client = SmscClient::new(alias, api_key);
    println!("no delays: {:?}", client.system_status().await?);
    println!("balance: {:?}", client.balance().await?);
    println!("queued: {:?}", client.queued(QueuePriority::All).await?);

    Ok(())
}
