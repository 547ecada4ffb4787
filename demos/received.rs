use std::io;

use smsc::SmscClient;

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
    let last_id = std::env::var("SMSC_LAST_ID")
        .ok()
        .map(|value| value.parse::<u64>())
        .transpose()?
        .unwrap_or(0);

    let client = SmscClient::new(alias, api_key);
    for message in client.received(last_id).await?.unwrap_or_default() {
        println!(
            "{} {} {}: {}",
            message.id,
            message.fecha.as_deref().unwrap_or("-"),
            message.celular.as_deref().unwrap_or("-"),
            message.mensaje.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
