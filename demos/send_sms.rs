use std::io;

use smsc::SmscClient;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let alias = required_env("SMSC_ALIAS")?;
    let api_key = required_env("SMSC_APIKEY")?;
    let area = required_env("SMSC_AREA")?;
    let local = std::env::var("SMSC_LOCAL").ok();
    let message = std::env::var("SMSC_MESSAGE")
        .unwrap_or_else(|_| "Hola desde el ejemplo de smsc.".to_owned());

    let mut client = SmscClient::new(alias, api_key);
    client.add_recipient(area, local.as_deref());
    client.set_message(message);
    if let Ok(priority) = std::env::var("SMSC_PRIORITY") {
        client.set_priority(priority.parse()?)?;
    }

    match client.send().await? {
        Some(response) => println!("id: {:?}, sms: {:?}", response.id, response.sms),
        None => println!("SMSC returned no response"),
    }

    Ok(())
}
