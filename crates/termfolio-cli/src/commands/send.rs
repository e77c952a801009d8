use anyhow::{anyhow, Result};

use termfolio_core::contact::ContactMessage;
use termfolio_core::relay::RelayClient;
use termfolio_core::AppConfig;

/// Send a contact message from the command line, with the same
/// validation the form applies.
pub async fn run(
    config: &AppConfig,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<()> {
    let message = ContactMessage {
        name,
        email,
        subject,
        message,
    };

    let errors = message.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("error: {}", error.message);
        }
        return Err(anyhow!("message failed validation"));
    }

    let relay = RelayClient::new(config.relay.clone())?;
    relay.send(&message).await?;
    println!("Message sent successfully!");
    Ok(())
}
