use std::io;

use whatsapp_gateway::{GatewayClient, MessageText, PhoneNumber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let destination = std::env::var("WHATSAPP_DESTINATION").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WHATSAPP_DESTINATION environment variable is required",
        )
    })?;
    let message = std::env::var("WHATSAPP_MESSAGE")
        .unwrap_or_else(|_| "Hello from the whatsapp-gateway demo.".to_owned());

    // Reads WHATSAPP_API_KEY and WHATSAPP_BASE_URL.
    let client = GatewayClient::from_env();
    let text = MessageText::new(message)?;
    let destination = PhoneNumber::new(destination);

    let result = client.send_message(&text, Some(&destination)).await?;
    println!(
        "success: {}, message_id: {:?}, http_status: {:?}, error: {:?}",
        result.success, result.message_id, result.http_status, result.error
    );

    Ok(())
}
