use whatsapp_gateway::GatewayClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads WHATSAPP_API_KEY and WHATSAPP_BASE_URL.
    let client = GatewayClient::from_env();
    let account_id = client.account_id().await?;
    println!("account_id: {}", account_id.as_str());
    Ok(())
}
