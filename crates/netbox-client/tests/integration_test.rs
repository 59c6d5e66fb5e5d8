//! Integration tests for NetBox client
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_URL and NETBOX_TOKEN environment variables to run.

use netbox_client::{NetBoxClient, PortListParams, PortRecord};

fn client() -> anyhow::Result<NetBoxClient> {
    let url = std::env::var("NETBOX_URL")
        .unwrap_or_else(|_| "http://localhost:8001".to_string());
    let token = std::env::var("NETBOX_TOKEN")?;
    Ok(NetBoxClient::new(url, token)?)
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_list_front_ports() -> anyhow::Result<()> {
    let client = client()?;

    let page = client.list_front_ports(&PortListParams::new()).await?;
    assert!(page.results.len() as u64 <= page.count);

    println!("Found {} front ports", page.count);
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_list_rear_ports_for_first_device() -> anyhow::Result<()> {
    let client = client()?;

    let all = client.list_rear_ports(&PortListParams::new()).await?;
    let Some(first) = all.results.first() else {
        println!("No rear ports in this NetBox");
        return Ok(());
    };

    let params = PortListParams {
        device_id: Some(first.device_id().to_string()),
        ..Default::default()
    };
    let page = client.list_rear_ports(&params).await?;
    assert!(page.results.iter().all(|p| p.device_id() == first.device_id()));
    Ok(())
}
