use cookiebridge::base::error::BridgeError;
use cookiebridge::bridge::CookieBridge;
use cookiebridge::cookies::memory::MemoryCookieStore;
use cookiebridge::cookies::options::CookieWriteOptions;

#[tokio::main]
async fn main() -> Result<(), BridgeError> {
    let bridge = CookieBridge::new(MemoryCookieStore::for_document("example.com", "/"));

    println!("--- Step 1: Setting cookie ---");
    let options = CookieWriteOptions::new().path("/").max_age(3600);
    bridge.write_verified(&options, "test_cookie", "hello cookiebridge").await?;
    println!("Step 1 Header: {}", bridge.read_all().await);

    println!("\n--- Step 2: Verifying cookie ---");
    println!("Step 2 Values: {:?}", bridge.read_decoded("test_cookie").await);

    println!("\n--- Step 3: Deleting cookie ---");
    let options = CookieWriteOptions::new().path("/").max_age(0);
    bridge.write_verified(&options, "test_cookie", "").await?;
    println!("Step 3 Lookup: {:?}", bridge.lookup("test_cookie").await);

    Ok(())
}
