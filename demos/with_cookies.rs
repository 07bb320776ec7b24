//! Cookie bridge example.
//!
//! Writes and reads cookies through the bridge over an in-memory store that
//! behaves like the browser's.

use cookiebridge::bridge::CookieBridge;
use cookiebridge::cookies::memory::MemoryCookieStore;
use cookiebridge::cookies::options::CookieWriteOptions;

fn main() {
    futures::executor::block_on(async {
        let bridge = CookieBridge::new(MemoryCookieStore::for_document("example.com", "/login"));

        // Structured write: the value is percent-encoded
        let options = CookieWriteOptions::new().path("/").secure(true);
        bridge.write(&options, "session_id", "abc 123").await;

        // Expires in a day
        let options = CookieWriteOptions::new().path("/").max_age(86_400);
        bridge.write(&options, "user_pref", "dark_mode").await;

        println!("Cookie header: {}", bridge.read_all().await);
        for entry in bridge.entries().await {
            println!("  {}={}", entry.name, entry.decoded_value());
        }

        // The browser refuses cookies on a public suffix, silently
        let options = CookieWriteOptions::new().domain("com");
        bridge.write(&options, "evil", "supercookie").await;
        println!(
            "\nValues for 'evil' after a public-suffix write (should be empty): {:?}",
            bridge.read("evil").await
        );
    });
}
