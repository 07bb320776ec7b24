use cookiebridge::cookies::memory::MemoryCookieStore;
use cookiebridge::cookies::store::CookieStore;

#[test]
fn test_write_and_read() {
    let store = MemoryCookieStore::for_document("example.com", "/foo");
    store.write("foo=bar;path=/");

    assert_eq!(store.read(), "foo=bar");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_write_never_removes_other_cookies() {
    let store = MemoryCookieStore::new();
    store.write("a=1");
    store.write("b=2");
    store.write("c=3");

    assert_eq!(store.read(), "a=1; b=2; c=3");
}

#[test]
fn test_same_name_different_path_coexist() {
    let store = MemoryCookieStore::for_document("example.com", "/app/page");
    store.write("id=root;path=/");
    store.write("id=app;path=/app");

    // Longest path first
    assert_eq!(store.read(), "id=app; id=root");
}

#[test]
fn test_path_matching() {
    let store = MemoryCookieStore::for_document("example.com", "/foo/bar");
    store.write("root=val;path=/");
    store.write("foo=val;path=/foo");
    store.write("baz=val;path=/baz");

    let raw = store.read();
    assert!(raw.contains("root=val"));
    assert!(raw.contains("foo=val"));
    assert!(!raw.contains("baz=val"));
    assert_eq!(store.len(), 3);
}

#[test]
fn test_default_path_is_document_directory() {
    let store = MemoryCookieStore::for_document("example.com", "/docs/intro");
    store.write("scoped=1");

    assert_eq!(store.read(), "scoped=1");

    // Rewriting with an explicit path creates a second cookie
    store.write("scoped=2;path=/");
    assert_eq!(store.read(), "scoped=1; scoped=2");
}

#[test]
fn test_secure_flag() {
    let secure = MemoryCookieStore::for_document("example.com", "/");
    secure.write("sec=saved;secure");
    assert_eq!(secure.read(), "sec=saved");

    let insecure = MemoryCookieStore::for_document("example.com", "/").secure_origin(false);
    insecure.write("sec=saved;secure");
    assert_eq!(insecure.read(), "");
}

#[test]
fn test_domain_matching() {
    let store = MemoryCookieStore::for_document("a.example.com", "/");
    store.write("host=val");
    store.write("parent=val;domain=example.com");
    store.write("dotted=val;domain=.example.com");
    store.write("sibling=val;domain=b.example.com");
    store.write("evil=supercookie;domain=com");

    let raw = store.read();
    assert!(raw.contains("host=val"));
    assert!(raw.contains("parent=val"));
    assert!(raw.contains("dotted=val"));
    assert!(!raw.contains("sibling"));
    assert!(!raw.contains("evil"));
}

#[test]
fn test_expired_write_deletes() {
    let store = MemoryCookieStore::new();
    store.write("gone=soon;path=/");
    store.write("kept=1");
    store.write("gone=;path=/;expires=Thu, 01 Jan 1970 00:00:00 GMT");

    assert_eq!(store.read(), "kept=1");
}

#[test]
fn test_max_age_zero_deletes() {
    let store = MemoryCookieStore::new();
    store.write("gone=soon");
    store.write("gone=x; Max-Age=0");

    assert!(store.is_empty());
}

#[test]
fn test_deletion_must_match_path() {
    let store = MemoryCookieStore::new();
    store.write("id=1;path=/");
    store.write("id=;path=/other;expires=Thu, 01 Jan 1970 00:00:00 GMT");

    assert_eq!(store.read(), "id=1");
}

#[test]
fn test_future_expiry_is_kept() {
    let store = MemoryCookieStore::new();
    store.write("later=1;expires=Fri, 31 Dec 9999 23:59:59 GMT");

    assert_eq!(store.read(), "later=1");
}

#[test]
fn test_unparsable_directive_is_dropped() {
    let store = MemoryCookieStore::new();
    store.write("=nameless");
    store.write("");

    assert_eq!(store.read(), "");
}

#[test]
fn test_oversized_cookie_is_dropped() {
    let store = MemoryCookieStore::new();
    store.write(&format!("big={}", "x".repeat(5000)));

    assert!(store.is_empty());
}
