//! Integration tests for `ContentClient` using wiremock HTTP mocks.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gilded_hamper_core::{AssetId, EntryId};
use gilded_hamper_storefront::config::ContentfulConfig;
use gilded_hamper_storefront::contentful::{ContentClient, ContentUnavailable};

fn test_config() -> ContentfulConfig {
    ContentfulConfig {
        space_id: "test-space".to_owned(),
        access_token: SecretString::from("test-token"),
    }
}

fn test_client(base_url: &str) -> ContentClient {
    let config = test_config();
    ContentClient::with_base_url(Some(&config), base_url)
}

#[tokio::test]
async fn fetch_entry_resolves_links_from_manifest() {
    let server = MockServer::start().await;

    let body = json!({
        "sys": { "id": "hero-entry", "type": "Entry" },
        "fields": {
            "maintitle1": "Gifts, thoughtfully",
            "heroImage": { "sys": { "type": "Link", "linkType": "Asset", "id": "img1" } }
        },
        "includes": {
            "Asset": [
                {
                    "sys": { "id": "img1", "type": "Asset" },
                    "fields": { "file": { "url": "//images.example.net/hero.jpg" } }
                }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/entries/hero-entry"))
        .and(query_param("access_token", "test-token"))
        .and(query_param("include", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entry = client
        .fetch_entry(&EntryId::new("hero-entry"))
        .await
        .expect("entry should parse");

    assert_eq!(entry.id, EntryId::new("hero-entry"));
    assert_eq!(
        entry.field("heroImage"),
        Some(&json!("https://images.example.net/hero.jpg"))
    );
    // Non-asset fields pass through untouched.
    assert_eq!(entry.field("maintitle1"), Some(&json!("Gifts, thoughtfully")));
}

#[tokio::test]
async fn fetch_entry_falls_back_to_direct_asset_fetch() {
    let server = MockServer::start().await;

    let entry_body = json!({
        "sys": { "id": "gal-entry", "type": "Entry" },
        "fields": {
            "galleryImages": [
                { "sys": { "type": "Link", "linkType": "Asset", "id": "img9" } }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/entries/gal-entry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&entry_body))
        .mount(&server)
        .await;

    let asset_body = json!({
        "sys": { "id": "img9", "type": "Asset" },
        "fields": { "file": { "url": "//images.example.net/nine.jpg" } }
    });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/assets/img9"))
        .and(query_param("access_token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&asset_body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entry = client
        .fetch_entry(&EntryId::new("gal-entry"))
        .await
        .expect("entry should parse");

    assert_eq!(
        entry.field("galleryImages"),
        Some(&json!(["https://images.example.net/nine.jpg"]))
    );
}

#[tokio::test]
async fn unresolvable_link_keeps_its_raw_value() {
    let server = MockServer::start().await;

    let entry_body = json!({
        "sys": { "id": "gal-entry", "type": "Entry" },
        "fields": {
            "image": { "sys": { "type": "Link", "linkType": "Asset", "id": "gone" } }
        }
    });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/entries/gal-entry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&entry_body))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/assets/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entry = client
        .fetch_entry(&EntryId::new("gal-entry"))
        .await
        .expect("entry should parse");

    // The reference cannot be resolved, so the raw link value survives.
    assert_eq!(
        entry.field("image"),
        Some(&json!({ "sys": { "type": "Link", "linkType": "Asset", "id": "gone" } }))
    );
}

#[tokio::test]
async fn fetch_entries_shares_the_collection_manifest() {
    let server = MockServer::start().await;

    let body = json!({
        "items": [
            {
                "sys": { "id": "p1", "type": "Entry" },
                "fields": {
                    "name": "Glam Starter Kit",
                    "price": 999,
                    "product_image": { "sys": { "type": "Link", "linkType": "Asset", "id": "imgA" } }
                }
            },
            {
                "sys": { "id": "p2", "type": "Entry" },
                "fields": { "name": "Chic Essentials Box", "price": 799 }
            }
        ],
        "includes": {
            "Asset": [
                {
                    "sys": { "id": "imgA", "type": "Asset" },
                    "fields": { "file": { "url": "//images.example.net/p1.jpg" } }
                }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/entries"))
        .and(query_param("content_type", "product"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client
        .fetch_entries("product", 100)
        .await
        .expect("entries should parse");

    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries.first().and_then(|e| e.field("product_image")),
        Some(&json!("https://images.example.net/p1.jpg"))
    );
}

#[tokio::test]
async fn fetch_asset_prefixes_protocol_relative_urls() {
    let server = MockServer::start().await;

    let body = json!({
        "sys": { "id": "imgZ", "type": "Asset" },
        "fields": { "file": { "url": "//images.example.net/z.jpg" } }
    });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/assets/imgZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let url = client
        .fetch_asset(&AssetId::new("imgZ"))
        .await
        .expect("asset should resolve");

    assert_eq!(url, "https://images.example.net/z.jpg");
}

#[tokio::test]
async fn fetch_asset_without_file_is_missing() {
    let server = MockServer::start().await;

    let body = json!({ "sys": { "id": "imgZ", "type": "Asset" }, "fields": {} });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/assets/imgZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_asset(&AssetId::new("imgZ"))
        .await
        .expect_err("asset has no file");

    assert!(matches!(err, ContentUnavailable::Missing(_)));
}

#[tokio::test]
async fn asset_search_returns_urls_and_skips_fileless_assets() {
    let server = MockServer::start().await;

    let body = json!({
        "items": [
            {
                "sys": { "id": "g1", "type": "Asset" },
                "fields": { "file": { "url": "//images.example.net/g1.jpg" } }
            },
            { "sys": { "id": "g2", "type": "Asset" }, "fields": {} },
            {
                "sys": { "id": "g3", "type": "Asset" },
                "fields": { "file": { "url": "https://images.example.net/g3.jpg" } }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/assets"))
        .and(query_param("query", "GalleryImage"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let urls = client
        .fetch_assets_by_query("GalleryImage", 50)
        .await
        .expect("asset search should parse");

    assert_eq!(
        urls,
        vec![
            "https://images.example.net/g1.jpg",
            "https://images.example.net/g3.jpg",
        ]
    );
}

#[tokio::test]
async fn distinct_category_keys_are_sorted_and_unique() {
    let server = MockServer::start().await;

    let body = json!({
        "items": [
            { "sys": { "id": "p1" }, "fields": { "category": "womensday" } },
            { "sys": { "id": "p2" }, "fields": { "category": "spa" } },
            { "sys": { "id": "p3" }, "fields": { "category": "womensday" } },
            { "sys": { "id": "p4" }, "fields": { "category": "birthday" } },
            { "sys": { "id": "p5" }, "fields": {} }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/entries"))
        .and(query_param("content_type", "product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let keys = client
        .fetch_distinct_category_keys()
        .await
        .expect("keys should parse");

    assert_eq!(keys, vec!["birthday", "spa", "womensday"]);
}

#[tokio::test]
async fn no_product_entries_means_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/entries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_distinct_category_keys()
        .await
        .expect_err("empty catalog");

    assert!(matches!(err, ContentUnavailable::Missing(_)));
}

#[tokio::test]
async fn unconfigured_client_short_circuits() {
    let client = ContentClient::new(None);
    assert!(!client.is_configured());

    let err = client
        .fetch_entry(&EntryId::new("anything"))
        .await
        .expect_err("no credentials");
    assert!(matches!(err, ContentUnavailable::NotConfigured));

    let err = client
        .fetch_assets_by_query("GalleryImage", 10)
        .await
        .expect_err("no credentials");
    assert!(matches!(err, ContentUnavailable::NotConfigured));
}

#[tokio::test]
async fn http_failure_becomes_status_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/entries/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_entry(&EntryId::new("gone"))
        .await
        .expect_err("server answered 404");

    assert!(matches!(
        err,
        ContentUnavailable::Status(status) if status.as_u16() == 404
    ));
}

#[tokio::test]
async fn malformed_body_becomes_parse_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/test-space/entries/bad"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_entry(&EntryId::new("bad"))
        .await
        .expect_err("body is not JSON");

    assert!(matches!(err, ContentUnavailable::Malformed(_)));
}
