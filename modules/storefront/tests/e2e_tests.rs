#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Storefront against real catalog and offers servers on loopback ports.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use catalog::CatalogModule;
use nftstore_transport_grpc::GrpcServerConfig;
use offers::OffersModule;
use storefront::config::UpstreamConfig;
use storefront::{StorefrontConfig, StorefrontModule};

async fn spawn_backends(cancel: &CancellationToken) -> (SocketAddr, SocketAddr) {
    let catalog_listener = nftstore_transport_grpc::bind("127.0.0.1:0".parse().unwrap())
        .await
        .unwrap();
    let offers_listener = nftstore_transport_grpc::bind("127.0.0.1:0".parse().unwrap())
        .await
        .unwrap();
    let catalog_addr = catalog_listener.local_addr().unwrap();
    let offers_addr = offers_listener.local_addr().unwrap();

    let catalog = CatalogModule::new(&catalog::CatalogConfig {
        server: GrpcServerConfig {
            bind_addr: catalog_addr,
            ..Default::default()
        },
        ..Default::default()
    });
    let token = cancel.clone();
    tokio::spawn(async move { catalog.run(catalog_listener, token).await });

    let offers = OffersModule::new(&offers::OffersConfig {
        server: GrpcServerConfig {
            bind_addr: offers_addr,
            ..Default::default()
        },
        ..Default::default()
    });
    let token = cancel.clone();
    tokio::spawn(async move { offers.run(offers_listener, token).await });

    (catalog_addr, offers_addr)
}

fn storefront_config(catalog: SocketAddr, offers: SocketAddr) -> StorefrontConfig {
    let upstream = |addr: SocketAddr| UpstreamConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        ..UpstreamConfig::localhost(addr.port())
    };
    StorefrontConfig {
        catalog: upstream(catalog),
        offers: upstream(offers),
        ..Default::default()
    }
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn product_links(body: &str) -> HashSet<&str> {
    body.match_indices("href=\"/product/")
        .filter_map(|(at, m)| {
            let rest = &body[at + m.len()..];
            rest.split('"').next()
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn pages_compose_both_services() {
    let cancel = CancellationToken::new();
    let (catalog, offers) = spawn_backends(&cancel).await;
    let module = StorefrontModule::new(&storefront_config(catalog, offers)).unwrap();

    let (status, body) = get(module.router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product_links(&body).len(), 12);
    assert!(body.contains("data-offer-id="));

    let (status, body) = get(module.router(), "/product/electric-sheep05").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Count them if you dare!"));

    let (status, _) = get(module.router(), "/product/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    cancel.cancel();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_homepages_are_consistent() {
    let cancel = CancellationToken::new();
    let (catalog, offers) = spawn_backends(&cancel).await;
    let module = Arc::new(StorefrontModule::new(&storefront_config(catalog, offers)).unwrap());

    let tasks: Vec<_> = (0..100)
        .map(|_| {
            let router = module.router();
            tokio::spawn(async move { get(router, "/").await })
        })
        .collect();

    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(product_links(&body).len(), 12);
        assert_eq!(body.matches("class=\"offer\"").count(), 1);
    }

    cancel.cancel();
}

#[tokio::test]
async fn unreachable_backends_are_bad_gateway() {
    let dead = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut cfg = storefront_config(dead, dead);
    cfg.catalog.connect_timeout = Duration::from_millis(500);
    cfg.offers.connect_timeout = Duration::from_millis(500);
    let module = StorefrontModule::new(&cfg).unwrap();

    let (status, _) = get(module.router(), "/").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
