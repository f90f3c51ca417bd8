#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Router tests against fake downstream clients.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt; // for oneshot

use catalog_sdk::{CatalogClientV1, CatalogError, CatalogItem, CatalogQuery, Price};
use offers_sdk::{NftOffer, OffersClientV1, OffersError};
use storefront::StorefrontModule;
use storefront::domain::Service;

struct FakeCatalog(Result<Vec<CatalogItem>, CatalogError>);

#[async_trait]
impl CatalogClientV1 for FakeCatalog {
    async fn catalog(&self, query: CatalogQuery) -> Result<Vec<CatalogItem>, CatalogError> {
        let items = self.0.clone()?;
        Ok(match query {
            CatalogQuery::Sample { .. } => items,
            CatalogQuery::ById { product_id } => {
                items.into_iter().filter(|i| i.id == product_id).collect()
            }
        })
    }
}

struct FakeOffers(Result<Vec<NftOffer>, OffersError>);

#[async_trait]
impl OffersClientV1 for FakeOffers {
    async fn offer(&self, _max_results: u32) -> Result<Vec<NftOffer>, OffersError> {
        self.0.clone()
    }
}

fn sheep05() -> CatalogItem {
    CatalogItem {
        id: "electric-sheep05".to_owned(),
        title: "Count them if you dare!".to_owned(),
        author: "Mike O'Phone".to_owned(),
        description: "Another psychodelic work inviting us to try counting the sheep. Can you?"
            .to_owned(),
        rating: 4,
        price: Price::new(7, 0),
    }
}

fn offer() -> NftOffer {
    NftOffer::new(3, "Buy 7 NFTs and get 3 more for free!")
}

fn app(
    catalog: Result<Vec<CatalogItem>, CatalogError>,
    offers: Result<Vec<NftOffer>, OffersError>,
) -> axum::Router {
    let service = Service::new(
        Arc::new(FakeCatalog(catalog)),
        Arc::new(FakeOffers(offers)),
        12,
        Duration::from_secs(5),
    );
    StorefrontModule::from_service(Arc::new(service)).router()
}

async fn send(app: axum::Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn homepage_renders_items_and_offer() {
    let (status, body) = send(
        app(Ok(vec![sheep05()]), Ok(vec![offer()])),
        Method::GET,
        "/",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/product/electric-sheep05\""));
    assert!(body.contains("Buy 7 NFTs and get 3 more for free!"));
}

#[tokio::test]
async fn product_page_renders_item() {
    let (status, body) = send(
        app(Ok(vec![sheep05()]), Ok(vec![offer()])),
        Method::GET,
        "/product/electric-sheep05",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Count them if you dare!"));
    assert!(body.contains("Mike O&#39;Phone"));
    assert!(body.contains("$7.00"));
}

#[tokio::test]
async fn unknown_product_is_404() {
    let (status, body) = send(
        app(Ok(vec![sheep05()]), Ok(vec![offer()])),
        Method::GET,
        "/product/nonexistent",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404 Not Found"));
}

#[tokio::test]
async fn sampling_id_is_404() {
    let (status, _) = send(
        app(Ok(vec![sheep05()]), Ok(vec![offer()])),
        Method::GET,
        "/product/dummy",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn head_is_answered_without_body() {
    let (status, body) = send(
        app(Ok(vec![sheep05()]), Ok(vec![offer()])),
        Method::HEAD,
        "/product/electric-sheep05",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn missing_offer_is_500() {
    let (status, _) = send(app(Ok(vec![sheep05()]), Ok(Vec::new())), Method::GET, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unavailable_downstream_is_502() {
    let (status, body) = send(
        app(
            Err(CatalogError::Unavailable("tcp connect error".to_owned())),
            Ok(vec![offer()]),
        ),
        Method::GET,
        "/",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.contains("tcp connect error"));
}

#[tokio::test]
async fn downstream_deadline_is_504() {
    let (status, _) = send(
        app(
            Ok(vec![sheep05()]),
            Err(OffersError::DeadlineExceeded("Timeout expired".to_owned())),
        ),
        Method::GET,
        "/product/electric-sheep05",
    )
    .await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = send(
        app(Ok(vec![sheep05()]), Ok(vec![offer()])),
        Method::GET,
        "/cart",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
