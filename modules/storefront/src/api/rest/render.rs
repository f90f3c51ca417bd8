//! HTML rendering for storefront pages.
//!
//! Every value taken from a downstream service is escaped before it reaches
//! the page.

use axum::http::StatusCode;
use catalog_sdk::CatalogItem;
use offers_sdk::NftOffer;

use crate::domain::{HomePage, ProductPage};

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
.offer{background:#ffe9a8;padding:1em;margin-bottom:1em}\
.grid{display:flex;flex-wrap:wrap;gap:1em}\
.item{border:1px solid #ccc;padding:1em;width:14em}";

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - NFT Store</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<h1><a href=\"/\">NFT Store</a></h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn offer_banner(offer: &NftOffer) -> String {
    format!(
        "<div class=\"offer\" data-offer-id=\"{}\">{}</div>",
        offer.id,
        escape(&offer.description)
    )
}

fn stars(rating: u8) -> String {
    "&#9733;".repeat(usize::from(rating))
}

fn item_card(item: &CatalogItem) -> String {
    format!(
        "<div class=\"item\">\n<h3><a href=\"/product/{id}\">{title}</a></h3>\n\
         <p>by {author}</p>\n<p>{stars}</p>\n<p class=\"price\">{price}</p>\n</div>",
        id = escape(&item.id),
        title = escape(&item.title),
        author = escape(&item.author),
        stars = stars(item.rating),
        price = item.price,
    )
}

#[must_use]
pub fn homepage(page: &HomePage) -> String {
    let cards: String = page.items.iter().map(item_card).collect();
    let body = format!(
        "{offer}\n<div class=\"grid\">\n{cards}\n</div>",
        offer = offer_banner(&page.offer),
    );
    layout("Home", &body)
}

#[must_use]
pub fn product_page(page: &ProductPage) -> String {
    let item = &page.item;
    let body = format!(
        "{offer}\n<div class=\"product\" data-product-id=\"{id}\">\n<h2>{title}</h2>\n\
         <p>by {author}</p>\n<p>{stars}</p>\n<p>{description}</p>\n\
         <p class=\"price\">{price}</p>\n</div>",
        offer = offer_banner(&page.offer),
        id = escape(&item.id),
        title = escape(&item.title),
        author = escape(&item.author),
        stars = stars(item.rating),
        description = escape(&item.description),
        price = item.price,
    );
    layout(&item.title, &body)
}

#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<div class=\"error\">\n<h2>{code} {reason}</h2>\n<p>{message}</p>\n</div>",
        code = status.as_u16(),
        message = escape(message),
    );
    layout(reason, &body)
}
