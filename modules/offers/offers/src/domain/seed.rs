use offers_sdk::NftOffer;

/// Offers running in the store.
#[must_use]
pub fn active_offers() -> Vec<NftOffer> {
    vec![
        NftOffer::new(1, "Buy 3 Nfts and get the 4th for free!"),
        NftOffer::new(
            2,
            "Save 20% on your first purchase with coupon code NFTNEWBIE!",
        ),
        NftOffer::new(3, "Buy 7 NFTs and get 3 more for free!"),
        NftOffer::new(
            4,
            "Subscribe to our newsletter and get the best deals directly in your inbox!",
        ),
        NftOffer::new(
            5,
            "Start selling your NFTs in our store and earn up to 30% more during the first year!",
        ),
    ]
}
