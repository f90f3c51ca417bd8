use crate::proto;

/// A promotional offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NftOffer {
    pub id: i32,
    pub description: String,
}

impl NftOffer {
    #[must_use]
    pub fn new(id: i32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

impl From<&NftOffer> for proto::NftOffer {
    fn from(offer: &NftOffer) -> Self {
        Self {
            id: offer.id,
            description: offer.description.clone(),
        }
    }
}

impl From<proto::NftOffer> for NftOffer {
    fn from(offer: proto::NftOffer) -> Self {
        Self {
            id: offer.id,
            description: offer.description,
        }
    }
}
