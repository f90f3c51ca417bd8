//! The product catalog served by this process.

use catalog_sdk::{CatalogItem, Price};

fn item(
    id: &str,
    title: &str,
    author: &str,
    description: &str,
    rating: u8,
    price: Price,
) -> CatalogItem {
    CatalogItem {
        id: id.to_owned(),
        title: title.to_owned(),
        author: author.to_owned(),
        description: description.to_owned(),
        rating,
        price,
    }
}

/// The twelve electric sheep on sale.
#[must_use]
pub fn seed_catalog() -> Vec<CatalogItem> {
    vec![
        item(
            "electric-sheep01",
            "Sheeps'R Us",
            "Stephan Doe",
            "Stephan's psychodelic color palette takes NFTs to the next level.",
            3,
            Price::new(5, 0),
        ),
        item(
            "electric-sheep02",
            "Colourful Nightmare",
            "Jane Smith",
            "Simple but impactful, this masterpiece is worth every single cent.",
            5,
            Price::new(7, 75),
        ),
        item(
            "electric-sheep03",
            "Eat that sheep!",
            "AuroraNFT",
            "AuroraNFT is back with incredible colors in his second year with us!",
            2,
            Price::new(22, 0),
        ),
        item(
            "electric-sheep04",
            "Sh33p 1.3",
            "Julian Fake",
            "Challenging piece of art whose eyes are always watching!",
            1,
            Price::new(34, 50),
        ),
        item(
            "electric-sheep05",
            "Count them if you dare!",
            "Mike O'Phone",
            "Another psychodelic work inviting us to try counting the sheep. Can you?",
            4,
            Price::new(7, 0),
        ),
        item(
            "electric-sheep06",
            "My dear NFT sheep",
            "Evo Celatti",
            "Evo offers us this crazy logo that you shouldn't miss.",
            3,
            Price::new(4, 0),
        ),
        item(
            "electric-sheep07",
            "Electrosheep",
            "AuroraNFT",
            "Monochrome NFT that will look great as your wallpaper, too.",
            5,
            Price::new(2, 99),
        ),
        item(
            "electric-sheep08",
            "Beep the Sheep",
            "Mike O'Phone",
            "Synthetic art at its maximum exponent.",
            2,
            Price::new(1, 25),
        ),
        item(
            "electric-sheep09",
            "Sheepotronic",
            "Jane Smith",
            "Funny and happy NFT that will make you smile for sure!",
            1,
            Price::new(15, 0),
        ),
        item(
            "electric-sheep10",
            "Counting NFT sheeps",
            "Evo Celatti",
            "Evo is back with this dark and disturbing work.",
            4,
            Price::new(3, 15),
        ),
        item(
            "electric-sheep11",
            "Decrypt da flock",
            "Stephan Doe",
            "Will you be able to understand the message? We are still trying...",
            3,
            Price::new(8, 0),
        ),
        item(
            "electric-sheep12",
            "Electroflock",
            "Julian Fake",
            "The floating sheep can help you in your mindfulness sessions",
            1,
            Price::new(9, 50),
        ),
    ]
}
