use serde_json::{json, Value};

/// The catalog served by the `mock-server` binary.
pub fn seed_records() -> Vec<(i64, Value)> {
    vec![
        (
            1,
            json!({
                "id": 1,
                "name": "Meryl Streep",
                "birth_year": 1949,
                "biography": "Stage-trained performer known for her range and command of accents.",
                "image": "https://images.example.com/meryl-streep.jpg",
                "most_famous_movies": ["Sophie's Choice", "The Iron Lady", "The Devil Wears Prada"],
                "awards": "3 Academy Awards, 8 Golden Globes",
                "nationality": "American"
            }),
        ),
        (
            2,
            json!({
                "id": 2,
                "name": "Audrey Hepburn",
                "birth_year": 1929,
                "death_year": 1993,
                "biography": "Film and fashion icon, later a UNICEF Goodwill Ambassador.",
                "image": "https://images.example.com/audrey-hepburn.jpg",
                "most_famous_movies": ["Roman Holiday", "Breakfast at Tiffany's", "My Fair Lady"],
                "awards": "1 Academy Award, 1 Tony Award",
                "nationality": "British"
            }),
        ),
        (
            3,
            json!({
                "id": 3,
                "name": "Cate Blanchett",
                "birth_year": 1969,
                "biography": "Australian actress and former co-artistic director of the Sydney Theatre Company.",
                "image": "https://images.example.com/cate-blanchett.jpg",
                "most_famous_movies": ["Elizabeth", "Blue Jasmine", "Tár"],
                "awards": "2 Academy Awards",
                "nationality": "Australian"
            }),
        ),
        (
            4,
            json!({
                "id": 4,
                "name": "Natalie Portman",
                "birth_year": 1981,
                "biography": "Born in Jerusalem, raised in the United States.",
                "image": "https://images.example.com/natalie-portman.jpg",
                "most_famous_movies": ["Léon: The Professional", "V for Vendetta", "Black Swan"],
                "awards": "1 Academy Award",
                "nationality": "Israeli-American"
            }),
        ),
        (
            5,
            json!({
                "id": 5,
                "name": "Charlize Theron",
                "birth_year": 1975,
                "biography": "Actress and producer from Benoni.",
                "image": "https://images.example.com/charlize-theron.jpg",
                "most_famous_movies": ["Monster", "Mad Max: Fury Road", "North Country"],
                "awards": "1 Academy Award",
                "nationality": "South African"
            }),
        ),
        (
            6,
            json!({
                "id": 6,
                "name": "Marion Cotillard",
                "birth_year": 1975,
                "biography": "French actress acclaimed for her portrayal of Édith Piaf.",
                "image": "https://images.example.com/marion-cotillard.jpg",
                "most_famous_movies": ["La Vie en Rose", "Inception", "Rust and Bone"],
                "awards": "1 Academy Award",
                "nationality": "French"
            }),
        ),
        (
            7,
            json!({
                "id": 7,
                "name": "Bae Doona",
                "birth_year": 1979,
                "biography": "South Korean actress working across Korean and international productions.",
                "image": "https://images.example.com/bae-doona.jpg",
                "most_famous_movies": ["The Host", "Air Doll", "Cloud Atlas"],
                "awards": "Blue Dragon Film Award",
                "nationality": "South Korean"
            }),
        ),
    ]
}
