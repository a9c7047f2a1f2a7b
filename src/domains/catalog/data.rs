//! The static travel datasets.
//!
//! Destination ids are unique lower-case slugs; the catalog order below is
//! the order every listing and search result preserves.

use super::store::{Destination, TipCategory};

pub(super) const DESTINATIONS: &[Destination] = &[
    Destination {
        id: "paris",
        name: "Paris, France",
        description: "The City of Light, famous for the Eiffel Tower, Louvre Museum, and romantic atmosphere",
        attractions: &[
            "Eiffel Tower",
            "Louvre Museum",
            "Notre-Dame Cathedral",
            "Arc de Triomphe",
            "Champs-Élysées",
        ],
        best_time_to_visit: "April to June, September to October",
        average_cost: "$150-300 per day",
        climate: "Temperate oceanic climate",
    },
    Destination {
        id: "tokyo",
        name: "Tokyo, Japan",
        description: "A vibrant metropolis blending ultra-modern with traditional culture",
        attractions: &[
            "Tokyo Skytree",
            "Senso-ji Temple",
            "Shibuya Crossing",
            "Meiji Shrine",
            "Tsukiji Market",
        ],
        best_time_to_visit: "March to May, September to November",
        average_cost: "$100-250 per day",
        climate: "Humid subtropical climate",
    },
    Destination {
        id: "newyork",
        name: "New York City, USA",
        description: "The Big Apple, a global hub of culture, finance, and entertainment",
        attractions: &[
            "Statue of Liberty",
            "Central Park",
            "Times Square",
            "Empire State Building",
            "Brooklyn Bridge",
        ],
        best_time_to_visit: "April to June, September to November",
        average_cost: "$200-400 per day",
        climate: "Humid subtropical climate",
    },
    Destination {
        id: "barcelona",
        name: "Barcelona, Spain",
        description: "Known for its art, architecture, and Mediterranean beaches",
        attractions: &[
            "Sagrada Familia",
            "Park Güell",
            "La Rambla",
            "Gothic Quarter",
            "Casa Batlló",
        ],
        best_time_to_visit: "May to June, September to October",
        average_cost: "$100-200 per day",
        climate: "Mediterranean climate",
    },
    Destination {
        id: "sydney",
        name: "Sydney, Australia",
        description: "Famous for its harbor, opera house, and beautiful beaches",
        attractions: &[
            "Sydney Opera House",
            "Sydney Harbour Bridge",
            "Bondi Beach",
            "Taronga Zoo",
            "Royal Botanic Garden",
        ],
        best_time_to_visit: "September to November, March to May",
        average_cost: "$150-300 per day",
        climate: "Humid subtropical climate",
    },
];

pub(super) const fn tips_for(category: TipCategory) -> &'static [&'static str] {
    match category {
        TipCategory::Packing => &[
            "Pack light and versatile clothing",
            "Bring a portable charger and universal adapter",
            "Keep important documents in a waterproof bag",
            "Pack medication in carry-on luggage",
            "Roll clothes to save space",
        ],
        TipCategory::Safety => &[
            "Keep copies of important documents",
            "Register with your embassy",
            "Get travel insurance",
            "Stay aware of your surroundings",
            "Keep emergency contacts accessible",
        ],
        TipCategory::Budgeting => &[
            "Set a daily spending limit",
            "Use local currency",
            "Eat where locals eat",
            "Book accommodations in advance",
            "Use public transportation",
        ],
        TipCategory::Cultural => &[
            "Learn basic phrases in the local language",
            "Research local customs and etiquette",
            "Dress appropriately for the culture",
            "Be respectful of local traditions",
            "Try local cuisine",
        ],
    }
}
