use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Cuisine, MealTiming, RestaurantType};

/// Category to keyword list mapping. Declaration order is the tie-break order.
///
/// Keywords are lowercase literal substrings; multi-word phrases match as-is.
pub type KeywordTable<K> = &'static [(K, &'static [&'static str])];

/// Broad food groups, only used to backfill offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    Rice,
    Noodles,
    Bread,
    Seafood,
    Meat,
    Vegetable,
    Dessert,
    Beverages,
    Snacks,
    Spicy,
}

impl FoodCategory {
    /// Display-cased name used as an offering.
    pub fn display_name(&self) -> &'static str {
        match self {
            FoodCategory::Rice => "Rice",
            FoodCategory::Noodles => "Noodles",
            FoodCategory::Bread => "Bread",
            FoodCategory::Seafood => "Seafood",
            FoodCategory::Meat => "Meat",
            FoodCategory::Vegetable => "Vegetable",
            FoodCategory::Dessert => "Dessert",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Spicy => "Spicy",
        }
    }
}

/// Bucket keys for the three-way axes (meal weight, energy, noise, price).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

/// Bucket keys for the setting lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingBucket {
    FormalIndoor,
    FormalOutdoor,
    CasualIndoor,
    CasualOutdoor,
}

impl SettingBucket {
    pub fn is_formal(&self) -> bool {
        matches!(self, SettingBucket::FormalIndoor | SettingBucket::FormalOutdoor)
    }

    pub fn is_outdoor(&self) -> bool {
        matches!(self, SettingBucket::FormalOutdoor | SettingBucket::CasualOutdoor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Single-winner tables
// ─────────────────────────────────────────────────────────────────────────────

pub static RESTAURANT_TYPE_KEYWORDS: KeywordTable<RestaurantType> = &[
    (
        RestaurantType::Mamak,
        &[
            "mamak",
            "nasi kandar",
            "roti canai",
            "teh tarik",
            "maggi goreng",
            "thosai",
            "tosai",
            "murtabak",
            "line clear",
        ],
    ),
    (
        RestaurantType::Kopitiam,
        &[
            "kopitiam",
            "kopi",
            "kedai kopi",
            "white coffee",
            "old town",
            "kaya toast",
            "half boiled",
            "coffee shop",
        ],
    ),
    (
        RestaurantType::Hawker,
        &[
            "hawker",
            "food court",
            "medan selera",
            "gerai",
            "stall",
            "char kway teow",
            "food centre",
        ],
    ),
    (
        RestaurantType::Restaurant,
        &["restaurant", "restoran", "bistro", "eatery", "kitchen", "cafe", "café"],
    ),
    (
        RestaurantType::FastFood,
        &[
            "mcdonald",
            "kfc",
            "burger king",
            "subway",
            "pizza hut",
            "domino",
            "fast food",
            "marrybrown",
            "a&w",
            "texas chicken",
            "drive thru",
        ],
    ),
    (
        RestaurantType::Bakery,
        &[
            "bakery",
            "bakeri",
            "patisserie",
            "boulangerie",
            "pastry",
            "cake shop",
            "egg tart",
        ],
    ),
    (
        RestaurantType::Catering,
        &["catering", "katering", "banquet hall", "kenduri"],
    ),
    (
        RestaurantType::Buffet,
        &["buffet", "bufet", "all you can eat", "steamboat", "hotpot"],
    ),
    (
        RestaurantType::StreetFood,
        &[
            "pasar malam",
            "night market",
            "street food",
            "food truck",
            "roadside",
            "tepi jalan",
            "satay",
            "apam balik",
        ],
    ),
    (
        RestaurantType::FancyDining,
        &[
            "fine dining",
            "omakase",
            "tasting menu",
            "degustation",
            "michelin",
            "chef's table",
            "steakhouse",
            "wine bar",
        ],
    ),
];

pub static CUISINE_KEYWORDS: KeywordTable<Cuisine> = &[
    (
        Cuisine::Malaysian,
        &[
            "malaysian",
            "mamak",
            "teh tarik",
            "roti canai",
            "nasi kandar",
            "maggi goreng",
            "kopitiam",
            "milo",
        ],
    ),
    (
        Cuisine::Malay,
        &[
            "malay",
            "melayu",
            "nasi lemak",
            "rendang",
            "nasi campur",
            "nasi kerabu",
            "laksa",
            "satay",
            "ikan bakar",
            "kuih",
            "lemang",
            "ketupat",
            "masak lemak",
            "sambal",
        ],
    ),
    (
        Cuisine::Chinese,
        &[
            "chinese",
            "dim sum",
            "char siu",
            "chicken rice",
            "wantan",
            "wonton",
            "bak kut teh",
            "char kway teow",
            "yong tau foo",
            "hokkien",
            "cantonese",
            "hakka",
            "white coffee",
            "kaya toast",
            "claypot",
            "zi char",
        ],
    ),
    (
        Cuisine::Indian,
        &[
            "indian",
            "banana leaf",
            "thosai",
            "dosa",
            "naan",
            "tandoori",
            "biryani",
            "briyani",
            "chapati",
            "masala",
            "vadai",
            "idli",
            "thali",
        ],
    ),
    (
        Cuisine::Peranakan,
        &[
            "peranakan",
            "nyonya",
            "buah keluak",
            "pongteh",
            "pie tee",
            "jiu hu char",
        ],
    ),
    (
        Cuisine::Western,
        &[
            "western",
            "steak",
            "burger",
            "pasta",
            "pizza",
            "fish and chips",
            "chicken chop",
            "lamb chop",
            "grill",
            "sandwich",
            "spaghetti",
            "carbonara",
            "brunch",
        ],
    ),
    (
        Cuisine::Japanese,
        &[
            "japanese",
            "sushi",
            "ramen",
            "sashimi",
            "udon",
            "tempura",
            "bento",
            "donburi",
            "izakaya",
            "omakase",
            "teppanyaki",
            "yakitori",
        ],
    ),
    (
        Cuisine::Korean,
        &[
            "korean",
            "kimchi",
            "bibimbap",
            "bulgogi",
            "tteokbokki",
            "samgyeopsal",
            "jjajang",
        ],
    ),
    (
        Cuisine::Thai,
        &[
            "thai",
            "tom yam",
            "tom yum",
            "som tam",
            "green curry",
            "mango sticky rice",
            "moo kata",
        ],
    ),
    (
        Cuisine::Vietnamese,
        &["vietnamese", "pho", "banh mi", "bun cha", "spring roll"],
    ),
    (
        Cuisine::MiddleEastern,
        &[
            "middle eastern",
            "arab",
            "kebab",
            "shawarma",
            "hummus",
            "falafel",
            "mandi",
            "lebanese",
            "turkish",
            "persian",
        ],
    ),
    (
        Cuisine::Indonesian,
        &[
            "indonesian",
            "indonesia",
            "ayam penyet",
            "nasi padang",
            "bakso",
            "gado-gado",
            "soto",
            "rawon",
        ],
    ),
];

// ─────────────────────────────────────────────────────────────────────────────
// Scored tables
// ─────────────────────────────────────────────────────────────────────────────

/// Meal weight buckets: High = heavy, Medium = medium, Low = light.
pub static MEAL_WEIGHT_KEYWORDS: KeywordTable<Tier> = &[
    (
        Tier::High,
        &[
            "nasi lemak",
            "rendang",
            "nasi kandar",
            "biryani",
            "briyani",
            "nasi goreng",
            "mee goreng",
            "curry",
            "fried chicken",
            "burger",
            "steak",
            "banana leaf",
            "bak kut teh",
            "buffet",
            "murtabak",
            "claypot",
            "steamboat",
            "roast",
            "pork belly",
            "char kway teow",
        ],
    ),
    (
        Tier::Medium,
        &[
            "chicken rice",
            "wantan mee",
            "noodle",
            "soup",
            "laksa",
            "sandwich",
            "sushi",
            "pasta",
            "rice bowl",
            "dim sum",
            "roti canai",
            "ramen",
            "bento",
            "set lunch",
        ],
    ),
    (
        Tier::Low,
        &[
            "salad",
            "toast",
            "kaya",
            "kuih",
            "bread",
            "coffee",
            "kopi",
            "milk tea",
            "juice",
            "smoothie",
            "dessert",
            "ice cream",
            "cake",
            "pastry",
            "fruit",
            "cendol",
            "yogurt",
            "snack",
            "half boiled",
            "porridge",
            "bubur",
        ],
    ),
];

pub static SETTING_KEYWORDS: KeywordTable<SettingBucket> = &[
    (
        SettingBucket::FormalIndoor,
        &[
            "fine dining",
            "omakase",
            "hotel",
            "lounge",
            "tasting menu",
            "michelin",
            "private dining",
            "steakhouse",
            "wine",
        ],
    ),
    (
        SettingBucket::FormalOutdoor,
        &[
            "rooftop",
            "garden terrace",
            "al fresco",
            "alfresco",
            "poolside",
            "sky bar",
            "terrace",
        ],
    ),
    (
        SettingBucket::CasualIndoor,
        &[
            "cafe",
            "café",
            "kopitiam",
            "fast food",
            "food court",
            "mall",
            "bakery",
            "canteen",
            "kedai",
            "restoran",
        ],
    ),
    (
        SettingBucket::CasualOutdoor,
        &[
            "hawker",
            "pasar malam",
            "night market",
            "stall",
            "gerai",
            "roadside",
            "tepi jalan",
            "food truck",
            "street",
            "beach",
            "mamak",
            "open air",
        ],
    ),
];

pub static MEAL_TIMING_KEYWORDS: KeywordTable<MealTiming> = &[
    (
        MealTiming::Breakfast,
        &[
            "breakfast",
            "sarapan",
            "pagi",
            "coffee",
            "kopi",
            "toast",
            "half boiled",
            "roti canai",
            "nasi lemak",
            "dim sum",
            "brunch",
            "pancake",
            "eggs",
            "porridge",
        ],
    ),
    (
        MealTiming::Lunch,
        &[
            "lunch",
            "tengahari",
            "economy rice",
            "nasi campur",
            "chicken rice",
            "mixed rice",
            "bento",
        ],
    ),
    (
        MealTiming::Dinner,
        &[
            "dinner",
            "makan malam",
            "steamboat",
            "steak",
            "fine dining",
            "omakase",
            "tasting menu",
            "bbq",
            "grill",
            "seafood",
        ],
    ),
    (
        MealTiming::Supper,
        &[
            "supper",
            "late night",
            "24 hours",
            "24 jam",
            "24/7",
            "midnight",
            "pasar malam",
            "night market",
            "roti john",
            "maggi goreng",
        ],
    ),
];

pub static SOCIAL_ENERGY_KEYWORDS: KeywordTable<Tier> = &[
    (
        Tier::High,
        &[
            "mamak",
            "hawker",
            "pasar malam",
            "night market",
            "bar",
            "pub",
            "karaoke",
            "buffet",
            "steamboat",
            "food court",
            "bbq",
            "sports",
            "party",
        ],
    ),
    (
        Tier::Medium,
        &[
            "restaurant",
            "restoran",
            "cafe",
            "café",
            "kopitiam",
            "bistro",
            "family",
            "dim sum",
            "brunch",
        ],
    ),
    (
        Tier::Low,
        &[
            "fine dining",
            "omakase",
            "library",
            "quiet",
            "tea house",
            "bakery",
            "takeaway",
            "take away",
            "drive thru",
            "patisserie",
            "lounge",
        ],
    ),
];

pub static NOISE_LEVEL_KEYWORDS: KeywordTable<Tier> = &[
    (
        Tier::High,
        &[
            "mamak",
            "hawker",
            "pasar malam",
            "night market",
            "karaoke",
            "bar",
            "pub",
            "food court",
            "kopitiam",
            "steamboat",
            "live band",
            "sports",
        ],
    ),
    (
        Tier::Medium,
        &[
            "restaurant",
            "restoran",
            "cafe",
            "café",
            "bistro",
            "fast food",
            "canteen",
            "buffet",
        ],
    ),
    (
        Tier::Low,
        &[
            "fine dining",
            "omakase",
            "quiet",
            "library",
            "tea house",
            "lounge",
            "patisserie",
            "garden",
        ],
    ),
];

/// Price buckets: High = expensive, Medium = moderate, Low = budget.
pub static PRICE_RANGE_KEYWORDS: KeywordTable<Tier> = &[
    (
        Tier::Low,
        &[
            "mamak",
            "hawker",
            "pasar malam",
            "stall",
            "gerai",
            "kopitiam",
            "warung",
            "economy rice",
            "nasi campur",
            "food court",
            "cheap",
            "murah",
            "canteen",
            "roti canai",
            "teh tarik",
        ],
    ),
    (
        Tier::Medium,
        &[
            "restaurant",
            "restoran",
            "cafe",
            "café",
            "bistro",
            "family",
            "set lunch",
        ],
    ),
    (
        Tier::High,
        &[
            "fine dining",
            "omakase",
            "hotel",
            "michelin",
            "wagyu",
            "lobster",
            "caviar",
            "tasting menu",
            "premium",
            "luxury",
            "steakhouse",
            "wine",
        ],
    ),
];

pub static FOOD_CATEGORY_KEYWORDS: KeywordTable<FoodCategory> = &[
    (
        FoodCategory::Rice,
        &["rice", "nasi", "biryani", "briyani", "congee"],
    ),
    (
        FoodCategory::Noodles,
        &[
            "noodle",
            "mee",
            "mian",
            "kway teow",
            "laksa",
            "ramen",
            "udon",
            "pasta",
            "spaghetti",
            "bihun",
            "pho",
        ],
    ),
    (
        FoodCategory::Bread,
        &[
            "bread",
            "roti",
            "toast",
            "bun",
            "naan",
            "chapati",
            "sandwich",
            "burger",
            "croissant",
            "pau",
        ],
    ),
    (
        FoodCategory::Seafood,
        &[
            "seafood",
            "fish",
            "prawn",
            "udang",
            "ikan",
            "sotong",
            "squid",
            "crab",
            "ketam",
            "oyster",
            "lobster",
            "shrimp",
        ],
    ),
    (
        FoodCategory::Meat,
        &[
            "chicken",
            "ayam",
            "beef",
            "daging",
            "lamb",
            "kambing",
            "mutton",
            "pork",
            "duck",
            "itik",
            "satay",
            "rendang",
            "steak",
            "char siu",
        ],
    ),
    (
        FoodCategory::Vegetable,
        &[
            "vegetable",
            "sayur",
            "salad",
            "vegetarian",
            "tofu",
            "tauhu",
            "kangkung",
            "taugeh",
        ],
    ),
    (
        FoodCategory::Dessert,
        &[
            "dessert",
            "cendol",
            "ais kacang",
            "kuih",
            "cake",
            "ice cream",
            "pudding",
            "waffle",
        ],
    ),
    (
        FoodCategory::Beverages,
        &[
            "coffee",
            "kopi",
            "teh",
            "juice",
            "jus",
            "milo",
            "milk tea",
            "smoothie",
            "drink",
            "sirap",
            "limau",
        ],
    ),
    (
        FoodCategory::Snacks,
        &[
            "snack",
            "keropok",
            "chips",
            "fries",
            "pisang goreng",
            "goreng pisang",
            "karipap",
            "curry puff",
            "popiah",
        ],
    ),
    (
        FoodCategory::Spicy,
        &[
            "spicy",
            "pedas",
            "sambal",
            "chilli",
            "chili",
            "curry",
            "tom yam",
            "tom yum",
            "mala hotpot",
            "masak merah",
        ],
    ),
];

// ─────────────────────────────────────────────────────────────────────────────
// Fallbacks
// ─────────────────────────────────────────────────────────────────────────────

/// Meal timings used when no timing keyword matches, keyed by venue type.
pub static TIMING_DEFAULTS: LazyLock<HashMap<RestaurantType, &'static [MealTiming]>> =
    LazyLock::new(|| {
        use MealTiming::*;
        let mut m: HashMap<RestaurantType, &'static [MealTiming]> = HashMap::new();
        m.insert(RestaurantType::Kopitiam, &[Breakfast, Lunch]);
        m.insert(RestaurantType::Bakery, &[Breakfast, Lunch]);
        m.insert(RestaurantType::FastFood, &[Lunch, Dinner]);
        m.insert(RestaurantType::Mamak, &[Breakfast, Lunch, Dinner, Supper]);
        m.insert(RestaurantType::FancyDining, &[Dinner]);
        m
    });

/// Timings for venues with no type or a type missing from [`TIMING_DEFAULTS`].
pub const GENERIC_TIMING: &[MealTiming] = &[MealTiming::Lunch, MealTiming::Dinner];

/// Filler offering per cuisine, skipped when an offering already contains
/// one of the related keywords.
pub static CUISINE_FILLERS: LazyLock<HashMap<Cuisine, (&'static str, &'static [&'static str])>> =
    LazyLock::new(|| {
        let mut m: HashMap<Cuisine, (&'static str, &'static [&'static str])> = HashMap::new();
        m.insert(Cuisine::Malay, ("Nasi dishes", &["nasi"]));
        m.insert(
            Cuisine::Chinese,
            ("Noodle dishes", &["noodle", "mee", "mian", "kway teow"]),
        );
        m.insert(Cuisine::Indian, ("Roti canai", &["roti", "naan", "chapati"]));
        m.insert(Cuisine::Western, ("Grilled mains", &["grill", "steak", "chop"]));
        m
    });

/// Offerings used when nothing else produced any, keyed by venue type.
pub static TYPE_OFFERINGS: LazyLock<HashMap<RestaurantType, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m: HashMap<RestaurantType, &'static [&'static str]> = HashMap::new();
        m.insert(
            RestaurantType::Kopitiam,
            &["Coffee", "Toast", "Local breakfast"],
        );
        m.insert(
            RestaurantType::Mamak,
            &["Roti canai", "Teh tarik", "Nasi kandar"],
        );
        m.insert(
            RestaurantType::Hawker,
            &["Char kway teow", "Satay", "Local favourites"],
        );
        m.insert(
            RestaurantType::FastFood,
            &["Burgers", "Fries", "Soft drinks"],
        );
        m.insert(RestaurantType::Bakery, &["Bread", "Pastries", "Cakes"]);
        m.insert(
            RestaurantType::StreetFood,
            &["Satay", "Apam balik", "Local snacks"],
        );
        m.insert(
            RestaurantType::FancyDining,
            &["Chef's tasting menu", "Seasonal specials"],
        );
        m.insert(RestaurantType::Buffet, &["Buffet spread"]);
        m
    });

/// Last-resort offering.
pub const GENERIC_OFFERING: &str = "Various local dishes";

/// Meal timings for a resolved (or absent) venue type.
pub fn default_timing(restaurant_type: Option<RestaurantType>) -> &'static [MealTiming] {
    restaurant_type
        .and_then(|t| TIMING_DEFAULTS.get(&t).copied())
        .unwrap_or(GENERIC_TIMING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lowercase_unique<K>(table: KeywordTable<K>) {
        for (_, keywords) in table {
            for (i, kw) in keywords.iter().enumerate() {
                assert_eq!(*kw, kw.to_lowercase(), "keyword not lowercase: {}", kw);
                assert!(!keywords[..i].contains(kw), "duplicate keyword: {}", kw);
            }
        }
    }

    #[test]
    fn test_tables_are_lowercase_and_unique() {
        assert_lowercase_unique(RESTAURANT_TYPE_KEYWORDS);
        assert_lowercase_unique(CUISINE_KEYWORDS);
        assert_lowercase_unique(MEAL_WEIGHT_KEYWORDS);
        assert_lowercase_unique(SETTING_KEYWORDS);
        assert_lowercase_unique(MEAL_TIMING_KEYWORDS);
        assert_lowercase_unique(SOCIAL_ENERGY_KEYWORDS);
        assert_lowercase_unique(NOISE_LEVEL_KEYWORDS);
        assert_lowercase_unique(PRICE_RANGE_KEYWORDS);
        assert_lowercase_unique(FOOD_CATEGORY_KEYWORDS);
    }

    #[test]
    fn test_default_timing() {
        assert_eq!(
            default_timing(Some(RestaurantType::Kopitiam)),
            &[MealTiming::Breakfast, MealTiming::Lunch]
        );
        assert_eq!(
            default_timing(Some(RestaurantType::Bakery)),
            &[MealTiming::Breakfast, MealTiming::Lunch]
        );
        assert_eq!(default_timing(Some(RestaurantType::FastFood)), GENERIC_TIMING);
        assert_eq!(default_timing(Some(RestaurantType::Mamak)).len(), 4);
        assert_eq!(
            default_timing(Some(RestaurantType::FancyDining)),
            &[MealTiming::Dinner]
        );
        assert_eq!(default_timing(Some(RestaurantType::Hawker)), GENERIC_TIMING);
        assert_eq!(default_timing(None), GENERIC_TIMING);
    }

    #[test]
    fn test_table_declaration_order() {
        assert_eq!(RESTAURANT_TYPE_KEYWORDS[0].0, RestaurantType::Mamak);
        assert_eq!(CUISINE_KEYWORDS[0].0, Cuisine::Malaysian);
        assert_eq!(FOOD_CATEGORY_KEYWORDS.len(), 10);
    }
}
