//! Fixed word lists backing the dish-name validator.
//!
//! The lists are compiled into the binary and indexed into hash sets the
//! first time they are queried. Every entry is lower-case.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

const FOOD_WORDS: &[&str] = &[
    // proteins
    "chicken", "beef", "pork", "lamb", "mutton", "turkey", "duck", "goose", "bacon", "ham",
    "sausage", "salami", "fish", "salmon", "tuna", "cod", "trout", "sardine", "anchovy",
    "shrimp", "prawn", "crab", "lobster", "clam", "mussel", "oyster", "squid", "octopus",
    "egg", "eggs", "tofu", "tempeh", "seitan", "steak", "meatball", "meatballs",
    // vegetables
    "kale", "spinach", "lettuce", "cabbage", "broccoli", "cauliflower", "carrot", "carrots",
    "potato", "potatoes", "tomato", "tomatoes", "onion", "onions", "garlic", "ginger",
    "pepper", "peppers", "chili", "cucumber", "zucchini", "eggplant", "aubergine", "squash",
    "pumpkin", "corn", "pea", "peas", "bean", "beans", "lentil", "lentils", "chickpea",
    "chickpeas", "mushroom", "mushrooms", "celery", "asparagus", "beet", "radish", "leek",
    "okra", "artichoke", "avocado", "yam",
    // fruit
    "apple", "banana", "orange", "lemon", "lime", "mango", "pineapple", "strawberry",
    "blueberry", "raspberry", "cherry", "peach", "pear", "plum", "grape", "melon",
    "watermelon", "coconut", "fig", "apricot", "kiwi", "papaya",
    // grains, dairy, pantry
    "rice", "pasta", "noodle", "noodles", "bread", "flour", "oat", "oats", "quinoa",
    "barley", "couscous", "polenta", "cheese", "butter", "milk", "cream", "yogurt",
    "parmesan", "mozzarella", "cheddar", "feta", "honey", "sugar", "chocolate", "vanilla",
    "cinnamon", "basil", "oregano", "thyme", "rosemary", "parsley", "cilantro", "mint",
    "almond", "walnut", "peanut", "cashew", "sesame",
    // dishes
    "pizza", "burger", "hamburger", "sandwich", "salad", "soup", "stew", "curry",
    "lasagna", "spaghetti", "risotto", "paella", "omelette", "pancake", "pancakes", "waffle",
    "waffles", "taco", "tacos", "burrito", "enchilada", "quesadilla", "nachos", "sushi",
    "ramen", "pho", "dumpling", "dumplings", "biryani", "kebab", "falafel", "hummus",
    "guacamole", "salsa", "pie", "cake", "cookie", "cookies", "brownie", "muffin", "tart",
    "pudding", "custard", "stirfry", "casserole", "gratin", "quiche", "frittata", "goulash",
    "chowder", "bisque", "gumbo", "jambalaya", "moussaka", "tagine", "dal", "naan",
    "tortilla", "bagel", "croissant", "pretzel", "porridge", "granola", "smoothie", "espresso",
    "coffee", "tea",
    // preparations that only ever appear in dish names
    "fried", "roast", "roasted", "grilled", "baked", "steamed",
];

const TYPOS: &[(&str, &str)] = &[
    ("kali", "kale"),
    ("brocoli", "broccoli"),
    ("brocolli", "broccoli"),
    ("spagetti", "spaghetti"),
    ("spaghettii", "spaghetti"),
    ("lazagna", "lasagna"),
    ("lasagne", "lasagna"),
    ("tomatoe", "tomato"),
    ("potatoe", "potato"),
    ("avacado", "avocado"),
    ("cinamon", "cinnamon"),
    ("sandwhich", "sandwich"),
    ("omlette", "omelette"),
    ("omelet", "omelette"),
    ("zuchini", "zucchini"),
    ("expresso", "espresso"),
    ("parmesean", "parmesan"),
    ("guacamoli", "guacamole"),
    ("burito", "burrito"),
    ("chiken", "chicken"),
    ("chikcen", "chicken"),
    ("cheeze", "cheese"),
    ("lettuse", "lettuce"),
    ("piza", "pizza"),
    ("pizzza", "pizza"),
    ("hummous", "hummus"),
    ("yoghurt", "yogurt"),
];

const NON_EDIBLE_WORDS: &[&str] = &[
    // vehicles
    "car", "truck", "bus", "van", "bicycle", "bike", "motorcycle", "train", "airplane",
    "plane", "helicopter", "boat", "ship", "tractor", "tank",
    // electronics
    "phone", "smartphone", "laptop", "computer", "television", "tv", "tablet", "camera",
    "radio", "keyboard", "monitor", "printer", "battery", "charger",
    // animals (live, not livestock meat)
    "dog", "cat", "horse", "elephant", "tiger", "lion", "monkey", "giraffe", "zebra",
    "hamster", "parrot", "snake",
    // tools
    "hammer", "screwdriver", "wrench", "saw", "drill", "shovel", "nail", "screw",
    // chemicals
    "bleach", "gasoline", "petrol", "ammonia", "detergent", "paint", "glue", "antifreeze",
    "pesticide",
    // furniture
    "chair", "table", "sofa", "couch", "bed", "desk", "wardrobe", "shelf",
    // buildings
    "house", "building", "skyscraper", "bridge", "school", "hospital", "garage", "office",
];

const NON_EDIBLE_CATEGORIES: &[&str] = &["vehicles", "electronics", "animals", "chemicals"];

fn food_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| FOOD_WORDS.iter().copied().collect())
}

fn typo_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| TYPOS.iter().copied().collect())
}

fn non_edible_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| NON_EDIBLE_WORDS.iter().copied().collect())
}

/// Whether `token` is a known ingredient or dish name.
pub fn is_food_word(token: &str) -> bool {
    food_words().contains(token)
}

/// Canonical spelling for a known misspelling, if any.
pub fn correct_typo(word: &str) -> Option<&'static str> {
    typo_map().get(word).copied()
}

/// Whether `token` names something known not to be food.
pub fn is_non_edible_word(token: &str) -> bool {
    non_edible_words().contains(token)
}

/// Category examples cited when a candidate is rejected as non-edible.
pub fn non_edible_categories() -> &'static [&'static str] {
    NON_EDIBLE_CATEGORIES
}
