use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Grocery aisle used for pricing breakdowns and list grouping.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Vegetable,
    Starch,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePrice {
    pub price: f64,
    pub unit: &'static str,
    pub category: Category,
    pub seasonal: bool,
}

const fn item(price: f64, unit: &'static str, category: Category) -> BasePrice {
    BasePrice {
        price,
        unit,
        category,
        seasonal: false,
    }
}

const fn seasonal(price: f64, unit: &'static str) -> BasePrice {
    BasePrice {
        price,
        unit,
        category: Category::Vegetable,
        seasonal: true,
    }
}

/// Static price list, looked up by lowercased and trimmed name.
pub fn base_price(name: &str) -> Option<BasePrice> {
    use Category::*;

    let normalized = name.trim().to_lowercase();

    let price = match normalized.as_str() {
        // Proteins
        "chicken thigh" => item(5.99, "lb", Protein),
        "chicken breast" => item(8.99, "lb", Protein),
        "chicken" => item(6.99, "lb", Protein),
        "ground beef" => item(7.99, "lb", Protein),
        "beef short ribs" => item(12.99, "lb", Protein),
        "beef" => item(9.99, "lb", Protein),
        "salmon fillet" => item(16.99, "lb", Protein),
        "salmon" => item(14.99, "lb", Protein),
        "white fish" => item(11.99, "lb", Protein),
        "turkey breast" => item(8.99, "lb", Protein),
        "turkey" => item(7.99, "lb", Protein),
        "bacon" => item(7.99, "pack", Protein),
        "eggs" => item(4.99, "dozen", Protein),
        "tofu" => item(3.99, "pack", Protein),
        "chickpeas" => item(2.49, "can", Protein),
        "edamame" => item(4.99, "bag", Protein),
        "parmesan cheese" => item(12.99, "wedge", Protein),
        "feta cheese" => item(6.99, "container", Protein),
        "mozzarella" => item(5.99, "ball", Protein),
        "cheese" => item(6.99, "pack", Protein),
        "shrimp" => item(12.99, "lb", Protein),
        "prawns" => item(14.99, "lb", Protein),
        "scallops" => item(18.99, "lb", Protein),
        "crab" => item(16.99, "lb", Protein),
        "lobster" => item(24.99, "lb", Protein),
        "cod" => item(13.99, "lb", Protein),
        "halibut" => item(19.99, "lb", Protein),
        "tuna" => item(16.99, "lb", Protein),

        // Vegetables
        "bok choy" => seasonal(3.99, "bunch"),
        "garlic" => item(2.99, "head", Vegetable),
        "ginger" => item(4.99, "lb", Vegetable),
        "shiitake mushrooms" => item(5.99, "pack", Vegetable),
        "mushrooms" => item(3.99, "pack", Vegetable),
        "spinach" => seasonal(4.99, "bag"),
        "onion" | "yellow onion" | "white onion" => item(1.99, "lb", Vegetable),
        "red onion" => item(2.49, "lb", Vegetable),
        "carrots" => item(2.49, "bag", Vegetable),
        "celery" => item(2.99, "bunch", Vegetable),
        "tomatoes" | "tomato" => seasonal(4.99, "lb"),
        "cucumber" | "cucumbers" => seasonal(2.99, "each"),
        "bell pepper" | "bell peppers" | "red bell pepper" | "red bell peppers" => {
            seasonal(3.99, "each")
        }
        "eggplant" => seasonal(4.99, "each"),
        "thai basil" | "basil" => item(2.99, "pack", Vegetable),
        "parsley" => item(1.99, "bunch", Vegetable),
        "dill" => item(2.49, "pack", Vegetable),
        "mixed greens" => item(5.99, "container", Vegetable),
        "romaine lettuce" => item(3.99, "head", Vegetable),
        "lettuce" => item(3.49, "head", Vegetable),
        "cabbage" => item(2.99, "head", Vegetable),
        "cilantro" => item(1.99, "bunch", Vegetable),
        "jalapeño" => item(2.49, "lb", Vegetable),
        "sweet potato" => seasonal(3.49, "lb"),
        "kimchi" => item(5.99, "jar", Vegetable),
        "green onions" | "green onion" | "scallions" => item(1.99, "bunch", Vegetable),
        "cauliflower" => seasonal(4.99, "head"),
        "peas" => seasonal(3.99, "bag"),
        "avocado" | "avocados" => item(2.99, "each", Vegetable),
        "zucchini" => seasonal(3.49, "lb"),

        // Starches
        "jasmine rice" => item(4.99, "bag", Starch),
        "rice" => item(3.99, "bag", Starch),
        "linguine" => item(2.99, "box", Starch),
        "pasta" => item(2.49, "box", Starch),
        "arborio rice" => item(6.99, "bag", Starch),
        "quinoa" => item(8.99, "bag", Starch),
        "corn tortillas" => item(3.49, "pack", Starch),
        "tortilla" | "tortillas" => item(3.99, "pack", Starch),
        "flour tortilla" => item(4.49, "pack", Starch),
        "whole wheat bread" => item(4.99, "loaf", Starch),
        "bread" => item(3.99, "loaf", Starch),
        "brioche buns" => item(5.99, "pack", Starch),
        "sweet potato fries" => item(4.99, "bag", Starch),
        "burger buns" | "hamburger buns" => item(4.49, "pack", Starch),
        "wraps" | "wrap" => item(4.99, "pack", Starch),
        "pita bread" => item(3.99, "pack", Starch),
        "naan" => item(4.99, "pack", Starch),

        // Other
        "chips" => item(4.99, "bag", Other),
        "cookies" => item(5.99, "pack", Other),
        "coffee" | "coffee grounds" => item(8.99, "bag", Other),
        "tea" => item(4.99, "box", Other),
        "snacks" => item(3.99, "pack", Other),
        "crackers" => item(4.49, "box", Other),
        "ice cream" => item(6.99, "pint", Other),
        "chocolate" => item(3.99, "bar", Other),
        "nuts" => item(7.99, "bag", Other),
        "almonds" => item(8.99, "bag", Other),
        "walnuts" => item(9.99, "bag", Other),
        "pretzels" => item(3.99, "bag", Other),
        "popcorn" => item(4.49, "box", Other),

        _ => return None,
    };

    Some(price)
}

/// Category from the price list, `Other` for unknown names.
pub fn item_category(name: &str) -> Category {
    base_price(name)
        .map(|price| price.category)
        .unwrap_or(Category::Other)
}
