//! Sample Menu Data
//!
//! A small, realistic catalog used by tests and the in-memory source.

use crate::domain::{AddOn, Category, Contact, Customizations, MenuItem, Restaurant, SizeOption};

pub fn sample_restaurant() -> Restaurant {
    Restaurant {
        name: "Delicious Bites".to_string(),
        tagline: "Fresh • Flavorful • Fast".to_string(),
        description: "Neighbourhood kitchen serving comfort food".to_string(),
        opening_hours: "Mon-Sun 11:00-22:00".to_string(),
        contact: Contact {
            phone: "(555) 010-2030".to_string(),
            email: "hello@deliciousbites.test".to_string(),
            address: "12 Market Street".to_string(),
        },
    }
}

pub fn sample_categories() -> Vec<Category> {
    [
        ("appetizers", "Appetizers", "🥗"),
        ("mains", "Mains", "🍖"),
        ("desserts", "Desserts", "🍰"),
        ("beverages", "Beverages", "🥤"),
    ]
    .into_iter()
    .map(|(id, name, icon)| Category {
        icon: icon.to_string(),
        ..Category::new(id, name)
    })
    .collect()
}

/// Classic burger priced 10.00 with sizes and add-ons
pub fn customizable_burger() -> MenuItem {
    MenuItem::new(4, "Classic Burger", "Beef patty, lettuce, tomato and pickles", "mains", 10.0)
        .with_customizations(Customizations {
            sizes: vec![
                SizeOption { name: "Small".to_string(), price_modifier: -2.0 },
                SizeOption { name: "Regular".to_string(), price_modifier: 0.0 },
                SizeOption { name: "Large".to_string(), price_modifier: 2.5 },
            ],
            add_ons: vec![
                AddOn { name: "Bacon".to_string(), price: 1.5 },
                AddOn { name: "Cheese".to_string(), price: 1.0 },
                AddOn { name: "Avocado".to_string(), price: 2.0 },
            ],
        })
}

/// Twelve items, three of them desserts, in a fixed order
pub fn sample_items() -> Vec<MenuItem> {
    let mut wings = MenuItem::new(1, "Buffalo Wings", "Crispy chicken wings tossed in hot sauce", "appetizers", 9.5);
    wings.spicy_level = 3;
    wings.popular = true;
    wings.preparation_time = 15;

    let mut rolls = MenuItem::new(2, "Spring Rolls", "Crispy vegetable rolls with sweet chili dip", "Appetizers", 6.0);
    rolls.dietary = vec!["vegetarian".to_string(), "vegan".to_string()];

    let soup = MenuItem::new(3, "Tomato Soup", "Slow roasted tomatoes and basil", "appetizers", 5.5);

    let mut burger = customizable_burger();
    burger.popular = true;
    burger.preparation_time = 12;
    burger.ingredients = Some(vec!["beef".to_string(), "lettuce".to_string(), "tomato".to_string()]);

    let mut curry = MenuItem::new(5, "Chicken Tikka Masala", "Grilled chicken in a creamy spiced sauce", "mains", 14.0);
    curry.spicy_level = 2;
    curry.dietary = vec!["gluten-free".to_string()];

    let mut steak = MenuItem::new(6, "Ribeye Steak", "Twelve ounce ribeye with garlic butter", "Mains", 24.0);
    steak.available = false;

    let salad = MenuItem::new(7, "Caesar Salad", "Romaine, parmesan and croutons", "mains", 11.0);

    let mut lava = MenuItem::new(8, "Chocolate Lava Cake", "Warm molten chocolate centre", "desserts", 8.0);
    lava.popular = true;

    let cheesecake = MenuItem::new(9, "Cheesecake", "New York style with berry compote", "Desserts", 7.0);

    let sorbet = MenuItem::new(10, "Mango Sorbet", "Dairy free and refreshing", "desserts", 5.0);

    let lemonade = MenuItem::new(11, "Fresh Lemonade", "Squeezed to order", "beverages", 3.5);

    let tea = MenuItem::new(12, "Iced Tea", "Black tea with lemon", "beverages", 3.0);

    vec![wings, rolls, soup, burger, curry, steak, salad, lava, cheesecake, sorbet, lemonade, tea]
}
