//! Price & Customization Calculator
//!
//! Total charge for a configured item. Returns a plain amount in the
//! currency's major unit; formatting belongs to the presentation layer.

use std::num::NonZeroU32;

use crate::domain::MenuItem;

/// Smallest quantity the stepper offers
pub const MIN_QUANTITY: u32 = 1;
/// Largest quantity the stepper offers
pub const MAX_QUANTITY: u32 = 10;

/// A positive unit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// `None` for zero
    pub fn new(units: u32) -> Option<Self> {
        NonZeroU32::new(units).map(Quantity)
    }

    /// Clamp into the stepper range `[MIN_QUANTITY, MAX_QUANTITY]`
    pub fn clamped(units: i64) -> Self {
        let units = units.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY)) as u32;
        Quantity::new(units).unwrap_or(Quantity::ONE)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn increment(self) -> Self {
        Quantity::clamped(i64::from(self.get()) + 1)
    }

    pub fn decrement(self) -> Self {
        Quantity::clamped(i64::from(self.get()) - 1)
    }

    pub fn at_min(self) -> bool {
        self.get() <= MIN_QUANTITY
    }

    pub fn at_max(self) -> bool {
        self.get() >= MAX_QUANTITY
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ONE
    }
}

/// Price of a single configured unit.
///
/// Unknown size or add-on names contribute nothing.
pub fn unit_price<S: AsRef<str>>(item: &MenuItem, size: Option<&str>, add_ons: &[S]) -> f64 {
    let Some(customizations) = item.customizations.as_ref() else {
        return item.price;
    };

    let size_delta = size
        .and_then(|name| customizations.size(name))
        .map_or(0.0, |size| size.price_modifier);

    let extras: f64 = add_ons
        .iter()
        .filter_map(|name| customizations.add_on(name.as_ref()))
        .map(|add_on| add_on.price)
        .sum();

    item.price + size_delta + extras
}

/// `unit_price × quantity`
pub fn total<S: AsRef<str>>(item: &MenuItem, size: Option<&str>, add_ons: &[S], quantity: Quantity) -> f64 {
    unit_price(item, size, add_ons) * f64::from(quantity.get())
}

/// Choices made on an item detail view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub size: Option<String>,
    /// In the order they were picked
    pub add_ons: Vec<String>,
    pub quantity: Quantity,
}

impl Selection {
    /// Fresh selection with the item's first size preselected
    pub fn for_item(item: &MenuItem) -> Self {
        Self {
            size: item.default_size().map(|size| size.name.clone()),
            add_ons: Vec::new(),
            quantity: Quantity::ONE,
        }
    }

    pub fn select_size(&mut self, name: &str) {
        self.size = Some(name.to_string());
    }

    pub fn toggle_add_on(&mut self, name: &str) {
        if let Some(pos) = self.add_ons.iter().position(|picked| picked == name) {
            self.add_ons.remove(pos);
        } else {
            self.add_ons.push(name.to_string());
        }
    }

    pub fn has_add_on(&self, name: &str) -> bool {
        self.add_ons.iter().any(|picked| picked == name)
    }

    pub fn total(&self, item: &MenuItem) -> f64 {
        total(item, self.size.as_deref(), &self.add_ons, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::customizable_burger;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_no_customization_scales_base_price() {
        let item = MenuItem::new(1, "Soup", "", "appetizers", 5.25);
        let none: [&str; 0] = [];
        for units in 1..=12 {
            let quantity = Quantity::new(units).unwrap();
            assert!(approx(total(&item, None, &none, quantity), 5.25 * f64::from(units)));
        }
    }

    #[test]
    fn test_size_and_add_on_example() {
        let item = customizable_burger();
        let quantity = Quantity::new(2).unwrap();
        let result = total(&item, Some("Small"), &["Bacon"], quantity);
        assert!(approx(result, 19.0));
    }

    #[test]
    fn test_unmatched_names_are_ignored() {
        let item = customizable_burger();
        assert!(approx(unit_price(&item, Some("Gigantic"), &["Truffle", "Cheese"]), 11.0));
        assert!(approx(unit_price(&item, None, &["Truffle"]), 10.0));
    }

    #[test]
    fn test_item_without_customizations_ignores_selection() {
        let item = MenuItem::new(2, "Tea", "", "beverages", 3.0);
        assert!(approx(unit_price(&item, Some("Large"), &["Honey"]), 3.0));
    }

    #[test]
    fn test_no_upper_bound_on_quantity() {
        let item = customizable_burger();
        let quantity = Quantity::new(25).unwrap();
        assert!(approx(total(&item, Some("Large"), &["Cheese"], quantity), 13.5 * 25.0));
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(Quantity::new(0).is_none());
        assert_eq!(Quantity::clamped(0).get(), MIN_QUANTITY);
        assert_eq!(Quantity::clamped(-4).get(), MIN_QUANTITY);
        assert_eq!(Quantity::clamped(42).get(), MAX_QUANTITY);
        assert_eq!(Quantity::ONE.decrement(), Quantity::ONE);
        assert_eq!(Quantity::clamped(10).increment().get(), MAX_QUANTITY);
        assert_eq!(Quantity::ONE.increment().get(), 2);
        assert!(Quantity::ONE.at_min());
        assert!(Quantity::clamped(10).at_max());
    }

    #[test]
    fn test_selection_defaults_and_toggles() {
        let item = customizable_burger();
        let mut selection = Selection::for_item(&item);
        assert_eq!(selection.size.as_deref(), Some("Small"));
        assert!(approx(selection.total(&item), 8.0));

        selection.toggle_add_on("Bacon");
        selection.toggle_add_on("Avocado");
        assert!(selection.has_add_on("Bacon"));
        assert!(approx(selection.total(&item), 11.5));

        selection.toggle_add_on("Bacon");
        assert!(!selection.has_add_on("Bacon"));
        assert_eq!(selection.add_ons, vec!["Avocado".to_string()]);

        selection.select_size("Large");
        selection.quantity = Quantity::new(3).unwrap();
        assert!(approx(selection.total(&item), (10.0 + 2.5 + 2.0) * 3.0));
    }
}
