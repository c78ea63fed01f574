//! Display Formatting
//!
//! Currency and badge helpers for the menu views.

/// US dollar amount with thousands separators, e.g. `$1,234.50`
pub fn format_price(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Signed price delta for size chips, e.g. `+$2.50` / `-$2.00`
pub fn format_delta(delta: f64) -> String {
    if delta < 0.0 {
        format_price(delta)
    } else {
        format!("+{}", format_price(delta))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Cart badge text; hidden when empty
pub fn cart_badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// CSS class for a dietary badge
pub fn dietary_class(tag: &str) -> &'static str {
    match tag.to_lowercase().as_str() {
        "vegetarian" => "badge badge-vegetarian",
        "vegan" => "badge badge-vegan",
        "gluten-free" => "badge badge-gluten-free",
        "dairy-free" => "badge badge-dairy-free",
        "nut-free" => "badge badge-nut-free",
        "halal" => "badge badge-halal",
        "kosher" => "badge badge-kosher",
        _ => "badge",
    }
}

/// `gluten-free` -> `Gluten-free`
pub fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(19.0), "$19.00");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_price(-2.0), "-$2.00");
        assert_eq!(format_price(0.1 + 0.2), "$0.30");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(2.5), "+$2.50");
        assert_eq!(format_delta(0.0), "+$0.00");
        assert_eq!(format_delta(-2.0), "-$2.00");
    }

    #[test]
    fn test_cart_badge() {
        assert_eq!(cart_badge_label(0), None);
        assert_eq!(cart_badge_label(7).as_deref(), Some("7"));
        assert_eq!(cart_badge_label(99).as_deref(), Some("99"));
        assert_eq!(cart_badge_label(100).as_deref(), Some("99+"));
    }

    #[test]
    fn test_dietary_badges() {
        assert_eq!(dietary_class("Vegan"), "badge badge-vegan");
        assert_eq!(dietary_class("paleo"), "badge");
        assert_eq!(capitalize("gluten-free"), "Gluten-free");
        assert_eq!(capitalize(""), "");
    }
}
