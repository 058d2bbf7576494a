//! Cafe menu

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coffee,
    Drinks,
    Snack,
}

impl Category {
    /// Menu tabs, in display order
    pub const ALL: [Category; 3] = [Category::Coffee, Category::Drinks, Category::Snack];

    pub fn label(self) -> &'static str {
        match self {
            Category::Coffee => "Καφές",
            Category::Drinks => "Ροφήματα",
            Category::Snack => "Σνακ",
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
    /// Out of 5
    pub rating: f32,
    pub category: Category,
}

pub static MENU: &[MenuItem] = &[
    MenuItem {
        id: "espresso",
        name: "Espresso",
        description: "Διπλό espresso από φρεσκοαλεσμένο χαρμάνι.",
        price_cents: 220,
        rating: 4.7,
        category: Category::Coffee,
    },
    MenuItem {
        id: "freddo-espresso",
        name: "Freddo Espresso",
        description: "Κρύο espresso χτυπημένο με πάγο.",
        price_cents: 280,
        rating: 4.8,
        category: Category::Coffee,
    },
    MenuItem {
        id: "cappuccino",
        name: "Cappuccino",
        description: "Espresso με αφρόγαλα.",
        price_cents: 320,
        rating: 4.6,
        category: Category::Coffee,
    },
    MenuItem {
        id: "greek-coffee",
        name: "Ελληνικός καφές",
        description: "Παραδοσιακός, ψημένος στη χόβολη.",
        price_cents: 200,
        rating: 4.5,
        category: Category::Coffee,
    },
    MenuItem {
        id: "water",
        name: "Νερό 500ml",
        description: "Εμφιαλωμένο φυσικό μεταλλικό νερό.",
        price_cents: 80,
        rating: 4.4,
        category: Category::Drinks,
    },
    MenuItem {
        id: "orange-juice",
        name: "Φυσικός χυμός πορτοκάλι",
        description: "Φρεσκοστυμμένος, χωρίς ζάχαρη.",
        price_cents: 350,
        rating: 4.7,
        category: Category::Drinks,
    },
    MenuItem {
        id: "iced-tea",
        name: "Κρύο τσάι",
        description: "Τσάι λεμόνι με λίγη ζάχαρη.",
        price_cents: 250,
        rating: 4.3,
        category: Category::Drinks,
    },
    MenuItem {
        id: "koulouri",
        name: "Κουλούρι Θεσσαλονίκης",
        description: "Με σουσάμι, της ημέρας.",
        price_cents: 120,
        rating: 4.6,
        category: Category::Snack,
    },
    MenuItem {
        id: "spanakopita",
        name: "Σπανακόπιτα",
        description: "Χειροποίητο φύλλο με σπανάκι και φέτα.",
        price_cents: 300,
        rating: 4.8,
        category: Category::Snack,
    },
    MenuItem {
        id: "energy-bar",
        name: "Μπάρα δημητριακών",
        description: "Βρώμη, μέλι και ξηροί καρποί.",
        price_cents: 180,
        rating: 4.2,
        category: Category::Snack,
    },
];

/// Items of one menu tab
pub fn items_in(category: Category) -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(move |item| item.category == category)
}

pub fn find_item(id: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_items() {
        for category in Category::ALL {
            assert!(items_in(category).count() >= 3, "{:?}", category);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = MENU.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), MENU.len());
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item("cappuccino").map(|i| i.price_cents), Some(320));
        assert!(find_item("latte-macchiato").is_none());
    }
}
