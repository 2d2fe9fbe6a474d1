/* ===============================================================================
Restaurant ordering terminal.
Static menu catalog. 04 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::environment as env;

// Menu item, loaded once at startup and never mutated
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
   pub id: u32,
   #[serde(rename = "name")]
   pub title: String,
   pub price: usize,
   pub category: String,
   pub image: String,
}

fn item(id: u32, title: &str, price: usize, category: &str, image: &str) -> MenuItem {
   MenuItem {
      id,
      title: String::from(title),
      price,
      category: String::from(category),
      image: String::from(image),
   }
}

// The whole menu, insertion order defines the display order
pub static CATALOG: Lazy<Vec<MenuItem>> = Lazy::new(|| vec![
   item(1, "Spring Rolls", 500, "Starters", "🥢"),
   item(2, "Chicken Wings", 700, "Starters", "🍗"),
   item(3, "Garlic Bread", 400, "Starters", "🥖"),
   item(4, "Mozzarella Sticks", 600, "Starters", "🧀"),
   item(5, "Pizza Margherita", 1000, "Main Course", "🍕"),
   item(6, "Burger Deluxe", 1200, "Main Course", "🍔"),
   item(7, "Pasta Alfredo", 900, "Main Course", "🍝"),
   item(8, "Grilled Chicken", 1000, "Main Course", "🍗"),
   item(9, "Fish & Chips", 1100, "Main Course", "🐟"),
   item(10, "Ice Cream", 400, "Desserts", "🍦"),
   item(11, "Chocolate Cake", 500, "Desserts", "🍰"),
   item(12, "Tiramisu", 600, "Desserts", "🍮"),
   item(13, "Cola", 200, "Beverages", "🥤"),
   item(14, "Fresh Juice", 400, "Beverages", "🧃"),
   item(15, "Coffee", 300, "Beverages", "☕"),
]);

// Distinct categories in first-seen order
pub fn categories() -> Vec<&'static str> {
   let mut res = Vec::<&str>::new();
   for item in CATALOG.iter() {
      if !res.contains(&item.category.as_str()) {
         res.push(item.category.as_str());
      }
   }
   res
}

pub fn find(id: u32) -> Option<&'static MenuItem> {
   CATALOG.iter().find(|item| item.id == id)
}

// One menu line with a toggle command and the cart mark, if selected
pub fn item_line(item: &MenuItem, cart: &Cart) -> String {
   let mark = match cart.amount_of(item.id) {
      Some(amount) => format!(" ✓{}x", amount),
      None => String::default(),
   };
   format!("{} {} {} /{}{}", item.image, item.title, env::price_with_unit(item.price), item.id, mark)
}

// Menu grouped by category, the default screen
pub fn view(cart: &Cart) -> String {
   categories().iter()
   .fold(String::default(), |acc, category| {
      let items = CATALOG.iter()
      .filter(|item| &item.category == category)
      .fold(String::default(), |acc, item| {
         format!("{}\n{}", acc, item_line(item, cart))
      });

      format!("{}\n== {} =={}\n", acc, category, items)
   })
}

// ============================================================================
// [Tests]
// ============================================================================
#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn ids_are_unique_and_stable() {
      for (i, item) in CATALOG.iter().enumerate() {
         assert_eq!(item.id, i as u32 + 1);
      }
   }

   #[test]
   fn categories_in_first_seen_order() {
      assert_eq!(categories(), vec!["Starters", "Main Course", "Desserts", "Beverages"]);
   }

   #[test]
   fn find_by_id() {
      assert_eq!(find(15).map(|item| item.title.as_str()), Some("Coffee"));
      assert!(find(9999).is_none());
   }
}
