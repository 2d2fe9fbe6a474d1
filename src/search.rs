/* ===============================================================================
Restaurant ordering terminal.
Search over the catalog. 11 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::cart::Cart;
use crate::catalog::{self, MenuItem};

// Case-insensitive substring match on the title, catalog order preserved.
// A blank query returns the whole catalog
pub fn filter<'a>(items: &'a [MenuItem], query: &str) -> Vec<&'a MenuItem> {
   let query = query.trim();
   if query.is_empty() {
      return items.iter().collect();
   }

   let pattern = query.to_lowercase();
   items.iter()
   .filter(|item| item.title.to_lowercase().contains(&pattern))
   .collect()
}

// Search results as a flat list, without the category grouping
pub fn view(items: &[&MenuItem], cart: &Cart) -> String {
   if items.is_empty() {
      return String::from("Nothing found");
   }

   items.iter()
   .fold(String::default(), |acc, item| {
      format!("{}\n{}", acc, catalog::item_line(item, cart))
   })
}
