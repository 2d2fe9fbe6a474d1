/* ===============================================================================
Restaurant ordering terminal.
Sales summary over the ledger. 11 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::environment as env;
use crate::orders::Ledger;

// How many positions to show in the popular items list
pub const TOP_ITEMS_LIMIT: usize = 5;

#[derive(Debug, PartialEq)]
pub struct Summary {
   pub total_revenue: usize,
   pub orders_num: usize,
   pub average_order_value: usize,

   // Item title with summed amount, descending, ties in first-seen order
   pub top_items: Vec<(String, usize)>,

   // Category with summed revenue, first-seen order
   pub category_revenue: Vec<(String, usize)>,
}

// Accumulate into a vector keyed by name to keep the first-seen order,
// a hash map would lose it
fn bump(acc: &mut Vec<(String, usize)>, key: &str, add: usize) {
   match acc.iter_mut().find(|(name, _)| name == key) {
      Some((_, sum)) => *sum += add,
      None => acc.push((String::from(key), add)),
   }
}

// Full recomputation from the ledger on every call, nothing is cached.
// None for the empty ledger: "no orders yet" must stay distinguishable
// from orders totalling zero, and the average is never 0/0
pub fn summarize(ledger: &Ledger) -> Option<Summary> {
   if ledger.is_empty() {
      return None;
   }

   let orders = ledger.orders();
   let total_revenue: usize = orders.iter().map(|order| order.total).sum();
   let orders_num = orders.len();

   let mut top_items = Vec::new();
   let mut category_revenue = Vec::new();
   for order in orders {
      for line in &order.lines {
         bump(&mut top_items, &line.item.title, line.amount);
         bump(&mut category_revenue, &line.item.category, line.cost());
      }
   }

   // Stable sort, so equal amounts keep their first-seen order
   top_items.sort_by(|a, b| b.1.cmp(&a.1));
   top_items.truncate(TOP_ITEMS_LIMIT);

   Some(Summary {
      total_revenue,
      orders_num,
      average_order_value: total_revenue / orders_num,
      top_items,
      category_revenue,
   })
}

// Analytics panel text
pub fn view(ledger: &Ledger) -> String {
   let summary = match summarize(ledger) {
      Some(summary) => summary,
      None => return String::from("No orders yet"),
   };

   let top = summary.top_items.iter()
   .fold(String::default(), |acc, (title, amount)| {
      format!("{}\n{} — {} pcs.", acc, title, amount)
   });

   let categories = summary.category_revenue.iter()
   .fold(String::default(), |acc, (category, revenue)| {
      format!("{}\n{} — {}", acc, category, env::price_with_unit(*revenue))
   });

   format!("Total revenue: {}\nOrders: {}\nAverage order value: {}\n\nPopular items:{}\n\nRevenue by category:{}",
      env::price_with_unit(summary.total_revenue),
      summary.orders_num,
      env::price_with_unit(summary.average_order_value),
      top, categories
   )
}
