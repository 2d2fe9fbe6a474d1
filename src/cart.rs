/* ===============================================================================
Restaurant ordering terminal.
Cart with the order in progress. 06 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use serde::{Deserialize, Serialize};

use crate::catalog::MenuItem;
use crate::environment as env;

// One position in the cart. At most one line per item id, amount never below 1
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
   #[serde(flatten)]
   pub item: MenuItem,
   #[serde(rename = "quantity")]
   pub amount: usize,
}

impl CartLine {
   pub fn cost(&self) -> usize {
      self.item.price * self.amount
   }
}

// Cart summary for the announce line
pub struct CartInfo {
   pub positions_num: usize,
   pub items_num: usize,
   pub total_cost: usize,
}

// The order in progress, lines in insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
   lines: Vec<CartLine>,
}

impl Cart {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn lines(&self) -> &[CartLine] {
      &self.lines
   }

   pub fn is_empty(&self) -> bool {
      self.lines.is_empty()
   }

   pub fn amount_of(&self, item_id: u32) -> Option<usize> {
      self.lines.iter()
      .find(|line| line.item.id == item_id)
      .map(|line| line.amount)
   }

   // Remove the whole line if the item is already in the cart, otherwise add it
   // with amount 1. Re-adding deliberately starts from 1 again
   pub fn toggle(&mut self, item: &MenuItem) {
      if self.amount_of(item.id).is_some() {
         self.lines.retain(|line| line.item.id != item.id);
      } else {
         self.lines.push(CartLine { item: item.clone(), amount: 1 });
      }
   }

   // Change the amount of a line, clamped at 1. Unknown id is a no-op,
   // a line never disappears through this command
   pub fn adjust_amount(&mut self, item_id: u32, delta: i32) {
      if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item_id) {
         let amount = line.amount as i64 + delta as i64;
         line.amount = amount.max(1) as usize;
      }
   }

   pub fn clear(&mut self) {
      self.lines.clear();
   }

   pub fn total(&self) -> usize {
      self.lines.iter().map(|line| line.cost()).sum()
   }

   pub fn info(&self) -> CartInfo {
      let (positions_num, items_num, total_cost) = self.lines.iter()
      .fold((0, 0, 0), |acc, line| {
         (acc.0 + 1, acc.1 + line.amount, acc.2 + line.cost())
      });

      CartInfo { positions_num, items_num, total_cost }
   }
}

// Cart panel text
pub fn view(cart: &Cart) -> String {
   let info = cart.info();
   if info.positions_num == 0 {
      return String::from("Your order is empty");
   }

   let items = cart.lines().iter()
   .fold(String::default(), |acc, line| {
      let id = line.item.id;

      let text = format!("{}\n{}: {} x {} pcs. = {}",
         acc, line.item.title, line.item.price, line.amount,
         env::price_with_unit(line.cost())
      );

      // Commands to edit the line
      format!("{} /del{} /inc{} /dec{}", text, id, id, id)
   });

   format!("In cart {} pos., {} pcs. for total cost {}{}\n\nTotal: {} /checkout",
      info.positions_num, info.items_num, env::price_with_unit(info.total_cost),
      items, env::price_with_unit(info.total_cost)
   )
}

// ============================================================================
// [Tests]
// ============================================================================
#[cfg(test)]
mod tests {
   use super::*;
   use crate::catalog;

   fn cart_with(ids: &[u32]) -> Cart {
      let mut cart = Cart::new();
      for id in ids {
         cart.toggle(catalog::find(*id).unwrap());
      }
      cart
   }

   #[test]
   fn double_toggle_restores_empty_cart() {
      let mut cart = Cart::new();
      let item = catalog::find(1).unwrap();

      cart.toggle(item);
      assert_eq!(cart.amount_of(1), Some(1));

      cart.toggle(item);
      assert!(cart.is_empty());
      assert_eq!(cart, Cart::new());
   }

   #[test]
   fn toggle_removes_regardless_of_amount() {
      let mut cart = cart_with(&[1]);
      cart.adjust_amount(1, 4);
      assert_eq!(cart.amount_of(1), Some(5));

      // Full removal, then re-add starts from 1 again
      let item = catalog::find(1).unwrap();
      cart.toggle(item);
      assert!(cart.is_empty());
      cart.toggle(item);
      assert_eq!(cart.amount_of(1), Some(1));
   }

   #[test]
   fn adjust_amount_clamps_at_one() {
      let mut cart = cart_with(&[1]);
      cart.adjust_amount(1, 2);
      assert_eq!(cart.amount_of(1), Some(3));

      cart.adjust_amount(1, -1000);
      assert_eq!(cart.amount_of(1), Some(1));
   }

   #[test]
   fn adjust_amount_on_unknown_id_is_noop() {
      let mut cart = cart_with(&[1, 2]);
      let before = cart.clone();

      cart.adjust_amount(9999, 5);
      assert_eq!(cart, before);
   }

   #[test]
   fn total_sums_price_by_amount() {
      // 500 * 2 + 700 * 1
      let mut cart = cart_with(&[1, 2]);
      cart.adjust_amount(1, 1);
      assert_eq!(cart.total(), 1700);

      let info = cart.info();
      assert_eq!(info.positions_num, 2);
      assert_eq!(info.items_num, 3);
      assert_eq!(info.total_cost, 1700);
   }

   #[test]
   fn lines_keep_insertion_order() {
      let cart = cart_with(&[3, 1, 2]);
      let ids: Vec<u32> = cart.lines().iter().map(|line| line.item.id).collect();
      assert_eq!(ids, vec![3, 1, 2]);
   }
}
