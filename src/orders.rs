/* ===============================================================================
Restaurant ordering terminal.
Ledger of completed orders. 08 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::cart::{Cart, CartLine};
use crate::environment as env;

// A completed order, frozen at checkout. The total is computed once and
// stored as a fact, it is never re-derived from the lines afterwards.
// Field renames give the persisted shape: id, items, date, total
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
   pub id: u32,
   #[serde(rename = "items")]
   pub lines: Vec<CartLine>,
   #[serde(rename = "date")]
   pub created_at: NaiveDateTime,
   pub total: usize,
}

// Completed orders in insertion order, append-only except delete by id
#[derive(Clone, Debug, PartialEq, SmartDefault)]
pub struct Ledger {
   orders: Vec<Order>,

   // Ids are 1-based and monotonically increasing
   #[default = 1]
   next_id: u32,
}

impl Ledger {
   pub fn new() -> Self {
      Self::default()
   }

   // Restore from persisted orders, the counter continues after the largest id
   pub fn from_orders(orders: Vec<Order>) -> Self {
      let next_id = orders.iter().map(|order| order.id).max().unwrap_or(0) + 1;
      Self { orders, next_id }
   }

   pub fn orders(&self) -> &[Order] {
      &self.orders
   }

   pub fn is_empty(&self) -> bool {
      self.orders.is_empty()
   }

   pub fn next_id(&self) -> u32 {
      self.next_id
   }

   // Commit the cart as a new order. An empty cart is silently rejected,
   // the ledger and the id counter stay untouched
   pub fn checkout(&mut self, cart: &Cart, created_at: NaiveDateTime) -> Option<u32> {
      if cart.is_empty() {
         return None;
      }

      let id = self.next_id;
      self.orders.push(Order {
         id,
         lines: cart.lines().to_vec(),
         created_at,
         total: cart.total(),
      });
      self.next_id += 1;

      Some(id)
   }

   // Unknown id is a no-op
   pub fn delete(&mut self, order_id: u32) {
      self.orders.retain(|order| order.id != order_id);
   }
}

fn order_text(order: &Order) -> String {
   let items = order.lines.iter()
   .fold(String::default(), |acc, line| {
      format!("{}\n{} x {} = {}", acc, line.amount, line.item.title, env::price_with_unit(line.cost()))
   });

   format!("Order #{} — {} /del{}{}\nTotal: {}",
      order.id, order.created_at.format("%d.%m.%Y %H:%M"), order.id,
      items, env::price_with_unit(order.total)
   )
}

// History panel text
pub fn view(ledger: &Ledger) -> String {
   if ledger.is_empty() {
      return String::from("No saved orders");
   }

   ledger.orders().iter()
   .map(order_text)
   .collect::<Vec<String>>()
   .join("\n\n")
}
