/* ===============================================================================
Restaurant ordering terminal.
Ledger persistence. 15 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::fs;

use crate::environment as env;
use crate::orders::{Ledger, Order};

// Restore the ledger from the store. Anything short of a readable, well-formed
// file yields an empty ledger, the session must start either way
pub fn load() -> Ledger {
   let path = match env::orders_file() {
      Some(path) => path,
      None => return Ledger::new(),
   };

   let raw = match fs::read_to_string(&path) {
      Ok(raw) => raw,
      Err(e) => {
         log::info!("No saved orders in {} ({}), starting empty", path, e);
         return Ledger::new();
      }
   };

   match serde_json::from_str::<Vec<Order>>(&raw) {
      Ok(orders) => {
         log::info!("Loaded {} orders from {}", orders.len(), path);
         Ledger::from_orders(orders)
      }
      Err(e) => {
         log::error!("Corrupted orders in {}: {}", path, e);
         Ledger::new()
      }
   }
}

// Serialize the whole ledger on every mutation, no partial writes
pub fn save(ledger: &Ledger) -> Result<(), String> {
   let path = match env::orders_file() {
      Some(path) => path,
      None => return Ok(()), // persistence disabled
   };

   let raw = serde_json::to_string(ledger.orders())
   .map_err(|e| format!("database::save serialize: {}", e))?;

   fs::write(&path, raw)
   .map_err(|e| format!("database::save write {}: {}", path, e))
}
