/* ===============================================================================
Restaurant ordering terminal.
Global vars, configuration from environment. 04 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use chrono::{FixedOffset, NaiveDateTime, Utc};
use once_cell::sync::OnceCell;
use std::env;

// Settings
pub static VARS: OnceCell<Vars> = OnceCell::new();

// Price suffix when nothing is configured
const DEF_PRICE_UNIT: &str = "₹";

// Environment variables
pub struct Vars {
   // Price suffix
   price_unit: String,

   // Time zone, UTC
   time_zone: FixedOffset,

   // Path to the ledger store, empty disables persistence
   orders_file: Option<String>,
}

impl Vars {
   pub fn from_env() -> Self {
      Vars {
         // Price suffix
         price_unit: {
            match env::var("PRICE_UNIT") {
               Ok(s) => s,
               Err(_) => String::from(DEF_PRICE_UNIT), // if the variable is not set, that's ok
            }
         },

         // Time zone, UTC
         time_zone: {
            match env::var("TIME_ZONE") {
               Ok(s) => match s.parse::<i32>() {
                  Ok(n) => FixedOffset::east_opt(n * 3600).unwrap_or_else(utc),
                  Err(e) => {
                     log::info!("Something wrong with TIME_ZONE: {}", e);
                     utc()
                  }
               }
               Err(_) => utc(),
            }
         },

         // Ledger store
         orders_file: {
            match env::var("ORDERS_FILE") {
               Ok(s) if !s.is_empty() => Some(s),
               _ => {
                  log::info!("There is no ORDERS_FILE, orders are kept in memory only");
                  None
               }
            }
         },
      }
   }
}

fn utc() -> FixedOffset {
   FixedOffset::east_opt(0).unwrap()
}

// Current local time
pub fn current_date_time() -> NaiveDateTime {
   let our_timezone = VARS.get().map(|vars| vars.time_zone).unwrap_or_else(utc);
   Utc::now().with_timezone(&our_timezone).naive_local()
}

// String with info about time zone
pub fn time_zone_info() -> String {
   let our_timezone = VARS.get().map(|vars| vars.time_zone).unwrap_or_else(utc);
   let our_timezone = our_timezone.local_minus_utc() / 3600;
   if our_timezone > 0 {
      format!("UTC+{}", our_timezone)
   } else {
      format!("UTC{}", our_timezone)
   }
}

// Price with units
pub fn price_with_unit(price: usize) -> String {
   let unit = VARS.get().map(|vars| vars.price_unit.as_str()).unwrap_or(DEF_PRICE_UNIT);
   format!("{}{}", price, unit)
}

// Path to the ledger store
pub fn orders_file() -> Option<String> {
   VARS.get().and_then(|vars| vars.orders_file.clone())
}
