/* ===============================================================================
Restaurant ordering terminal.
Application state and transitions. 13 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use smart_default::SmartDefault;
use strum::AsRefStr;

use crate::analytics;
use crate::cart::{self, Cart};
use crate::catalog;
use crate::commands::{self, Command};
use crate::database as db;
use crate::environment as env;
use crate::orders::{self, Ledger};
use crate::search;

// Which side panel is open. An explicit variant instead of a nullable string,
// there is no invalid combination to represent
#[derive(Clone, Copy, Debug, PartialEq, SmartDefault, AsRefStr)]
pub enum Panel {
   #[default]
   None,
   #[strum(to_string = "Current order")]
   Cart,
   #[strum(to_string = "Order history")]
   History,
   #[strum(to_string = "Analytics")]
   Analytics,
}

// The whole session state. Transitions are plain functions over this value,
// no rendering environment is needed to drive them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
   pub panel: Panel,
   pub query: String,
   pub cart: Cart,
   pub ledger: Ledger,
}

impl AppState {
   pub fn new(ledger: Ledger) -> Self {
      Self { ledger, ..Self::default() }
   }
}

// Same panel again closes it
pub fn toggle_panel(state: &mut AppState, panel: Panel) {
   state.panel = if state.panel == panel { Panel::None } else { panel };
}

// Greeting with the initial screen
pub fn enter(state: &AppState) -> String {
   format!("Welcome, time zone {}\n\n{}\n{}",
      env::time_zone_info(),
      commands::help(),
      render(state)
   )
}

// The screen for the current state
pub fn render(state: &AppState) -> String {
   match state.panel {
      Panel::None => {
         if state.query.trim().is_empty() {
            catalog::view(&state.cart)
         } else {
            let found = search::filter(&catalog::CATALOG, &state.query);
            format!("Search '{}':\n{}", state.query.trim(), search::view(&found, &state.cart))
         }
      }
      Panel::Cart => format!("== {} ==\n{}", state.panel.as_ref(), cart::view(&state.cart)),
      Panel::History => format!("== {} ==\n{}", state.panel.as_ref(), orders::view(&state.ledger)),
      Panel::Analytics => format!("== {} ==\n{}", state.panel.as_ref(), analytics::view(&state.ledger)),
   }
}

// Commit the cart: append the order, advance the id, clear the cart and close
// the panel in one step. Persisting happens strictly after the in-memory
// transition and its failure never rolls the transition back
fn checkout(state: &mut AppState) -> String {
   match state.ledger.checkout(&state.cart, env::current_date_time()) {
      Some(id) => {
         state.cart.clear();
         state.panel = Panel::None;
         persist(&state.ledger);

         log::info!("Order #{} completed", id);
         format!("Order #{} completed\n{}", id, render(state))
      }
      None => String::from("Cart is empty, nothing to checkout"),
   }
}

fn persist(ledger: &Ledger) {
   if let Err(e) = db::save(ledger) {
      log::error!("{}", e);
   }
}

// Handle one command and return the next screen
pub fn update(state: &mut AppState, cmd: Command) -> String {
   match cmd {
      Command::Toggle(id) => {
         match catalog::find(id) {
            Some(item) => {
               state.cart.toggle(item);
               render(state)
            }
            None => format!("No item {} in the menu", id),
         }
      }

      Command::Inc(id) => {
         state.cart.adjust_amount(id, 1);
         render(state)
      }

      Command::Dec(id) => {
         state.cart.adjust_amount(id, -1);
         render(state)
      }

      // The argument is a cart line or a ledger order, depending on the panel
      Command::Del(id) => {
         match state.panel {
            Panel::History => {
               state.ledger.delete(id);
               persist(&state.ledger);
            }
            _ => {
               if let Some(item) = catalog::find(id) {
                  if state.cart.amount_of(id).is_some() {
                     state.cart.toggle(item);
                  }
               }
            }
         }
         render(state)
      }

      Command::Checkout => checkout(state),

      Command::Find(query) => {
         state.query = query;
         state.panel = Panel::None;
         render(state)
      }

      Command::Panel(panel) => {
         toggle_panel(state, panel);
         render(state)
      }

      Command::Help | Command::Unknown => commands::help(),

      // The input loop breaks before this
      Command::Exit => String::default(),
   }
}

// ============================================================================
// [Tests]
// ============================================================================
#[cfg(test)]
mod tests {
   use super::*;

   fn state_with_cart(ids: &[u32]) -> AppState {
      let mut state = AppState::default();
      for id in ids {
         update(&mut state, Command::Toggle(*id));
      }
      state
   }

   #[test]
   fn panel_toggle_is_tri_state() {
      let mut state = AppState::default();
      assert_eq!(state.panel, Panel::None);

      toggle_panel(&mut state, Panel::Cart);
      assert_eq!(state.panel, Panel::Cart);

      toggle_panel(&mut state, Panel::History);
      assert_eq!(state.panel, Panel::History);

      toggle_panel(&mut state, Panel::History);
      assert_eq!(state.panel, Panel::None);
   }

   #[test]
   fn checkout_commits_everything_together() {
      let mut state = state_with_cart(&[1, 2]);
      toggle_panel(&mut state, Panel::Cart);

      update(&mut state, Command::Checkout);

      assert_eq!(state.ledger.orders().len(), 1);
      assert_eq!(state.ledger.next_id(), 2);
      assert!(state.cart.is_empty());
      assert_eq!(state.panel, Panel::None);
   }

   #[test]
   fn checkout_of_empty_cart_changes_nothing() {
      let mut state = AppState::default();
      toggle_panel(&mut state, Panel::Cart);
      let before = state.clone();

      update(&mut state, Command::Checkout);
      assert_eq!(state, before);
   }

   #[test]
   fn toggle_of_unknown_item_changes_nothing() {
      let mut state = AppState::default();
      let before = state.clone();

      update(&mut state, Command::Toggle(9999));
      assert_eq!(state, before);
   }

   #[test]
   fn del_targets_the_open_panel() {
      // Order #1 in the ledger, item 1 back in the cart
      let mut state = state_with_cart(&[2]);
      update(&mut state, Command::Checkout);
      update(&mut state, Command::Toggle(1));

      // Closed panel: /del1 drops the cart line
      update(&mut state, Command::Del(1));
      assert!(state.cart.is_empty());
      assert_eq!(state.ledger.orders().len(), 1);

      // History open: /del1 drops the order instead
      update(&mut state, Command::Toggle(1));
      toggle_panel(&mut state, Panel::History);
      update(&mut state, Command::Del(1));
      assert!(state.ledger.is_empty());
      assert_eq!(state.cart.lines().len(), 1);
   }

   #[test]
   fn find_sets_the_query_and_blank_resets() {
      let mut state = AppState::default();

      update(&mut state, Command::Find(String::from("roll")));
      assert_eq!(state.query, "roll");
      assert!(render(&state).contains("Spring Rolls"));

      update(&mut state, Command::Find(String::default()));
      assert!(render(&state).contains("== Starters =="));
   }
}
