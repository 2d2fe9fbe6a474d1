/* ===============================================================================
Restaurant ordering terminal.
Main module. 04 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use text_io::read;

mod analytics;
mod cart;
mod catalog;
mod commands;
mod database;
mod environment;
mod orders;
mod search;
mod states;

use crate::commands::Command;
use crate::states::AppState;

// ============================================================================
// [Run!]
// ============================================================================
fn main() {
   let mut builder = pretty_env_logger::formatted_builder();
   builder.target(pretty_env_logger::env_logger::Target::Stdout);
   builder.init();

   log::info!("Starting...");

   // Settings from environments
   let vars = environment::Vars::from_env();
   if environment::VARS.set(vars).is_err() {
      log::info!("Something wrong with environment");
   }

   // Restore orders from the previous sessions, if any
   let ledger = database::load();
   let mut state = AppState::new(ledger);

   println!("{}", states::enter(&state));

   // One command at a time until /exit, every transition runs to completion
   // before the next line is read
   loop {
      let line: String = read!("{}\n");
      let cmd = Command::parse(&line);
      if cmd == Command::Exit {
         break;
      }

      println!("{}", states::update(&mut state, cmd));
   }

   log::info!("Bye");
}
