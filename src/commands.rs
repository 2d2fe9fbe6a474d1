/* ===============================================================================
Restaurant ordering terminal.
Dialogue commands. 13 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::states::Panel;

// Commands with arguments
const INC: &str = "/inc";
const DEC: &str = "/dec";
const DEL: &str = "/del";
const FIND: &str = "/find";

// Main commands
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
   Toggle(u32), // put an item into the cart or take it back out
   Inc(u32),
   Dec(u32),
   Del(u32), // cart line or ledger order, depending on the open panel
   Checkout,
   Find(String),
   Panel(Panel),
   Help,
   Exit,
   Unknown,
}

impl Command {
   pub fn parse(s: &str) -> Self {
      let s = s.trim();

      // Try as command without arguments
      match s {
         "/cart" => return Self::Panel(Panel::Cart),
         "/history" => return Self::Panel(Panel::History),
         "/stat" => return Self::Panel(Panel::Analytics),
         "/checkout" => return Self::Checkout,
         "/help" => return Self::Help,
         "/exit" => return Self::Exit,
         _ => (),
      }

      // A bare item id toggles the item
      if let Ok(id) = s.parse::<u32>() {
         return Self::Toggle(id);
      }

      // Looking for the commands with arguments
      let prefix = s.get(..4).unwrap_or_default();
      let r_part = s.get(4..).unwrap_or_default();
      if prefix == INC { Self::Inc(r_part.parse().unwrap_or_default()) }
      else if prefix == DEC { Self::Dec(r_part.parse().unwrap_or_default()) }
      else if prefix == DEL { Self::Del(r_part.parse().unwrap_or_default()) }
      else if s.get(..5).unwrap_or_default() == FIND {
         Self::Find(String::from(s.get(5..).unwrap_or_default().trim()))
      }
      else { Self::Unknown }
   }
}

pub fn help() -> String {
   String::from(
      "Enter an item number to put it into the cart, the same number takes it back out\n\
      /inc7 /dec7 — change the amount of item 7 in the cart\n\
      /find tea — search the menu, /find without text shows the full menu\n\
      /cart /history /stat — open or close a panel\n\
      /checkout — complete the current order\n\
      /del7 — remove line 7 from the cart, or order #7 when the history is open\n\
      /help /exit"
   )
}

// ============================================================================
// [Tests]
// ============================================================================
#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn fixed_words() {
      assert_eq!(Command::parse("/cart"), Command::Panel(Panel::Cart));
      assert_eq!(Command::parse("/history"), Command::Panel(Panel::History));
      assert_eq!(Command::parse("/stat"), Command::Panel(Panel::Analytics));
      assert_eq!(Command::parse(" /checkout "), Command::Checkout);
      assert_eq!(Command::parse("/exit"), Command::Exit);
   }

   #[test]
   fn commands_with_arguments() {
      assert_eq!(Command::parse("5"), Command::Toggle(5));
      assert_eq!(Command::parse("/inc12"), Command::Inc(12));
      assert_eq!(Command::parse("/dec3"), Command::Dec(3));
      assert_eq!(Command::parse("/del7"), Command::Del(7));
      assert_eq!(Command::parse("/find Spring"), Command::Find(String::from("Spring")));
      assert_eq!(Command::parse("/find"), Command::Find(String::default()));
   }

   #[test]
   fn garbage_is_unknown() {
      assert_eq!(Command::parse("abc"), Command::Unknown);
      assert_eq!(Command::parse("/delx"), Command::Del(0));
      assert_eq!(Command::parse(""), Command::Unknown);
   }
}
