//! Focus navigation engine
//!
//! Keyboard traversal follows each area's tab order, not storage order.
//! Only selectable areas take part (enabled, tab order above zero, firing
//! events). Ties between equal tab orders always go to the lowest storage
//! index, and traversal never wraps around.

mod tab_order;

pub use tab_order::{
    access_key_matches, first_selectable, has_tab_stop, last_selectable, next_selectable,
};

#[cfg(test)]
#[path = "navigation/tab_order_tests.rs"]
mod tab_order_tests;
