//! Map documents
//!
//! A map document is a TOML file describing the map size, a default tool
//! tip and one `[[area]]` table per hot-spot, in storage order:
//!
//! ```toml
//! width = 80
//! height = 24
//! tool_tip = "Floor plan"
//!
//! [[area]]
//! shape = "rect"
//! coords = "2, 1, 30, 10"
//! tool_tip = "Kitchen"
//! tab_order = 1
//! access_key = "k"
//! ```

mod map_document;

pub use map_document::{AreaSpec, MapDocument};
