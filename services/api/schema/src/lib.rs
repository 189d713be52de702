//! Sea-ORM entities for all four databases the panel talks to.
//!
//! `sites`, `pages`, `downloads`, and `images` live in the web content
//! database owned by this service. `accounts`, `players`, `guilds`, and
//! `gm_list` map legacy game-server tables and are never migrated here.

pub mod accounts;
pub mod downloads;
pub mod gm_list;
pub mod guilds;
pub mod images;
pub mod pages;
pub mod players;
pub mod sites;
