pub mod account;
pub mod download;
pub mod guard;
pub mod image;
pub mod page;
pub mod password;
pub mod player;
pub mod site;
pub mod stats;
pub mod token;
