pub mod card;
pub mod details;
pub mod list;
pub mod state;
pub mod view_model;
