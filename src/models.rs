pub mod language_tally;
pub mod profile;
pub mod repository;
pub mod view_state;
