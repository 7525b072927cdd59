pub mod dog_card;
pub mod filter_bar;
pub mod nav;
pub mod skeleton_card;
pub mod status_badge;
