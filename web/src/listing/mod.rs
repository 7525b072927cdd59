//! The filtered dog listing, independent of any UI runtime.
//!
//! Data flows one way: [`filter::FilterState`] → [`client::ShelterClient`] →
//! [`outcome::ListingState`] → [`view::render`].  The Leptos page and
//! [`page::ListingPage`] are two drivers of the same pieces.

pub mod breeds;
pub mod client;
pub mod filter;
pub mod outcome;
pub mod page;
pub mod view;

#[cfg(test)]
pub(crate) mod mock;
