//! # contact-directory
//!
//! A regional directory of contact points grouped by county, with the live
//! opening status of each contact point.
//!
//! The directory is read from a JSON document, every contact point's
//! structured hours are resolved through [`opening_status::resolve`], and the
//! results are turned into display text. Selection and "load more" state is
//! an explicit [`Disclosure`] value.
//!
//! ## Modules
//!
//! - [`model`] — Directory, county and contact point types read from JSON
//! - [`present`] — Status lines, shortened links, address line, card and copy text
//! - [`disclosure`] — County filter and incremental disclosure
//! - [`error`] — Error types

pub mod disclosure;
pub mod error;
pub mod model;
pub mod present;

pub use disclosure::{CountyFilter, Disclosure, View, ITEMS_PER_LOAD};
pub use error::DirectoryError;
pub use model::{
    Address, Contact, ContactPoint, County, Directory, Download, OpeningHours, Social,
};
pub use present::{
    address_line, card_text, copy_text, display_web_link, download_label, social_handle,
    status_line,
};
