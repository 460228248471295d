//! Section definitions for the site configuration.

mod entry;
mod footer;
mod header;
mod key;
mod theme;

pub use entry::{SectionEntry, SectionPatch};
pub use footer::{FooterPatch, FooterSettings};
pub use header::{HeaderPatch, HeaderSettings, NavLink};
pub use key::SectionKey;
pub use theme::{Theme, ThemePatch};
