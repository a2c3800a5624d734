//! Breadcrumb and label formatting.
//!
//! Stateless: every label is derived from a position and a [`Locale`],
//! never from the data under it, so empty periods and categories read the
//! same as populated ones.

pub mod breadcrumb;
pub mod error;
pub mod format;
pub mod locale;

pub use breadcrumb::{Breadcrumbs, Crumb, breadcrumbs, format_category_label};
pub use error::LabelError;
pub use format::{LabelStyle, format_period, format_period_label};
pub use locale::{DateOrder, Locale};
