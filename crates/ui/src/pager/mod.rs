//! Selection-aware pagination
//!
//! The pager stack: the filter-and-paginate primitive, comparator-driven
//! sorting with an optional cache slot, the selection [`Model`] and the
//! prev/next pager widget. Data views compose all four; callers wanting
//! manual control can build a [`Model`] directly.

pub mod filter;
pub mod model;
pub mod sort;
pub mod widget;

pub use filter::filter_and_paginate;
pub use model::{Model, ModelOptions, QueryPredicate, checkbox_key};
pub use sort::{Comparator, SortOptions, sort};
pub use widget::{pager, range_label};
