/*! Filtering utilities

Filters implement [filter::Filter], and are pure: two equal inputs give two equal outputs.

The only record-level filter is [PairFilter], which keeps records that cover both languages of a pair.
! */
mod filter;
mod pair;

pub use filter::Filter;
pub use pair::PairFilter;
