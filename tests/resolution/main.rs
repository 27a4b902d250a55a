mod common;

mod localized;
mod missing;
mod multiplicity;
mod ranges;
