pub mod domain;
pub mod error;
pub mod lists;
pub mod normalize;
pub mod parsers;

pub use domain::Round;
pub use error::{ParseError, Result};
pub use lists::{build_final_round_list, build_spot_counts_from_round1, build_two_lists, RoundLists};
pub use parsers::{parse_from_text, parse_verify_document};
