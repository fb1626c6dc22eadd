pub mod board;
pub mod domain;
pub mod filter;

pub use board::{InternshipBoard, PostingError};
pub use domain::{
    Internship, InternshipDraft, InternshipId, InternshipLevel, InternshipStatus, ParseLevelError,
    ParseStatusError,
};
pub use filter::InternshipFilter;
