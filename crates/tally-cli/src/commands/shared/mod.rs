pub mod finish;
pub mod parse;
pub mod photo;
