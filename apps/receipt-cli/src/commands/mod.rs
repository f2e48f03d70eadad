pub mod demo;
pub mod manual;
pub mod parse;
