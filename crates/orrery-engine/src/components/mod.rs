pub mod body;
pub mod elements;
