pub mod categories;
pub mod health;
pub mod pages;
pub mod tools;
