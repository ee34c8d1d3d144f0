mod category;

pub use category::{ExpenseCategory, CATALOG};

#[cfg(test)]
mod tests;
