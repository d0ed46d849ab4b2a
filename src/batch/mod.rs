mod item;
mod planner;

#[cfg(test)]
mod tests;

pub use item::InputItem;
pub use planner::{Batch, Capacity, plan};
