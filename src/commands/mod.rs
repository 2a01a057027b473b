mod export;
mod view;

pub use export::export;
pub use view::{view, write_page};

#[cfg(test)]
mod tests;
