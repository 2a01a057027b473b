pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;

pub mod core {
    pub mod compare;
    pub mod display;
    pub mod paginate;
    pub mod record;
    pub mod sorter;
    pub mod status;
}

pub mod io {
    pub mod dataset;
    pub mod export;
    pub mod readers;
}

pub mod utils {
    pub mod util;
}

pub mod constants;

pub use catalog::{Catalog, CatalogConfig};
pub use constants::*;
