pub use dalmatia_entities as entities;

pub mod repositories;
pub mod usecases;
pub mod util;
