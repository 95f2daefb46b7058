pub mod data;

pub use data::DataService;
