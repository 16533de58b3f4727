// Service exports
pub mod aliases;
pub mod catalog;
pub mod remote;

pub use aliases::{institution_from_record, CanonicalField, RawRecord};
pub use catalog::{in_country, load_catalog, CatalogError};
pub use remote::{full_country_name, institutions_from_payload, RemoteCatalogClient};
