//! Near-Earth object close-approach explorer.
//!
//! This library loads near-Earth objects (NEOs) and their close approaches
//! from CSV/JSON data, links them into a [`NeoDatabase`], and answers queries
//! built from composable attribute filters.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use neo_core::{CloseApproach, Criteria, NearEarthObject, NeoDatabase, create_filters, limit};
//!
//! # fn main() -> neo_core::Result<()> {
//! let time = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 12, 0).unwrap();
//! let db = NeoDatabase::new(
//!     vec![NearEarthObject::new("2015 CL", None, Some(1.2), true)],
//!     vec![CloseApproach::new("2015 CL", time, 0.5, 12.0)],
//! );
//!
//! let filters = create_filters(&Criteria {
//!     distance_max: Some(0.6),
//!     ..Criteria::default()
//! });
//! let matches: Vec<_> = limit(db.query(&filters), Some(5)).collect::<neo_core::Result<_>>()?;
//! assert_eq!(matches.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod database;
pub mod error;
pub mod extract;
pub mod filters;
pub mod models;
pub mod query;
pub mod trie;

pub use database::NeoDatabase;
pub use error::{Error, Result};
pub use extract::{load_approaches, load_neos, read_approaches, read_neos};
pub use filters::{
    Attribute, AttributeFilter, Comparator, Criteria, DiameterFilter, DistanceFilter, FilterSet,
    HazardousFilter, Predicate, TimeFilter, VelocityFilter, create_filters, parse_criterion,
};
pub use models::{ApproachId, ApproachView, CloseApproach, NearEarthObject, NeoId};
pub use query::{limit, query};
pub use trie::NameTrie;
