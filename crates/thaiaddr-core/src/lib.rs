// crates/thaiaddr-core/src/lib.rs

//! # thaiaddr-core
//!
//! Thai postal geography for address forms: a reference table of
//! province / district / subdistrict / postal-code records, a query layer
//! over any subset of it, and the resolution engine that keeps a postal code
//! and a three-level administrative selection consistent while the user types
//! or picks.
//!
//! ```rust
//! use std::sync::Arc;
//! use thaiaddr_core::prelude::*;
//!
//! let json = r#"[{
//!     "provinceCode": 10, "provinceNameTh": "กรุงเทพมหานคร", "provinceNameEn": "Bangkok",
//!     "districtCode": 1004, "districtNameTh": "บางรัก", "districtNameEn": "Bang Rak",
//!     "subdistrictCode": 100401, "subdistrictNameTh": "มหาพฤฒาราม", "subdistrictNameEn": "Maha Phruettharam",
//!     "postalCode": 10500
//! }]"#;
//! let table = Arc::new(ReferenceTable::from_json_str(json)?);
//! let mut engine = Engine::with_defaults(table);
//!
//! engine.edit_postal_text("10500");
//! assert_eq!(engine.selection().subdistrict, Some(100401));
//! # Ok::<(), thaiaddr_core::AddressError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod search; // AddressQuery impl for record slices
pub mod text;
pub mod traits;

pub use crate::config::EngineConfig;
pub use crate::engine::{Engine, EngineEvent, EngineInput, Mode};
pub use crate::error::{AddressError, PostalCodeError, Result};
pub use crate::model::{
    AreaCode, AreaOption, GeographyRecord, Level, Locale, LocalizedName, PostalCode,
    PostalSuggestion, ReferenceTable, SubdistrictOption, TableStats,
};
pub use crate::traits::{AddressQuery, AreaLabel};

/// Everything a typical adapter needs in one import.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::{
        AddressField, AddressSnapshot, Engine, EngineEvent, EngineInput, EngineView, FieldIssue,
        Mode,
    };
    pub use crate::error::{AddressError, Result};
    pub use crate::model::{AreaCode, Level, Locale, PostalCode, ReferenceTable};
    pub use crate::traits::{AddressQuery, AreaLabel};
}
