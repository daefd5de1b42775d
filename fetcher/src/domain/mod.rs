//! Domain records, ports, and the showcase service.
//!
//! Everything here is transport agnostic: adapters in `outbound` decode HTTP
//! bodies into these types and the console adapter in `inbound` renders them.

mod outcome;
pub mod ports;
pub mod primer;
mod reqres;
mod showcase;
mod todo;

pub use outcome::{ErrorResponse, FetchOutcome};
pub use primer::PrimerReport;
pub use reqres::{ColorPage, ColorRecord, UserPage, UserRecord};
pub use showcase::{ShowcaseReport, ShowcaseService};
pub use todo::{DEFAULT_PREVIEW_LIMIT, Todo, truncate_preview};
