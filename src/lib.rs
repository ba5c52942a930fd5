// Mentor Client Library
// Core session logic for a mentor directory UI shell: fetching the mentor
// list, reconciling locally cached and server-side favorites, and evaluating
// filter criteria. The shell owns rendering; this crate owns the state.

pub mod api;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod logging;
pub mod models;
pub mod session;
pub mod storage;
pub mod telemetry;

pub use config::ClientConfig;
pub use error::{AppError, ErrorResponse};
pub use favorites::FavoriteSet;
pub use filter::FilterCriteria;
pub use models::Mentor;
pub use session::{MentorSession, SessionPhase};
