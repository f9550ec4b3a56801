//! Emlak Domain - Wire and domain types for the Emlak API client
//!
//! This crate defines the data model shared by every layer of the client.
//! All types here are pure Rust with no I/O dependencies. Field names on
//! the wire follow the backend's Turkish envelope convention and are
//! mapped to English identifiers via serde renames.

pub mod ai;
pub mod auth;
pub mod correlation;
pub mod dashboard;
pub mod envelope;
pub mod favorite;
pub mod import;
pub mod listing;
pub mod request;
pub mod response;
pub mod search;
pub mod user;

pub use ai::{
    AiAnalysis, AiComparison, AnalysisResponse, ChatContext, ChatReply, ChatRequest,
    ComparisonPick, ComparisonResponse, ComparisonRow,
};
pub use auth::{AuthResponse, CredentialPair, LoginRequest, StorageTier, TokenPair};
pub use correlation::CorrelationId;
pub use dashboard::{DashboardStats, LastImport};
pub use envelope::{Envelope, Paginated, ResultList, GENERIC_ERROR_MESSAGE};
pub use favorite::Favorite;
pub use import::{ImportRowError, ImportState, ImportStatus, ImportStatusResponse, UploadReceipt};
pub use listing::{
    GeoPoint, Listing, ListingKind, ListingQuery, ListingStatus, ListingSummary, PropertyKind,
};
pub use request::{ApiRequest, HttpMethod, RequestBody};
pub use response::RawResponse;
pub use search::{
    RecentSearch, SavedSearch, SaveSearchRequest, SearchFilters, SearchRequest, SearchResults,
};
pub use user::{ChangePasswordRequest, PreferencesUpdate, ProfileUpdate, User, UserPreferences, UserRole};
