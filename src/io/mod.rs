//! Persistenz: JSON-Export/Import und Sitzungsspeicher.

pub mod document;
pub mod store;

pub use document::{
    parse_track_document, write_track_document, CameraPose, DocPoint, DocumentMeta, TrackDocument,
};
pub use store::{load_session, save_session, KeyValueStore, MemoryStore, SessionData};
