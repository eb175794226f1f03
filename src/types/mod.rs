//! Core type definitions shared across the translation engine

use rapidhash::RapidHashMap;

mod reference_error;
pub use reference_error::ReferenceError;

mod settings;
pub use settings::{MAX_HEADING_LEVEL, Settings};

/// Make it easier to switch between different hash backends.
pub type KeyMap<K, V> = RapidHashMap<K, V>;
