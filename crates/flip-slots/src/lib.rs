//! FLipMouse slot (configuration profile) engine
//!
//! A *slot* is one complete named device configuration, expressed as an
//! ordered list of AT-command lines — the literal format stored in the
//! device's EEPROM, exchanged in multi-slot dumps and kept in on-disk
//! profile files.
//!
//! This crate owns the model side of the configuration tool:
//!
//! - [`BindingTable`]: plain editable fields keyed by command code,
//!   decoupled from any rendering surface,
//! - [`Slot`] plus [`store_slot`]/[`display_slot`]: serialization between
//!   the binding table and protocol lines, including the two-line
//!   button-function encoding,
//! - [`SlotManager`]: the slot list with its capacity and deletion rules,
//! - [`DumpCollector`]: assembly of `SLOT:` … `END` device dumps,
//! - profile file I/O and the one-shot request helpers.
//!
//! Everything here is synchronous and single-threaded: `store` and
//! `display` are pure functions over in-memory data. Callers that share a
//! table across threads must serialize access themselves (one mutex held
//! for the duration of a call; the engine takes no locks and does no I/O
//! outside the profile module).

mod bindings;
mod dump;
mod error;
mod manager;
mod profile;
pub mod requests;
mod serializer;
mod slot;

pub use bindings::*;
pub use dump::*;
pub use error::*;
pub use manager::*;
pub use profile::*;
pub use serializer::*;
pub use slot::*;
