//! FLipMouse AT-command serial protocol
//!
//! This crate provides types and utilities for talking to the FLipMouse
//! assistive input device over its serial AT-command interface. The
//! protocol is simple line-based text:
//!
//! - **Commands** (host → device): `AT <2-letter-code>[ <param>]`,
//!   terminated with `\r`. Parameters are space-separated; string
//!   parameters run to the end of the line.
//! - **Responses** (device → host): plain text lines recognized by fixed
//!   literal prefixes — `OK`, `FLIPMOUSE <version>`,
//!   `VALUES:<p>,<u>,<d>,<l>,<r>`, and `SLOT:<name>` … `END` framing for
//!   multi-slot dumps.
//!
//! # Example
//!
//! ```rust
//! use flip_at_protocol::{CommandRegistry, DeviceLine, build_action_line};
//!
//! let registry = CommandRegistry::standard();
//! let line = build_action_line(&registry, "Press Keys", "KEY_UP ", 0);
//! assert_eq!(line.as_deref(), Some("AT KP KEY_UP "));
//!
//! let response = DeviceLine::classify("SLOT:mouse").unwrap();
//! assert_eq!(response, DeviceLine::SlotBegin { name: "mouse".to_string() });
//! ```

mod codec;
pub mod constants;
mod error;
mod keys;
mod lines;
mod registry;

pub use codec::*;
pub use error::*;
pub use keys::*;
pub use lines::*;
pub use registry::*;
