//! JSON-RPC 2.0 communication layer for the host page.
//!
//! The viewer runs inside a page (usually an iframe) that draws its own
//! loading bar and buttons. Messages travel over `postMessage` both ways.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent)  <──postMessage──>  Viewer (canvas)
//!        │                                    │
//!        ├─ Request (with ID) ──────────────> │
//!        │ <───────────── Response (with ID) ─┤
//!        │ <──────── Notification (no ID) ────┤
//! ```
//!
//! ## Notifications sent by the viewer
//!
//! - `loading_progress` `{url, loaded, total}`: one per counted load
//! - `loading_complete` `{}`: once, after the last counted load
//! - `transition_phase` `{phase}`: `running`, then `done`
//! - `fps_update` `{fps}`: every half second
//! - `debug_message` `{message}`: parse errors and unknown methods
//!
//! ## Requests handled
//!
//! - `get_fps`
//! - `get_loading_progress`
//! - `get_transition_phase`
//! - `set_fullscreen` `{enabled}`
//!
//! Errors use the standard codes: `-32601` method not found, `-32602`
//! invalid params.

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
