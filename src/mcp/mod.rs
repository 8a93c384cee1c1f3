//! MCP server module
//!
//! rmcp service wiring for the FLX tools.

pub mod server;

pub use server::FlxService;
