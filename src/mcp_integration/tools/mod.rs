//! Tool schema definitions for MCP discovery.
//!
//! Each function returns one tool definition as a JSON value: name,
//! description, and a JSON Schema for the input parameters. The protocol
//! layer collects them into the `tools/list` response; they are not intended
//! for direct use by application code.

pub mod advisor_schemas;
pub mod alerting_schemas;
pub mod context_schemas;
pub mod device_schemas;
pub mod interface_schemas;
pub mod org_schemas;
pub mod synthetics_schemas;
pub mod system_schemas;
