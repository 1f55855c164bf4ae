// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP surface for kbdesk.
//!
//! Exposes the chat backend over a small JSON API and optionally hosts the
//! frontend build from a static directory.

pub mod handlers;
pub mod server;

pub use handlers::{agent_catalog, AgentInfo, ChatRequest, ChatResponse, ErrorResponse};
pub use server::{build_router, start_server, GatewayState, ServerConfig};
