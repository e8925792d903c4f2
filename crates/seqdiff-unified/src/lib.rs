//! Unified-format presentation of shortest edit scripts.
//!
//! Consumes the [`SesElement`](seqdiff_core::SesElement) stream produced by
//! `seqdiff-core` and groups its change runs into unified hunks with
//! surrounding context, plus textual rendering of scripts and hunks.
//!
//! # Key Types
//!
//! - [`UnifiedHunk`] — One `@@ -a,b +c,d @@` block with its contained changes
//! - [`unified_hunks`] — Group an SES into hunks with a given context size
//! - [`ses_to_string`] / [`hunks_to_string`] — ` `/`-`/`+` prefixed rendering

pub mod hunks;
pub mod render;

pub use hunks::{unified_hunks, UnifiedHunk};
pub use render::{hunks_to_string, ses_to_string, write_hunks, write_ses};
