//! Ledger Copilot - Conversational Transaction Drafting
//!
//! Turns free-form business messages ("sold 10 widgets to Acme at 100 on
//! cash", "rent 50000") into structured, validated accounting drafts,
//! asking one clarifying question at a time until a draft is ready for the
//! ledger.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
