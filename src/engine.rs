//! Classification engine.
//!
//! This module is the entry point for the docket-number engine. It used to be
//! a single monolithic `engine.rs`; it is now split into focused submodules
//! under `src/engine/` while keeping internal paths stable (for example
//! `crate::engine::matcher` and `crate::engine::LayoutGate`).
//!
//! ## How the parts work together
//!
//! Classifying an input string is a pipeline:
//!
//! ```text
//! input ── tokenize ────────────── segments + local notes   (tokenize.rs)
//!                │
//!                v
//!        TriggerInfo::scan ─────── coarse gates              (trigger.rs)
//!                │
//!                v
//!        match_candidates ──────── place fields per layout   (matcher.rs)
//!          - gate the catalog
//!          - walk each ordering left to right
//!          - score and sort
//!                │
//!                v
//!        disambiguate ──────────── pick / split / degrade    (disambiguate.rs)
//!          - top-score group
//!          - structural tie-break
//!          - interpret fields (years, codes, dictionaries)
//!                │
//!                v
//!        normalize::render ─────── one canonical string      (normalize.rs)
//! ```
//!
//! The matcher is deliberately linear: a field either fits at the cursor or
//! the ordering fails. There is no backtracking, so candidate counts stay
//! bounded by the catalog, never by the input.
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: scans tokenized input for the coarse shapes (digits,
//!   letters, identifying literals) that gate layouts on or off.
//! - `matcher.rs`: places each active layout's fields over the segments and
//!   scores the resulting candidates.
//! - `disambiguate.rs`: reduces scored candidates to one classification,
//!   splitting court-code-less trial dockets and dropping nonsense.
//! - `normalize.rs`: renders the single canonical string per court system.
//!
//! ## Adding a new docket format
//!
//! - Add a `DocketLayout` to the catalog in `catalog.rs` at its priority
//!   position, with orderings for every observed variation.
//! - If the format needs a new coarse trigger, add a `LayoutGate` bit and
//!   teach `TriggerInfo::scan` to set it.
//! - Extend `disambiguate.rs` and `normalize.rs` if the format introduces a
//!   new court family.
//!
//! ## Debugging
//!
//! Set `MADOCKET_DEBUG=1` to print gating, matching and disambiguation
//! traces.

#[path = "engine/disambiguate.rs"]
pub(crate) mod disambiguate;
#[path = "engine/matcher.rs"]
pub(crate) mod matcher;
#[path = "engine/normalize.rs"]
pub(crate) mod normalize;
#[path = "engine/trigger.rs"]
mod trigger;

#[allow(unused_imports)]
pub(crate) use trigger::{LayoutGate, TriggerInfo};
