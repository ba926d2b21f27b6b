//! # ree-rerank
//!
//! A stateless web service that re-orders property search results. The
//! upstream hybrid search supplies candidates with a relevance score; this
//! service layers five quality-signal categories on top and blends them
//! with the upstream score to produce the final ordering.
//!
//! ## Scoring pipeline
//!
//! ```text
//!                    ┌──────────────────────┐
//!                    │   Upstream results   │
//!                    │ (hybrid score each)  │
//!                    └──────────┬───────────┘
//!                               │ per candidate
//!        ┌──────────┬───────────┼───────────┬──────────────┐
//!        ▼          ▼           ▼           ▼              ▼
//!  ┌──────────┐ ┌────────┐ ┌─────────┐ ┌──────────┐ ┌──────────────┐
//!  │ Property │ │ Seller │ │Freshness│ │Engagement│ │Personalization│
//!  │ quality  │ │  rep.  │ │  decay  │ │  (stub)  │ │    (stub)    │
//!  │   40%    │ │  20%   │ │ + bonus │ │   15%    │ │     10%      │
//!  │          │ │ (stub) │ │   15%   │ │          │ │              │
//!  └────┬─────┘ └───┬────┘ └────┬────┘ └────┬─────┘ └──────┬───────┘
//!       │           │           │           │              │
//!       └───────────┴─────┬─────┴───────────┴──────────────┘
//!                         ▼
//!              ┌─────────────────────┐
//!              │  Weighted combiner  │
//!              │    rerank_score     │
//!              └──────────┬──────────┘
//!                         ▼
//!              ┌─────────────────────┐
//!              │  50/50 blend with   │
//!              │   upstream score    │
//!              └──────────┬──────────┘
//!                         ▼
//!              ┌─────────────────────┐
//!              │ Stable sort desc by │
//!              │     final_score     │
//!              └─────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration and the category weights
//! - [`models`] - Wire types: `PropertyRecord`, rerank request/response
//! - [`scoring::completeness`] - Field coverage, media, description, verification
//! - [`scoring::freshness`] - Exponential age decay with recent-update bonus
//! - [`scoring::signals`] - Pluggable seller/engagement/personalization signals
//! - [`scoring::combine`] - Weighted combination, blending, ordering
//! - [`api`] - Axum HTTP handlers for reranking and weight tuning
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod models;
pub mod scoring;
pub mod state;
