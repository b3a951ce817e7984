//! # Submod Library
//!
//! Core functionality for the `sm` workspace orchestrator: a declarative
//! catalog of external repositories ("submodules") grouped by kind and
//! product line, checked out flat under a hidden directory and projected
//! into two derived symlink navigation views, with git state reporting and
//! build-tool command dispatch on top.
//!
//! ## Core Concepts
//!
//! - **Registry (`config`, `defaults`)**: the ordered catalog of entries
//!   plus the checkout directory name. Built once at startup — from the
//!   built-in catalog or a YAML registry file — and passed by reference
//!   into every component.
//! - **Views (`links`)**: two disposable symlink trees derived from the
//!   registry: `by-type/` grouped by kind under full entry names, and
//!   `by-product/` grouped by product line under short names. Safe to
//!   rebuild at any time.
//! - **Dispatch (`runner`, `dispatch`)**: each checkout is classified by
//!   marker files (`justfile` > `package.json` > `Makefile`) and commands
//!   are forwarded to the matching tool with inherited stdio; product-wide
//!   dispatch continues past individual failures.
//! - **State (`status`, `git`)**: per-entry branch, cleanliness, and
//!   latest-commit summary rendered as a fixed-width table.
//! - **Lifecycle (`lifecycle`)**: `init` (clone-if-absent, then views) and
//!   `sync` (pull-with-rebase where present), both accumulating per-entry
//!   outcomes rather than stopping at the first failure.
//! - **Process capability (`process`)**: every shell-out goes through the
//!   `ProcessRunner` trait so tests can substitute a recording fake.
//!
//! All operations are sequential and blocking; external commands inherit
//! the operator's terminal, so interactive prompts (e.g. clone
//! credentials) behave as if run directly.

pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod git;
pub mod lifecycle;
pub mod links;
pub mod output;
pub mod process;
pub mod runner;
pub mod status;
pub mod suggestions;
pub mod workspace;
