//! Core types and membership proof verification for the Namespaced Merkle Tree.
//!
//! A namespaced merkle tree is a binary merkle tree whose nodes additionally carry the
//! minimum and maximum namespace identifier spanned by their subtree. Data availability
//! systems use it to let a verifier confirm that a piece of data, tagged with a namespace,
//! is included at a claimed position under an already-trusted root, without access to the
//! whole tree.
//!
//! This crate defines the node schema and the verification routines in a hash-agnostic
//! manner. Tree construction and proof generation happen elsewhere; verification consumes
//! their outputs at the trust boundary and is a pure function of them.
//!
//! The types and verification routines of this crate do not require the standard library,
//! but do require Rust's alloc crate.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod hasher;
pub mod path;
pub mod proof;
pub mod tree;

pub use proof::MembershipProof;
