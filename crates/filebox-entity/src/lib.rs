//! # filebox-entity
//!
//! Domain entity models for Filebox: the file record, its type enum,
//! and the parent-reference sentinel parsing.

pub mod file;
