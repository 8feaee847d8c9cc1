//! Plumbing commands (low-level Git operations)
//!
//! Plumbing commands provide direct access to object frames. They're
//! primarily used for scripting and for checking objects against git.
//!
//! ## Commands
//!
//! - `hash-object`: Frame a file's contents and print the object ID
//! - `cat-file`: Print the kind, size or contents of a frame file
//! - `mktree`: Build a tree from `ls-tree` formatted lines
//! - `commit-tree`: Build a commit from a tree and parents
//! - `mktag`: Build an annotated tag

pub mod cat_file;
pub mod commit_tree;
pub mod hash_object;
pub mod mktag;
pub mod mktree;
