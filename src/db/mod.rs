//! Persistence layer for taskforge.
//!
//! The whole task collection lives in one JSON document. [`db::Db`] owns the
//! file format and the atomic rewrite; [`tasks::Tasks`] is the in-memory
//! collection with identifier resolution and insert/update/remove, saving
//! after every change.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskforge::db::tasks::Tasks;
//!
//! let tasks = Tasks::open("tasks.json")?;
//! let task = tasks.resolve("202505")?;
//! println!("{}", task.title);
//! # Ok::<(), taskforge::libs::error::TaskError>(())
//! ```
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "id": "20250520170000123",
//!     "title": "Pay electricity bill",
//!     "description": null,
//!     "priority": "urgent",
//!     "due": "2025-05-21T17:00:00",
//!     "tags": ["bills", "home"],
//!     "completed": false,
//!     "completed_at": null,
//!     "archived": false,
//!     "archived_at": null,
//!     "attachments": [],
//!     "created_at": "2025-05-20T17:00:00.123"
//!   }
//! ]
//! ```

pub mod db;
pub mod tasks;
