//! Porcelain commands (user-facing version control operations)
//!
//! Each command is registered with the root dispatcher but has no behavior
//! yet: the handler ignores its arguments, touches nothing, and fails with
//! [`CommandError::NotImplemented`](crate::errors::CommandError::NotImplemented).
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `log`: Show commit history
//! - `checkout`: Switch branches or restore files

mod add;
mod checkout;
mod commit;
mod init;
mod log;

pub use add::add;
pub use checkout::checkout;
pub use commit::commit;
pub use init::init;
pub use log::log;
