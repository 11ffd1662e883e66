//! Router stage
//!
//! Dispatches a request to its filesystem primitive. Writes are not handled
//! here; the request is passed on unchanged for the write stage.

use log::debug;

use crate::error::StorageError;
use crate::request::{Action, Request};
use crate::storage::FileOps;

/// Routes a request by its action.
///
/// Returns the record with `result` set for every action except `Write`,
/// which comes back untouched.
pub fn route<F: FileOps + ?Sized>(ops: &F, request: Request) -> Result<Request, StorageError> {
    debug!("Routing {} for {}", request.action(), request.path().display());

    let result = match request.action() {
        Action::Read => ops.read(request.path())?,
        Action::Create => ops.create(request.path())?,
        Action::Delete => ops.delete(request.path())?,
        Action::Write => return Ok(request),
        Action::Unknown(raw) => format!("Unknown action: {}", raw),
    };

    Ok(request.with_result(result))
}
