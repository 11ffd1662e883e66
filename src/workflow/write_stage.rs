//! Write stage
//!
//! Makes sure the target exists, then overwrites it with the request's
//! content. Only reached for `write` requests.

use log::debug;

use crate::error::StorageError;
use crate::request::Request;
use crate::storage::FileOps;

/// Creates the target if absent, then replaces its contents.
///
/// Missing content truncates the file to empty.
pub fn write_stage<F: FileOps + ?Sized>(
    ops: &F,
    request: Request,
) -> Result<Request, StorageError> {
    if !ops.exists(request.path()) {
        debug!("{} absent, creating before write", request.path().display());
        ops.create(request.path())?;
    }

    let result = ops.write(request.path(), request.content_or_empty())?;
    Ok(request.with_result(result))
}
