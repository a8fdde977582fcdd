use crate::commands::CmdResult;
use crate::error::Result;

/// The farewell reply. Saving and terminating are the loop's job, not this
/// handler's.
pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::success("Good bye!"))
}
