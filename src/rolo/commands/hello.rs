use crate::commands::CmdResult;
use crate::error::Result;

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::info("How can I help you?"))
}
