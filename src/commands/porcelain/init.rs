use crate::errors::CommandError;
use tracing::info;

pub async fn init(args: &[String]) -> Result<(), CommandError> {
    info!(ignored = args.len(), "init has no behavior yet");

    Err(CommandError::not_implemented("init"))
}
