use crate::errors::CommandError;
use tracing::info;

pub async fn log(args: &[String]) -> Result<(), CommandError> {
    info!(ignored = args.len(), "log has no behavior yet");

    Err(CommandError::not_implemented("log"))
}
