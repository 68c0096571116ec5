use crate::errors::CommandError;
use tracing::info;

pub async fn add(args: &[String]) -> Result<(), CommandError> {
    info!(ignored = args.len(), "add has no behavior yet");

    Err(CommandError::not_implemented("add"))
}
