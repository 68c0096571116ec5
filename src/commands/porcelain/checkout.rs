use crate::errors::CommandError;
use tracing::info;

pub async fn checkout(args: &[String]) -> Result<(), CommandError> {
    info!(ignored = args.len(), "checkout has no behavior yet");

    Err(CommandError::not_implemented("checkout"))
}
