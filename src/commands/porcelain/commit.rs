use crate::errors::CommandError;
use tracing::info;

pub async fn commit(args: &[String]) -> Result<(), CommandError> {
    info!(ignored = args.len(), "commit has no behavior yet");

    Err(CommandError::not_implemented("commit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn commit_is_not_implemented() {
        let args: Vec<String> = ["--amend", "-m", "Initial commit"]
            .iter()
            .map(|arg| arg.to_string())
            .collect();

        let error = commit(&args).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NotImplemented);
        assert_eq!(error.command(), "commit");
        assert_eq!(error.to_string(), "not implemented");
    }
}
