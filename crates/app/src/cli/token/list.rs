use clap::Args;
use uuid::Uuid;
use vacfinder_app::{auth::PgAuthService, database, domain::users::records::UserUuid};

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User UUID whose tokens should be listed
    #[arg(long)]
    user_uuid: Uuid,
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAuthService::new(pool);

    let tokens = service
        .list_api_tokens(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens for user {}", args.user_uuid);
        return Ok(());
    }

    for token in tokens {
        let state = if token.revoked_at.is_some() {
            "revoked"
        } else {
            "active"
        };

        println!(
            "token_uuid: {} version: {} state: {state} created_at: {}",
            token.uuid,
            token.version.as_i16(),
            token.created_at
        );

        if let Some(last_used_at) = token.last_used_at {
            println!("  last_used_at: {last_used_at}");
        }

        if let Some(expires_at) = token.expires_at {
            println!("  expires_at: {expires_at}");
        }
    }

    Ok(())
}
