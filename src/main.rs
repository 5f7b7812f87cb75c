mod application;
mod domain;
mod infrastructure;
mod interface;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use application::{
    auth_manager::AuthManager,
    predicate,
    sweep_workflow::{SweepOptions, SweepWorkflow},
};
use infrastructure::{
    event_context::{split_repo, EventContext},
    github_adapter::OctocrabGitHubRepository,
    local_config_adapter::LocalConfigDir,
    shell_adapter::CommandShellAdapter,
    token_providers::{EnvTokenProvider, GhCliTokenProvider, StoredTokenProvider},
};
use interface::cli::{AuthSubcommand, Cli, Commands, SweepCommand};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_dir = LocalConfigDir::new()?;
    let shell = CommandShellAdapter;
    let stored_provider = StoredTokenProvider::new(config_dir.auth_token_path());
    let gh_provider = GhCliTokenProvider::new(&shell);
    let env_provider = EnvTokenProvider;
    let auth_manager = AuthManager::new(
        vec![&gh_provider, &env_provider, &stored_provider],
        &stored_provider,
    );

    match cli.command {
        Commands::Auth(auth) => match auth.command {
            AuthSubcommand::Login { token } => {
                auth_manager.login(&token)?;
                println!("token saved to local config");
            }
            AuthSubcommand::Which => {
                if let Some(resolution) = auth_manager.resolve_token()? {
                    println!("token source: {}", resolution.source);
                    println!(
                        "token prefix: {}***",
                        &resolution.token.chars().take(6).collect::<String>()
                    );
                } else {
                    println!("no token found (checked: gh auth token, GITHUB_TOKEN, stored token)");
                }
            }
        },
        Commands::Sweep(sweep) => run_sweep(&auth_manager, sweep).await?,
    }

    Ok(())
}

async fn run_sweep(auth_manager: &AuthManager<'_>, cmd: SweepCommand) -> Result<()> {
    let event = EventContext::from_env()?;

    let full_name = cmd
        .repo
        .or(event.repository)
        .context("no target repository: pass --repo or set GITHUB_REPOSITORY")?;
    let (owner, repo) = split_repo(&full_name)?;

    let Some(pull_number) = cmd.pull_request_number.or(event.pull_request_number) else {
        warn!("no pull request number in flags or event payload, nothing to do");
        return Ok(());
    };

    let token = auth_manager.require_token()?.token;
    let github = OctocrabGitHubRepository::new(token)?;

    let options = SweepOptions {
        criteria: predicate::criteria_from_inputs(&cmd.body_contains, &cmd.usernames, cmd.no_reply),
        include_issue_comments: cmd.include_issue_comments,
        include_review_verdicts: cmd.include_review_verdicts,
        dismiss_message: cmd.dismiss_message,
        dry_run: cmd.dry_run,
    };
    let workflow = SweepWorkflow::new(&github, options);
    let stats = workflow.sweep(owner, repo, pull_number).await?;

    println!(
        "sweep_result repo={} pr={} matched={} deleted_review_comments={} deleted_issue_comments={} deleted_pending_reviews={} dismissed_reviews={} failed={} last_error={:?}",
        stats.repo,
        stats.pull_request,
        stats.matched,
        stats.deleted_review_comments,
        stats.deleted_issue_comments,
        stats.deleted_pending_reviews,
        stats.dismissed_reviews,
        stats.failed,
        stats.last_error
    );
    if stats.failed > 0 {
        anyhow::bail!("sweep finished with failures: {}", stats.failed);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
