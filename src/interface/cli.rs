use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "delete-pr-comments",
    version,
    about = "Delete or dismiss pull request comments that match configured filters",
    long_about = "delete-pr-comments: sweeps a pull request's review comments, \
review-linked issue comments and overall review verdicts, removing every item \
that matches the configured text, author and reply filters."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Credential management (store a token, inspect the active source)")]
    Auth(AuthCommand),
    #[command(about = "Remove matching comments from one pull request")]
    Sweep(SweepCommand),
}

#[derive(Debug, Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthSubcommand {
    #[command(about = "Save a GitHub token to the local config dir")]
    Login { token: String },
    #[command(about = "Show which token source is currently active")]
    Which,
}

#[derive(Debug, Args)]
pub struct SweepCommand {
    #[arg(long, help = "Target repository as owner/repo; defaults to GITHUB_REPOSITORY")]
    pub repo: Option<String>,
    #[arg(
        long,
        help = "Pull request number; defaults to the number carried by the invoking event payload"
    )]
    pub pull_request_number: Option<u64>,
    #[arg(
        long = "body-contains",
        help = "Only sweep comments whose body contains one of these substrings (repeatable; newline-separated values are split)"
    )]
    pub body_contains: Vec<String>,
    #[arg(
        long = "username",
        help = "Only sweep comments authored by one of these logins (repeatable; newline-separated values are split)"
    )]
    pub usernames: Vec<String>,
    #[arg(
        long,
        default_value_t = false,
        help = "Skip review comments that already received a reply"
    )]
    pub no_reply: bool,
    #[arg(
        long,
        default_value_t = false,
        help = "Also sweep issue comments that were posted as part of a review submission"
    )]
    pub include_issue_comments: bool,
    #[arg(
        long,
        default_value_t = false,
        help = "Also sweep overall review verdicts (pending ones are deleted, submitted ones dismissed)"
    )]
    pub include_review_verdicts: bool,
    #[arg(
        long,
        default_value = "Dismissed by delete-pr-comments-action",
        help = "Message recorded when dismissing a submitted review"
    )]
    pub dismiss_message: String,
    #[arg(
        long,
        default_value_t = false,
        help = "Log matching comments without deleting or dismissing anything"
    )]
    pub dry_run: bool,
}
