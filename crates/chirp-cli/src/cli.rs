use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chirp",
    about = "chirp — profiles and posts on an ordered key-value store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON state snapshot (overrides `state_file` from the config)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Act as this identity instead of reading CHIRP_CALLER
    #[arg(long = "as", global = true, value_name = "IDENTITY")]
    pub caller: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create or replace your profile
    Profile(ProfileArgs),
    /// Publish a post
    Post(PostArgs),
    /// List every profile
    Home(HomeArgs),
    /// Show a profile and its posts
    Show(ShowArgs),
    /// Render a path: "" for home, "u/<identity>" for a profile
    Render(RenderArgs),
    /// Show profile and post counts
    Stats(StatsArgs),
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub bio: String,
    #[arg(long, default_value = "")]
    pub href: String,
}

#[derive(Args)]
pub struct PostArgs {
    pub message: String,
}

#[derive(Args)]
pub struct HomeArgs {}

#[derive(Args)]
pub struct ShowArgs {
    pub identity: String,
}

#[derive(Args)]
pub struct RenderArgs {
    #[arg(default_value = "")]
    pub path: String,
}

#[derive(Args)]
pub struct StatsArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profile() {
        let cli = Cli::try_parse_from([
            "chirp", "--as", "A", "profile", "--name", "Test User", "--href", "https://testr.xyz",
        ])
        .unwrap();
        assert_eq!(cli.caller, Some("A".into()));
        if let Command::Profile(args) = cli.command {
            assert_eq!(args.name, "Test User");
            assert_eq!(args.bio, "");
            assert_eq!(args.href, "https://testr.xyz");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_profile_requires_name() {
        assert!(Cli::try_parse_from(["chirp", "profile", "--bio", "x"]).is_err());
    }

    #[test]
    fn parse_post() {
        let cli = Cli::try_parse_from(["chirp", "post", "Hello world!"]).unwrap();
        if let Command::Post(args) = cli.command {
            assert_eq!(args.message, "Hello world!");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_home() {
        let cli = Cli::try_parse_from(["chirp", "home"]).unwrap();
        assert!(matches!(cli.command, Command::Home(_)));
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["chirp", "show", "g1alice"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.identity, "g1alice");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_render_defaults_to_home() {
        let cli = Cli::try_parse_from(["chirp", "render"]).unwrap();
        if let Command::Render(args) = cli.command {
            assert_eq!(args.path, "");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "chirp", "stats", "--state", "/tmp/s.json", "--config", "c.toml", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.state, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Command::Stats(_)));
    }
}
