use std::path::{Path, PathBuf};

use anyhow::Context;
use chirp_service::{
    BlogService, CallerProvider, Clock, EnvCaller, Identity, ServiceConfig, ServiceError,
    ServiceResult, StaticCaller, NOT_FOUND,
};
use colored::Colorize;

use crate::cli::*;

/// Snapshot used when neither `--state` nor the config names one.
pub const DEFAULT_STATE_FILE: &str = "chirp-state.json";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    let state_path = cli
        .state
        .clone()
        .or_else(|| config.state_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));
    let service = open_service(config, &state_path)?;

    let provider: Box<dyn CallerProvider> = match &cli.caller {
        Some(raw) => Box::new(StaticCaller::new(Identity::parse(raw.as_str())?)),
        None => Box::new(EnvCaller::default()),
    };

    match cli.command {
        Command::Profile(args) => {
            let caller = provider.current_caller()?;
            cmd_profile(&service, &caller, args)?;
            service.save(&state_path)?;
        }
        Command::Post(args) => {
            let caller = provider.current_caller()?;
            cmd_post(&service, &caller, args)?;
            service.save(&state_path)?;
        }
        Command::Home(_) => cmd_home(&service)?,
        Command::Show(args) => {
            let viewer = resolve_viewer(provider.as_ref())?;
            print!("{}", service.render_profile(viewer.as_ref(), &args.identity)?);
        }
        Command::Render(args) => {
            let viewer = resolve_viewer(provider.as_ref())?;
            print!("{}", dispatch_path(&service, viewer.as_ref(), &args.path)?);
        }
        Command::Stats(_) => cmd_stats(&service, &state_path)?,
    }
    Ok(())
}

fn open_service(config: ServiceConfig, state_path: &Path) -> anyhow::Result<BlogService> {
    if state_path.exists() {
        BlogService::load(config, Default::default(), state_path)
            .with_context(|| format!("loading state {}", state_path.display()))
    } else {
        tracing::debug!(path = %state_path.display(), "no snapshot yet, starting empty");
        Ok(BlogService::new(config))
    }
}

/// The viewer for read-only pages. No caller at all means an anonymous
/// viewer; a caller that is present but invalid is an error.
pub fn resolve_viewer(provider: &dyn CallerProvider) -> ServiceResult<Option<Identity>> {
    match provider.current_caller() {
        Ok(identity) => Ok(Some(identity)),
        Err(ServiceError::NoCaller(reason)) => {
            tracing::debug!(%reason, "rendering as anonymous viewer");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Map a request path to a page: `""` is home, `u/<identity>` a profile,
/// anything else `not found`.
pub fn dispatch_path<C: Clock>(
    service: &BlogService<C>,
    viewer: Option<&Identity>,
    path: &str,
) -> ServiceResult<String> {
    let path = path.trim_matches('/');
    if path.is_empty() {
        return service.render_home();
    }
    match path.strip_prefix("u/") {
        Some(identity) => service.render_profile(viewer, identity),
        None => Ok(NOT_FOUND.to_string()),
    }
}

fn cmd_profile<C: Clock>(
    service: &BlogService<C>,
    caller: &Identity,
    args: ProfileArgs,
) -> anyhow::Result<()> {
    service.create_profile(caller, &args.name, &args.bio, &args.href)?;
    println!("{} Profile saved for {}", "✓".green().bold(), caller.as_str().cyan());
    Ok(())
}

fn cmd_post<C: Clock>(
    service: &BlogService<C>,
    caller: &Identity,
    args: PostArgs,
) -> anyhow::Result<()> {
    let key = service.post(caller, &args.message)?;
    println!("{} Posted {}", "✓".green().bold(), key.to_string().yellow());
    Ok(())
}

fn cmd_home<C: Clock>(service: &BlogService<C>) -> anyhow::Result<()> {
    let home = service.render_home()?;
    if home.is_empty() {
        println!("{}", "No profiles yet.".dimmed());
    } else {
        print!("{home}");
    }
    Ok(())
}

fn cmd_stats<C: Clock>(service: &BlogService<C>, state_path: &Path) -> anyhow::Result<()> {
    println!("State: {}", state_path.display().to_string().bold());
    println!("  Profiles: {}", service.profile_count()?.to_string().bold());
    println!("  Posts: {}", service.post_count()?.to_string().bold());
    println!("  Next sequence: {}", service.next_sequence()?.value().to_string().yellow());
    Ok(())
}
