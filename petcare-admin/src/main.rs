use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Target};
use anyhow::Context;
use log::LevelFilter;

use petcare_admin::app;
use petcare_admin::domains::auth::Session;
use petcare_admin::domains::settings::SettingsDomain;
use petcare_admin::domains::settings::sections::personalization::{
    FIELDS, FormPhase, PersonalizationMessage, ToastLevel,
};
use petcare_admin::infra::config::AdminConfig;
use petcare_admin::infra::theme::ThemeStore;

#[derive(Debug, Parser)]
#[command(name = "petcare-admin", about = "Manage pet-care organization branding")]
struct Cli {
    /// Access token issued by the identity provider
    #[arg(long, env = "PETCARE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Organization to act for
    #[arg(long, env = "PETCARE_ORG_ID")]
    org_id: Option<String>,

    /// Use this config file instead of the one in the user config dir
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the active theme's branding
    Show,
    /// Change branding values and save them
    Update(UpdateArgs),
    /// Write the effective configuration (defaults plus environment) to disk
    InitConfig,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    #[arg(long)]
    logo_url: Option<String>,
    #[arg(long)]
    logo_alt_text: Option<String>,
    #[arg(long)]
    favicon_url: Option<String>,
    #[arg(long)]
    primary_color: Option<String>,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("petcare_admin", LevelFilter::Debug)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        init_logger();
    }

    let cli = Cli::parse();
    let init = matches!(cli.command, Command::InitConfig);
    let config = match &cli.config {
        Some(path) if path.exists() => {
            let mut config = AdminConfig::load_from(path)?;
            config.apply_env(|name| std::env::var(name).ok())?;
            config
        }
        Some(path) if !init => {
            anyhow::bail!("config file {} does not exist", path.display())
        }
        _ => AdminConfig::load()?,
    };

    if init {
        let path = match &cli.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("Wrote {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let access_token = cli
        .access_token
        .context("an access token is required (--access-token or PETCARE_ACCESS_TOKEN)")?;
    let org_id = cli
        .org_id
        .context("an organization is required (--org-id or PETCARE_ORG_ID)")?;

    let theme = ThemeStore::new();
    let session = Session::new(access_token, org_id);
    let mut settings = app::settings_domain(&config, session, theme.clone())?;

    settings.run_to_idle(PersonalizationMessage::Load).await;
    if settings.personalization.phase != FormPhase::Loaded {
        print_toasts(&settings);
        return Ok(ExitCode::FAILURE);
    }

    match cli.command {
        Command::InitConfig => {}
        Command::Show => print_branding(&settings),
        Command::Update(args) => {
            let edits = [
                args.logo_url.map(PersonalizationMessage::LogoUrlChanged),
                args.logo_alt_text
                    .map(PersonalizationMessage::LogoAltTextChanged),
                args.favicon_url.map(PersonalizationMessage::FaviconUrlChanged),
                args.primary_color
                    .map(PersonalizationMessage::PrimaryColorChanged),
            ];
            for edit in edits.into_iter().flatten() {
                settings.run_to_idle(edit).await;
            }

            let state = &settings.personalization;
            if state.is_pristine() {
                println!("Nothing to update.");
                return Ok(ExitCode::SUCCESS);
            }
            if !state.errors.is_empty() {
                for error in &state.errors {
                    eprintln!("{}: {}", error.field.form_name(), error.message);
                }
                return Ok(ExitCode::FAILURE);
            }

            settings.run_to_idle(PersonalizationMessage::Submit).await;
            print_branding(&settings);
            print!("{}", theme.css_variables());
        }
    }

    print_toasts(&settings);
    Ok(if settings.personalization.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_branding(settings: &SettingsDomain) {
    let state = &settings.personalization;
    if let Some(theme) = &state.active_theme {
        println!("Active theme: {theme}");
    }
    for field in &FIELDS {
        println!("{:<16} {}", field.label, state.values.get(field.field));
    }
}

fn print_toasts(settings: &SettingsDomain) {
    for toast in &settings.personalization.toasts {
        match toast.level {
            ToastLevel::Success => println!("{}: {}", toast.title, toast.body),
            ToastLevel::Error => eprintln!("{}: {}", toast.title, toast.body),
        }
    }
}
