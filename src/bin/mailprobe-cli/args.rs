use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use mailprobe_lib::{ProbeOptions, probe::SMTP_PORT};

#[derive(Parser)]
#[command(name = "mailprobe-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// sonde SMTP: l'adresse est-elle acceptée par un MX du domaine ?
    Check(CheckArgs),
    /// vérifie uniquement la syntaxe (pas de réseau)
    Validate { email: String },
    /// affiche les MX candidats, dans l'ordre d'essai
    Mx {
        domain: String,
        /// format: human|json
        #[arg(long, default_value = "human")]
        format: String,
    },
}

#[derive(Args)]
pub struct CheckArgs {
    /// adresse e-mail à tester
    pub email: String,

    /// nom annoncé dans HELO
    #[arg(long = "local-host")]
    pub local_host: Option<String>,

    /// enveloppe MAIL FROM (par défaut robot@<local-host>)
    #[arg(long = "from")]
    pub sender: Option<String>,

    /// timeout de connexion (s)
    #[arg(long = "connect-timeout", default_value_t = 15)]
    pub connect_timeout: u64,

    /// timeout de lecture par réponse (s)
    #[arg(long = "read-timeout", default_value_t = 15)]
    pub read_timeout: u64,

    #[arg(long, default_value_t = SMTP_PORT)]
    pub port: u16,

    /// domaine exclu (répétable)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// fichier de domaines exclus (un par ligne)
    #[arg(long = "exclude-file")]
    pub exclude_file: Option<PathBuf>,

    /// suffixe MX temporaire/jetable (répétable)
    #[arg(long = "temporary")]
    pub temporary: Vec<String>,

    /// fichier de suffixes temporaires (un par ligne)
    #[arg(long = "temporary-file")]
    pub temporary_file: Option<PathBuf>,

    /// affiche la transcription SMTP
    #[arg(long)]
    pub debug: bool,

    /// format: human|json
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl CheckArgs {
    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            sender: self.sender.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout),
            read_timeout: Duration::from_secs(self.read_timeout),
            port: self.port,
            capture_transcript: self.debug,
            ..ProbeOptions::with_local_host(ProbeOptions::resolve_local_host(
                self.local_host.as_deref(),
                None,
            ))
        }
    }
}
