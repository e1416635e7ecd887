mod args;
mod lists;
mod output;

use anyhow::Result;
use mailprobe_lib::{
    DomainPolicy, ProbeRequest, Prober, Transcript, is_valid_email, mx, resolve_candidates,
};

use args::{CheckArgs, Cli, Commands};

// codes de sortie : 0 existe/valide, 2 inexistant/invalide, 1 fatal
const EXIT_NEGATIVE: i32 = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "with-tracing")]
    init_tracing();

    let positive = match cli.cmd {
        Commands::Check(args) => run_check(&args)?,
        Commands::Validate { email } => {
            let valid = is_valid_email(&email);
            if valid {
                println!("[OK]      {email}");
            } else {
                println!("[INVALID] {email}");
            }
            valid
        }
        Commands::Mx { domain, format } => {
            let resolver = mx::system_resolver()?;
            let mut transcript = Transcript::default();
            let candidates = resolve_candidates(&resolver, &domain, &mut transcript);
            output::print_candidates(&domain, &candidates, &format)?;
            true
        }
    };

    if !positive {
        std::process::exit(EXIT_NEGATIVE);
    }
    Ok(())
}

fn run_check(args: &CheckArgs) -> Result<bool> {
    let request = check_request(args)?;
    let result = Prober::system()?.probe(&request);
    output::print_check(&request.email, &result, &args.format)?;
    Ok(result.exists)
}

// options invalides = erreur fatale (code 1), pas un verdict négatif
fn check_request(args: &CheckArgs) -> Result<ProbeRequest> {
    let options = args.probe_options();
    options.validate()?;

    let mut policy = DomainPolicy::new();
    policy
        .add_excluded_domains(args.exclude.iter().cloned())
        .add_temporary_domains(args.temporary.iter().cloned());
    if let Some(path) = &args.exclude_file {
        policy.add_excluded_domains(lists::read_domain_list(path)?);
    }
    if let Some(path) = &args.temporary_file {
        policy.add_temporary_domains(lists::read_domain_list(path)?);
    }

    Ok(ProbeRequest::new(args.email.as_str())
        .with_options(options)
        .with_policy(policy))
}

#[cfg(feature = "with-tracing")]
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
