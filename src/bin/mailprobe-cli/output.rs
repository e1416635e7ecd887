use anyhow::{Result, bail};
use mailprobe_lib::{MxCandidate, ProbeResult};

#[cfg(feature = "with-serde")]
use serde::Serialize;

pub fn print_check(email: &str, result: &ProbeResult, format: &str) -> Result<()> {
    match format {
        "human" => {
            if result.exists {
                println!("[EXISTS]    {email}");
            } else {
                println!("[NOT FOUND] {email}");
            }
            for line in &result.transcript {
                println!("  {line}");
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                let payload = CheckPayload {
                    email,
                    exists: result.exists,
                    transcript: &result.transcript,
                };
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            #[cfg(not(feature = "with-serde"))]
            {
                bail!("format=json nécessite la feature 'with-serde'");
            }
        }
        other => bail!("format inconnu '{other}', utilisez human|json"),
    }
    Ok(())
}

pub fn print_candidates(domain: &str, candidates: &[MxCandidate], format: &str) -> Result<()> {
    match format {
        "human" => {
            println!("{domain}:");
            for candidate in candidates {
                println!("  {:>5} {}", candidate.weight, candidate.host);
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                println!("{}", serde_json::to_string_pretty(candidates)?);
            }
            #[cfg(not(feature = "with-serde"))]
            {
                bail!("format=json nécessite la feature 'with-serde'");
            }
        }
        other => bail!("format inconnu '{other}', utilisez human|json"),
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
#[derive(Serialize)]
struct CheckPayload<'a> {
    email: &'a str,
    exists: bool,
    transcript: &'a [String],
}
