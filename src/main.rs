use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fhir_hapiproto::{
    CHOICE_POLICY_ENV, ChoicePolicy, Converter, ConverterConfig, choice_policy_from_value,
    decode_resource, encode_resource, resource_from_yaml, resource_to_yaml,
};

#[derive(Parser)]
#[command(name = "fhir-hapiproto")]
#[command(about = "Convert FHIR R4 resources between YAML business objects and protobuf")]
struct Cli {
    /// Policy for choice values of a type the field does not declare
    /// (`fail` or `empty-message`). Overrides FHIR_CHOICE_POLICY.
    #[arg(long, global = true)]
    choice_policy: Option<ChoicePolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a YAML resource as a binary ContainedResource
    Encode {
        /// YAML file tagged with resourceType
        input: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Decode a binary ContainedResource and print it as YAML
    Decode {
        /// Binary protobuf file
        input: PathBuf,
    },
    /// Convert a YAML resource to protobuf and back, failing if anything changed
    RoundTrip {
        /// YAML file tagged with resourceType
        input: PathBuf,
    },
}

/// Entry point for the `fhir-hapiproto` CLI.
///
/// # Environment Variables
/// - `FHIR_CHOICE_POLICY`: default choice policy (`fail` when unset or empty)
/// - `RUST_LOG`: log filter; logs go to stderr so binary output stays clean
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fhir_hapiproto=info".parse()?)
                .add_directive("hapi_proto_converter=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let policy = match cli.choice_policy {
        Some(policy) => policy,
        None => choice_policy_from_value(std::env::var(CHOICE_POLICY_ENV).ok())
            .with_context(|| format!("reading {CHOICE_POLICY_ENV}"))?,
    };
    let converter = Converter::new(ConverterConfig::new(policy));
    tracing::debug!(%policy, "converter configured");

    match cli.command {
        Commands::Encode { input, out } => {
            let resource = read_resource(&input)?;
            let bytes = encode_resource(&converter, &resource)?;
            tracing::info!(
                resource_type = resource.resource_type(),
                bytes = bytes.len(),
                "encoded"
            );

            match out {
                Some(path) => std::fs::write(&path, &bytes)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => std::io::stdout().write_all(&bytes)?,
            }
        }
        Commands::Decode { input } => {
            let bytes =
                std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let resource = decode_resource(&converter, &bytes)?;
            tracing::info!(resource_type = resource.resource_type(), "decoded");
            print!("{}", resource_to_yaml(&resource)?);
        }
        Commands::RoundTrip { input } => {
            let resource = read_resource(&input)?;
            let bytes = encode_resource(&converter, &resource)?;
            let back = decode_resource(&converter, &bytes)?;
            print!("{}", resource_to_yaml(&back)?);

            if back != resource {
                anyhow::bail!(
                    "round trip changed the {} resource in {}",
                    resource.resource_type(),
                    input.display()
                );
            }
            tracing::info!(
                resource_type = resource.resource_type(),
                bytes = bytes.len(),
                "round trip preserved the resource"
            );
        }
    }

    Ok(())
}

fn read_resource(path: &Path) -> anyhow::Result<fhir_hapiproto::hapi::Resource> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    resource_from_yaml(&text).with_context(|| format!("parsing {}", path.display()))
}
