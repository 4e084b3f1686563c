//! Terrawrap CLI
//!
//! Command-line interface for generating Terraform modules from the
//! documentation of Terraform provider resources.

mod config;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use colored::*;
use config::{load_config, LoadedConfig};
use std::path::{Path, PathBuf};
use terrawrap_common::{ProviderInfo, ProviderSchema, ResourceModel, ResourceParams};
use terrawrap_generator::{License, ModuleGenerator, ModuleHeader, WriteOutcome};
use terrawrap_parser::{load_provider_schema, ResourceDocParser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT: &str = "output/terraform_modules";
const DEFAULT_AUTHOR: &str = "YOUR NAME <email@example.com>";

#[derive(Parser)]
#[command(name = "terrawrap")]
#[command(
    version,
    about = "Generate Terraform modules from Terraform provider resources",
    long_about = "Terrawrap extracts the arguments and attributes of a Terraform resource from \
its provider's standardized documentation, types them with the provider schema, and writes \
a module (main.tf, variables.tf, outputs.tf) wrapping the resource."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default is $HOME/.terrawrap/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a resource from its documentation and display the result
    #[command(after_help = "EXAMPLES:\n  \
        # Show what would be generated for a secret\n  \
        terrawrap parse aws_secretsmanager_secret\n\n  \
        # Use explicit documentation and schema files\n  \
        terrawrap parse aws_s3_bucket --doc s3_bucket.html.markdown --schema aws.json")]
    Parse {
        /// Terraform resource type (e.g. aws_secretsmanager_secret)
        resource_type: String,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Generate a Terraform module from the target resource
    #[command(after_help = "EXAMPLES:\n  \
        # Generate a module for a secret\n  \
        terrawrap generate aws_secretsmanager_secret\n\n  \
        # Add a second bucket to an existing module\n  \
        terrawrap generate aws_s3_bucket \\\n    \
        --resource-name logs \\\n    \
        --output ./modules/storage\n\n  \
        # One directory per resource type, without output prefixes\n  \
        terrawrap generate aws_sqs_queue --stand-alone --no-out-prefix")]
    Generate {
        /// Terraform resource type (e.g. aws_secretsmanager_secret)
        resource_type: String,

        #[command(flatten)]
        input: InputArgs,

        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Author name for copyright attribution
        #[arg(short, long)]
        author: Option<String>,

        /// License to set for the generated code (apache, mit, mpl, none)
        #[arg(short, long)]
        license: Option<String>,

        /// Write the module into its own directory named for the resource type
        #[arg(short, long)]
        stand_alone: bool,
    },
}

/// Inputs shared by parse and generate
#[derive(Args)]
struct InputArgs {
    /// Local name of the resource (e.g. "default" in `resource "aws_secretsmanager_secret" "default"`)
    #[arg(short = 'n', long, default_value = "default")]
    resource_name: String,

    /// Variable prefix (default: <resource_type>_<resource_name>)
    #[arg(short = 'V', long, conflicts_with = "no_var_prefix")]
    variable_prefix: Option<String>,

    /// Output prefix (default: <resource_type>_<resource_name>)
    #[arg(short = 'p', long, conflicts_with = "no_out_prefix")]
    output_prefix: Option<String>,

    /// Disable naming prefix for variables
    #[arg(long)]
    no_var_prefix: bool,

    /// Disable naming prefix for outputs
    #[arg(long)]
    no_out_prefix: bool,

    /// Resource documentation file (default: looked up in the provider docs directory)
    #[arg(long)]
    doc: Option<PathBuf>,

    /// Provider schema JSON file (default: looked up in the provider schemas directory)
    #[arg(long)]
    schema: Option<PathBuf>,
}

impl InputArgs {
    fn resource_params(&self, resource_type: &str) -> ResourceParams {
        let mut params = ResourceParams::new(resource_type, &self.resource_name);
        if self.no_var_prefix {
            params = params.with_variable_prefix("");
        } else if let Some(prefix) = &self.variable_prefix {
            params = params.with_variable_prefix(prefix.as_str());
        }
        if self.no_out_prefix {
            params = params.with_attribute_prefix("");
        } else if let Some(prefix) = &self.output_prefix {
            params = params.with_attribute_prefix(prefix.as_str());
        }
        params
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loaded = load_config(cli.config.as_deref())?;
    if let Some(source) = &loaded.source {
        debug!(path = %source.display(), "using config file");
    }

    match cli.command {
        Commands::Parse {
            resource_type,
            input,
        } => {
            parse_command(&resource_type, &input, &loaded, cli.verbose)?;
        }
        Commands::Generate {
            resource_type,
            input,
            output,
            author,
            license,
            stand_alone,
        } => {
            generate_command(GenerateConfig {
                resource_type: &resource_type,
                input: &input,
                output,
                author,
                license,
                stand_alone,
                loaded: &loaded,
            })?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Locate inputs, then extract the resource model
fn extract_model(
    resource_type: &str,
    input: &InputArgs,
    loaded: &LoadedConfig,
) -> Result<ResourceModel> {
    let doc_path = match &input.doc {
        Some(path) => path.clone(),
        None => default_doc_path(resource_type, loaded)?,
    };
    let schema_path = match &input.schema {
        Some(path) => path.clone(),
        None => default_schema_path(resource_type, loaded)?,
    };

    debug!(
        resource_type,
        doc = %doc_path.display(),
        schema = %schema_path.display(),
        "resolved inputs"
    );

    println!("{} Loading provider schema...", "→".cyan());
    let schema: ProviderSchema = load_provider_schema(&schema_path).with_context(|| {
        format!("Failed to load provider schema {}", schema_path.display())
    })?;

    println!(
        "{} Parsing documentation: {}",
        "→".cyan(),
        doc_path.display()
    );
    let parser = ResourceDocParser::from_file(&doc_path, input.resource_params(resource_type))
        .context("Failed to load resource documentation")?;
    let model = parser
        .parse(&schema)
        .with_context(|| format!("Failed to parse resource {}", resource_type))?;

    println!(
        "{} Found {} arguments and {} attributes",
        "✓".green(),
        model.arguments.len(),
        model.attributes.len()
    );

    Ok(model)
}

fn default_doc_path(resource_type: &str, loaded: &LoadedConfig) -> Result<PathBuf> {
    let provider = ProviderInfo::for_resource_type(resource_type)?;
    let docs_root = loaded.docs_root(provider.name, provider.version);
    let path = provider.resource_doc_path(&docs_root, resource_type);

    if !path.exists() {
        anyhow::bail!(
            "Documentation not found at {}\n  Download {} and extract it into {}, or pass --doc",
            path.display(),
            provider.archive_url(),
            docs_root.display()
        );
    }

    Ok(path)
}

fn default_schema_path(resource_type: &str, loaded: &LoadedConfig) -> Result<PathBuf> {
    let provider = ProviderInfo::for_resource_type(resource_type)?;
    Ok(loaded.schema_path(provider.name, provider.version))
}

fn parse_command(
    resource_type: &str,
    input: &InputArgs,
    loaded: &LoadedConfig,
    verbose: bool,
) -> Result<()> {
    let model = extract_model(resource_type, input, loaded)?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Resource:".bold());
    println!("  Type: {}", model.resource_type.yellow());
    println!("  Name: {}", model.resource_name.yellow());

    println!("\n{}", "Arguments:".bold());
    for arg in &model.arguments {
        let mut flags = Vec::new();
        flags.push(if arg.optional { "optional" } else { "required" });
        if arg.deprecated {
            flags.push("deprecated");
        }
        println!(
            "  • {} ({}) {}",
            arg.name.cyan(),
            arg.value_type(),
            flags.join(", ").dimmed()
        );
        if verbose {
            println!("    var.{}", arg.prefixed_name());
            if let Some(default) = &arg.default_value {
                println!("    default = {}", default);
            }
        }
    }

    println!("\n{}", "Attributes:".bold());
    for attr in &model.attributes {
        println!("  • {} ({})", attr.name.cyan(), attr.value_type());
        if verbose {
            println!("    output.{}", attr.prefixed_name());
        }
    }

    Ok(())
}

/// Configuration for module generation
struct GenerateConfig<'a> {
    resource_type: &'a str,
    input: &'a InputArgs,
    output: Option<PathBuf>,
    author: Option<String>,
    license: Option<String>,
    stand_alone: bool,
    loaded: &'a LoadedConfig,
}

fn generate_command(config: GenerateConfig) -> Result<()> {
    let settings = &config.loaded.config;

    let author = config
        .author
        .or_else(|| settings.author.clone())
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
    let license: License = config
        .license
        .or_else(|| settings.license.clone())
        .map(|l| l.parse::<License>())
        .transpose()?
        .unwrap_or_default();
    let stand_alone = config.stand_alone || settings.stand_alone.unwrap_or(false);

    let mut output = config
        .output
        .or_else(|| settings.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    if stand_alone {
        output = output.join(config.resource_type);
    }

    println!(
        "{} Generating module for: {}",
        "→".cyan(),
        config.resource_type.yellow()
    );
    debug!(%author, %license, output = %output.display(), "generation settings");

    let model = extract_model(config.resource_type, config.input, config.loaded)?;

    let header = ModuleHeader::new(
        &model.resource_type,
        &model.resource_name,
        &author,
        chrono::Local::now().year(),
        license,
    );

    println!("{} Generating module files...", "→".cyan());
    let generator = ModuleGenerator::new(header).context("Failed to create generator")?;
    let written = generator
        .generate_to_directory(&model, &output)
        .context("Failed to generate module")?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Generated files:".bold());
    for (path, outcome) in &written {
        let action = match outcome {
            WriteOutcome::Created => "created",
            WriteOutcome::Appended => "appended",
        };
        println!("  📄 {} ({})", path.display(), action.dimmed());
    }
    println!("\nYour new module is ready at\n{}", absolute(&output).display());

    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
