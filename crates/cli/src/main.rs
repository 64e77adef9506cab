use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli_ops;
mod load;

use cli_ops::CliError;

#[derive(Parser)]
#[command(version, about = "Resolve source map and original source locations for generated scripts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the directory a map's relative sources resolve against
    SourceRoot {
        /// The map's `sourceRoot` (omit for none)
        #[arg(long, default_value = "")]
        source_root: String,
        /// Path or URL of the generated script
        #[arg(long)]
        generated: String,
        #[arg(long)]
        web_root: Option<String>,
        /// JSON file with `webRoot` / `sourceMapPathOverrides`
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Resolve where a script's source map lives
    MapPath {
        #[arg(long)]
        generated: String,
        /// The script's `sourceMappingURL` value
        #[arg(long)]
        map_field: String,
    },
    /// Apply configured sourceMapPathOverrides to a source path
    Override {
        #[arg(long)]
        path: String,
        #[arg(long)]
        web_root: Option<String>,
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Read a script, load its source map and print where each original source lives
    Resolve {
        #[arg(long)]
        generated: String,
        #[arg(long)]
        web_root: Option<String>,
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Print output as JSON
        #[arg(long)]
        json: bool,
    },
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::SourceRoot {
            source_root,
            generated,
            web_root,
            config,
        } => {
            let config = cli_ops::load_config(config.as_deref(), web_root).await?;
            cli_ops::handle_source_root(&source_root, &generated, &config);
        }
        Command::MapPath {
            generated,
            map_field,
        } => cli_ops::handle_map_path(&generated, &map_field),
        Command::Override {
            path,
            web_root,
            config,
        } => {
            let config = cli_ops::load_config(config.as_deref(), web_root).await?;
            cli_ops::handle_override(&path, &config);
        }
        Command::Resolve {
            generated,
            web_root,
            config,
            json,
        } => {
            let config = cli_ops::load_config(config.as_deref(), web_root).await?;
            cli_ops::handle_resolve(&generated, &config, json).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
