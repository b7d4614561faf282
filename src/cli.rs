use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "kmpull",
    about = "Pull configuration files from Kubernetes ConfigMaps",
    version
)]
pub struct Args {
    /// Path to kubeconfig file. Defaults to $KUBECONFIG or ~/.kube/config.
    #[arg(long, value_name = "PATH", global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Use a specific kubeconfig context instead of the current one.
    #[arg(long, value_name = "CONTEXT", global = true)]
    pub context: Option<String>,

    /// Kubernetes namespace to operate in. Defaults to the config-file value,
    /// then "default".
    #[arg(short = 'n', long, value_name = "NAMESPACE", global = true)]
    pub namespace: Option<String>,

    /// Print shell completions for SHELL to stdout and exit.
    /// Example: `kmpull --completions bash >> ~/.bash_completion`
    #[arg(long, value_name = "SHELL", hide = true)]
    pub completions: Option<Shell>,

    /// Print the man page to stdout and exit.
    /// Example: `kmpull --mangen | gzip > /usr/share/man/man1/kmpull.1.gz`
    #[arg(long, hide = true)]
    pub mangen: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List ConfigMaps and their keys
    List {
        /// List across all namespaces instead of a single one.
        #[arg(long)]
        all_namespaces: bool,
    },

    /// Pull ConfigMap entries to local files
    Pull {
        /// Name of the ConfigMap to pull. Required unless --all-namespaces is set.
        name: Option<String>,

        /// Output directory for the saved files. Defaults to the config-file
        /// value, then the current directory.
        #[arg(short = 'o', long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Pull every non-empty ConfigMap from every namespace into DIR/<namespace>/.
        #[arg(long)]
        all_namespaces: bool,
    },

    /// Show information about the connected cluster
    Info,
}
