use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};

use kmpull::cli::{Args, Command};
use kmpull::config;
use kmpull::configmap;
use kmpull::display;
use kmpull::k8s::accessor::KubeAccessor;
use kmpull::k8s::client::{build_client, cluster_info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // --completions and --mangen print to stdout and exit before any cluster work
    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "kmpull", &mut io::stdout());
        return Ok(());
    }
    if args.mangen {
        clap_mangen::Man::new(Args::command()).render(&mut io::stdout())?;
        return Ok(());
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    // Argument errors must surface without a cluster connection
    if let Command::Pull {
        name: None,
        all_namespaces: false,
        ..
    } = &command
    {
        bail!("ConfigMap name is required when not using --all-namespaces");
    }

    // Resolution order: flag, then config file, then built-in default
    let file_config = config::load();
    let namespace = args
        .namespace
        .or(file_config.namespace)
        .unwrap_or_else(|| "default".to_string());
    let kubeconfig = args.kubeconfig.or(file_config.kubeconfig);
    let context = args.context.or(file_config.context);

    let client = build_client(kubeconfig.as_deref(), context.as_deref()).await?;
    let accessor = KubeAccessor::new(client.clone());

    match command {
        Command::List { all_namespaces } => {
            if all_namespaces {
                let all = configmap::list_all_config_maps(&accessor).await?;
                display::print_all_config_maps(&all);
            } else {
                let config_maps = configmap::list_config_maps(&accessor, &namespace).await?;
                display::print_config_maps(&namespace, &config_maps);
            }
        }

        Command::Pull {
            name,
            output,
            all_namespaces,
        } => {
            let output = output
                .or(file_config.output)
                .unwrap_or_else(|| PathBuf::from("."));
            if all_namespaces {
                let results = configmap::pull_all_config_maps(&accessor, &output).await?;
                display::print_pull_all_results(&results);
            } else if let Some(name) = name {
                let result =
                    configmap::pull_config_map(&accessor, &namespace, &name, &output).await?;
                display::print_pull_result(&result);
            }
        }

        Command::Info => {
            let info = cluster_info(&client, kubeconfig.as_deref()).await?;
            display::print_cluster_info(&info);
        }
    }

    Ok(())
}
