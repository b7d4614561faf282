//! Terminal output — all user-facing printing lives here. Results go to
//! stdout; the engine itself never writes to the terminal.

use std::collections::BTreeMap;

use crate::configmap::{ConfigMapSummary, PullResult};
use crate::k8s::client::ClusterInfo;

pub fn print_cluster_info(info: &ClusterInfo) {
    println!("═══════════════════════════════════════════════════════════");
    println!("Connected to Kubernetes Cluster");
    println!("═══════════════════════════════════════════════════════════");
    println!("  Context:    {}", info.context);
    println!("  Cluster:    {}", info.cluster);
    println!("  Endpoint:   {}", info.endpoint);
    println!("  Namespace:  {}", info.namespace);
    println!("  Version:    {}", info.version);
    println!("  Kubeconfig: {}", info.kubeconfig_path);
    println!("═══════════════════════════════════════════════════════════");
    println!();
}

pub fn print_config_maps(namespace: &str, config_maps: &[ConfigMapSummary]) {
    println!("ConfigMaps in namespace '{namespace}':");
    for cm in config_maps {
        print_summary(cm);
    }
}

pub fn print_all_config_maps(all: &BTreeMap<String, Vec<ConfigMapSummary>>) {
    println!("ConfigMaps across all namespaces:");
    for (namespace, config_maps) in all {
        println!();
        println!("Namespace: {namespace}");
        for cm in config_maps {
            print_summary(cm);
        }
    }
}

fn print_summary(cm: &ConfigMapSummary) {
    println!(
        "  - {} (data: {}, binary: {})",
        cm.name,
        cm.text_count(),
        cm.binary_count()
    );
    for key in &cm.text_keys {
        println!("    * {key} (text)");
    }
    for key in &cm.binary_keys {
        println!("    * {key} (binary)");
    }
}

pub fn print_pull_result(result: &PullResult) {
    println!(
        "Pulling ConfigMap '{}' from namespace '{}':",
        result.name, result.namespace
    );
    print_saved_files(result);
    println!();
    println!(
        "Successfully pulled {}/{} configuration file(s)",
        result.success_count(),
        result.total_files
    );
}

pub fn print_pull_all_results(results: &[PullResult]) {
    let total_files: usize = results.iter().map(|r| r.total_files).sum();
    let successful: usize = results.iter().map(PullResult::success_count).sum();

    println!("Found {} ConfigMap(s) to process", results.len());
    println!("Pulling ConfigMaps from all namespaces:");
    for result in results {
        println!();
        println!(
            "[Namespace: {}] ConfigMap: {} ({} files)",
            result.namespace, result.name, result.total_files
        );
        print_saved_files(result);
    }
    println!();
    println!("Summary:");
    println!("  - Processed {} ConfigMap(s)", results.len());
    println!("  - Successfully saved {successful}/{total_files} configuration file(s)");
}

fn print_saved_files(result: &PullResult) {
    for file in &result.saved_files {
        match &file.error {
            None if file.binary => println!("  ✓ Saved (binary): {}", file.path.display()),
            None => println!("  ✓ Saved: {}", file.path.display()),
            Some(err) => println!("  ✗ Failed to save: {} (error: {err})", file.path.display()),
        }
    }
}
