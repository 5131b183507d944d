mod commands;
mod config;
mod context;
mod decode;
mod extract;
mod fetch;
mod output;
mod render;
mod traits;

use clap::Parser;
use commands::ExportCommand;
use config::SecretRef;
use context::Context;

#[derive(Parser)]
#[command(name = "ksr")]
#[command(about = "Export a Kubernetes Secret as a plaintext stringData manifest", long_about = None)]
#[command(version)]
struct Cli {
    /// Kubernetes context to use
    #[arg(long, default_value = "")]
    context: String,

    /// Namespace of the secret
    #[arg(long, default_value = "")]
    namespace: String,

    /// Name of the secret
    #[arg(long, default_value = "")]
    secret: String,
}

fn main() {
    let cli = Cli::parse();

    let ctx = Context::new();
    let reference = SecretRef::new(cli.context, cli.namespace, cli.secret);

    if let Err(err) = ExportCommand::execute(&ctx, &reference) {
        // All diagnostics go to stdout, one line, then exit 1
        ctx.output.error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
