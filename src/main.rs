use anyhow::Result;
use clap::Parser;

use version_suffix::context::BuildContext;
use version_suffix::inputs::ActionInputs;
use version_suffix::output::ActionOutputs;
use version_suffix::overrides::OverrideTable;
use version_suffix::{resolver, ui};

#[derive(clap::Parser)]
#[command(
    name = "version-suffix",
    about = "Derive a semantic version suffix from the branch that triggered the build"
)]
struct Args {
    #[arg(long, help = "Print inputs and build context before resolving")]
    debug: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-suffix {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    ui::display_status("Deriving version suffix ...");

    // Phase 1: gather inputs and build context. Resolution never runs
    // against partial state from a failed gather.
    let (inputs, table, context) = match gather(args.debug) {
        Ok(state) => state,
        Err(e) => {
            ui::display_error("Failed reading build inputs");
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Phase 2: resolve and publish the outputs.
    if let Err(e) = resolve_and_emit(&inputs, &table, &context) {
        ui::display_error("Failed to derive the version suffix");
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn gather(force_debug: bool) -> Result<(ActionInputs, OverrideTable, BuildContext)> {
    ui::display_status("Reading action inputs ...");
    let mut inputs = ActionInputs::from_env()?;
    inputs.debug = inputs.debug || force_debug;

    if inputs.debug {
        ui::display_inputs(&inputs);
    }

    let table = OverrideTable::from_lines(&inputs.branch_overrides)?;

    ui::display_status("Reading build context ...");
    let context = BuildContext::from_env()?;
    if context.run_number_defaulted {
        ui::display_warning("Run number missing or not a number, using 0");
    }
    if inputs.debug {
        ui::display_context(&context);
    }

    Ok((inputs, table, context))
}

fn resolve_and_emit(
    inputs: &ActionInputs,
    table: &OverrideTable,
    context: &BuildContext,
) -> Result<()> {
    let resolution = resolver::resolve(
        &context.branch_name,
        &context.commit_sha_short,
        context.run_number,
        table,
    );
    let outputs = ActionOutputs::new(&inputs.version, &resolution);

    ui::display_outputs(&outputs);

    ui::display_status("Setting outputs ...");
    outputs.emit()?;

    ui::display_success("Version suffix generated");
    Ok(())
}
