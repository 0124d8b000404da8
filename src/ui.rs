//! Console reporting - status lines and debug dumps for the build log

use console::style;

use crate::context::BuildContext;
use crate::inputs::ActionInputs;
use crate::output::ActionOutputs;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", style("WARNING:").yellow().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Dump of the raw inputs, shown in debug mode
pub fn display_inputs(inputs: &ActionInputs) {
    println!("\n{}", style("INPUT VALUES:").bold());
    println!("  Version:          {}", inputs.version);
    println!("  Branch Overrides: {:?}", inputs.branch_overrides);
    println!();
}

/// Dump of the build context, shown in debug mode
pub fn display_context(context: &BuildContext) {
    println!("\n{}", style("BUILD CONTEXT:").bold());
    println!("  Ref:        {}", context.ref_full);
    println!("  Branch:     {}", context.branch_name);
    println!(
        "  Commit:     {} ({})",
        context.commit_sha, context.commit_sha_short
    );
    println!("  Run number: {}", context.run_number);
    println!();
}

/// Results block printed before the outputs are set
pub fn display_outputs(outputs: &ActionOutputs) {
    println!("\n{}", style("Results").bold());
    for (key, value) in outputs.entries() {
        println!("{}: {}", key, value);
    }
    println!("----------");
}
