use crate::reports;
use clap::Args;
use drillforge::error::DfResult;
use drillforge::loader;
use drillforge::router::ExerciseKind;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Only audit exercises of this kind (snake_case tag).
    #[arg(short, long)]
    pub kind: Option<ExerciseKind>,
}

pub fn run(args: ValidateArgs, file: &str) -> DfResult<()> {
    let specs = loader::load_definitions(file)?;

    println!("\n🔎 === DEFINITION AUDIT: {} === 🔎", file);

    let mut rows = Vec::new();
    for (i, spec) in specs.iter().enumerate() {
        if let Some(filter) = args.kind {
            if spec.kind() != filter {
                continue;
            }
        }
        let status = match loader::audit(spec) {
            Ok(()) => Ok(()),
            Err(e) => Err(e.to_string()),
        };
        rows.push((i, spec.kind(), spec.item_count(), status));
    }

    reports::print_audit_report(&rows);
    reports::print_kind_summary(&specs);

    let failures = rows.iter().filter(|(_, _, _, s)| s.is_err()).count();
    if failures > 0 {
        return Err(drillforge::error::DrillForgeError::Validation(format!(
            "{} of {} definitions failed the audit",
            failures,
            rows.len()
        )));
    }
    Ok(())
}
