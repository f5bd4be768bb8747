use crate::cli::SchemaArgs;
use crate::config::Config;
use crate::output::write_report;
use schemars::schema_for;

pub fn execute(args: SchemaArgs) -> anyhow::Result<()> {
    let schema = schema_for!(Config);
    let mut json = serde_json::to_string_pretty(&schema)?;
    json.push('\n');
    write_report(args.output.as_deref(), &json)?;
    Ok(())
}
