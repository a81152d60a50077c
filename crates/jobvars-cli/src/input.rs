use std::{fs, path::Path};

use anyhow::Context;
use tracing::debug;

use jobvars_model::{Variable, Variables};
use jobvars_observe::Masked;

/// Collect variables from the request file (untrusted) followed by `extra`.
pub fn load_variables(file: Option<&Path>, extra: &[Variable]) -> anyhow::Result<Variables> {
    let mut vars = match file {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read variables {}", path.display()))?;
            serde_json::from_str::<Variables>(&raw)
                .with_context(|| format!("failed to parse variables {}", path.display()))?
        }
        None => Variables::new(),
    };
    vars.extend(extra.iter().cloned());

    for v in &vars {
        debug!(variable = %Masked(v), file = v.is_file(), "variable loaded");
    }
    Ok(vars)
}
