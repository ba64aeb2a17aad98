use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

/// Parse key/value pairs from a `.env` file in the current working
/// directory, if present. Does not modify the process environment.
pub fn parse_env_file() -> Result<HashMap<String, String>> {
    let path = Path::new(".env");
    let mut map = HashMap::new();
    if !path.exists() {
        return Ok(map);
    }
    let content = fs::read_to_string(path)?;
    for (idx, line) in content.lines().enumerate() {
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }
        if let Some(eq) = s.find('=') {
            let key = s[..eq].trim();
            let mut val = s[eq + 1..].trim().to_string();
            // drop surrounding quotes if present
            if (val.starts_with('"') && val.ends_with('"') && val.len() >= 2)
                || (val.starts_with('\'') && val.ends_with('\'') && val.len() >= 2)
            {
                val = val[1..val.len() - 1].to_string();
            }
            map.insert(key.to_string(), val);
        } else {
            log::warn!("ignoring .env line {} without '=': {}", idx + 1, line);
        }
    }
    Ok(map)
}

/// Load `.env` into the process environment. Non-destructive: existing
/// variables are not overridden, so CLI/env precedence is preserved.
pub fn load_dotenv_if_present() -> Result<()> {
    for (k, v) in parse_env_file()? {
        if std::env::var_os(&k).is_none() {
            std::env::set_var(&k, &v);
        }
    }
    Ok(())
}

/// Generate a commented .env template with placeholder values.
pub fn write_env_template(path: &str) -> Result<()> {
    let mut f = fs::File::create(path)?;
    let template = r#"# company_matcher environment configuration template
# Copy this file to .env and point it at your input lists.
# Any of these variables can also be provided via the system environment
# or as CLI arguments (CLI wins).

COMPANY_LIST=company_list.csv
CUSTOMER_LIST=customer_list.csv
OUT_PATH=combined_data.csv

# Optional: pin the output shuffle for reproducible runs
#MATCHER_SEED=42

# Optional: log verbosity (error|warn|info|debug|trace)
#RUST_LOG=info
"#;
    f.write_all(template.as_bytes())?;
    Ok(())
}
