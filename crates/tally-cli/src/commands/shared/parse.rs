use serde::de::DeserializeOwned;
use tally_core::enums::Branch;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Branch from `--branch`, else the configured default.
pub fn resolve_branch(raw: Option<&str>, default_branch: &str) -> anyhow::Result<Branch> {
    let raw = raw
        .filter(|value| !value.trim().is_empty())
        .or_else(|| Some(default_branch).filter(|value| !value.trim().is_empty()))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no branch given: pass --branch ({}) or set general.default_branch",
                Branch::ALL.map(Branch::as_str).join(", ")
            )
        })?;
    parse_enum(raw, "branch")
}
