use std::path::Path;

use anyhow::{Context, Result};

use crate::probe::PathTemplateSet;

/// Trimmed, non-empty lines of a wordlist. Repeated names keep their first position.
pub fn parse_wordlist(data: &str) -> Vec<String> {
    let mut seen = ahash::AHashSet::new();
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect()
}

pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read wordlist {}", path.display()))?;
    Ok(parse_wordlist(&data))
}

/// Path templates from a file, one per line. `#` starts a comment line.
pub fn load_templates(path: &Path) -> Result<PathTemplateSet> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read path templates {}", path.display()))?;
    let patterns = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    PathTemplateSet::from_templates(patterns)
        .with_context(|| format!("bad path template file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_wordlist() {
        let mods = parse_wordlist("views\n\n  token \r\nviews\n\t\npathauto");
        assert_eq!(mods, vec!["views", "token", "pathauto"]);
    }

    #[test]
    fn test_load_wordlist_missing_file() {
        assert!(load_wordlist(Path::new("/nonexistent/modules.txt")).is_err());
    }

    #[test]
    fn test_load_templates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# themes first").unwrap();
        writeln!(file, "/themes/contrib/{{mod}}/{{mod}}.info.yml").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "/themes/custom/{{mod}}/").unwrap();
        let set = load_templates(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.templates()[0].is_metadata());
    }

    #[test]
    fn test_load_templates_rejects_missing_placeholder() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "/themes/contrib/").unwrap();
        assert!(load_templates(file.path()).is_err());
    }
}
