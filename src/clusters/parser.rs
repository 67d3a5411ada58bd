//! Parser for `ocm list clusters --columns api.url` output
//!
//! The table has no schema: a header row, one API URL per cluster and `NONE`
//! for clusters without an API URL yet. Any other shape is reported as an
//! error with its line number instead of being guessed at.

use super::{ClusterDomain, ClusterListError};

/// Header printed by `ocm` for the `api.url` column
pub const API_URL_HEADER: &str = "API URL";
/// Placeholder printed for clusters without an API URL
pub const NONE_PLACEHOLDER: &str = "NONE";
/// Scheme and host prefix of every cluster API URL
pub const API_URL_PREFIX: &str = "https://api.";
/// Port suffix of every cluster API URL
pub const API_URL_PORT_SUFFIX: &str = ":6443";

/// Parse the full stdout of the cluster listing into base domains.
///
/// Order follows the input; duplicates are kept.
pub fn parse_cluster_table(output: &str) -> Result<Vec<ClusterDomain>, ClusterListError> {
    let mut domains = Vec::new();

    for (index, raw) in output.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line == API_URL_HEADER || line == NONE_PLACEHOLDER {
            continue;
        }

        let domain = parse_api_url(line).ok_or_else(|| ClusterListError::UnexpectedLine {
            line_number: index + 1,
            line: line.to_string(),
        })?;
        domains.push(domain);
    }

    Ok(domains)
}

/// `https://api.<base domain>:6443` → `<base domain>`
pub fn parse_api_url(url: &str) -> Option<ClusterDomain> {
    let domain = url
        .strip_prefix(API_URL_PREFIX)?
        .strip_suffix(API_URL_PORT_SUFFIX)?;

    if domain.is_empty() || domain.contains(char::is_whitespace) {
        return None;
    }
    Some(ClusterDomain::new(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(domains: &[ClusterDomain]) -> Vec<&str> {
        domains.iter().map(|d| d.as_str()).collect()
    }

    #[test]
    fn test_single_url() {
        let domain =
            parse_api_url("https://api.abc123.s1.devshift.org-hive-cluster:6443").unwrap();
        assert_eq!(domain.as_str(), "abc123.s1.devshift.org-hive-cluster");
    }

    #[test]
    fn test_table_with_header_and_placeholders() {
        let output = [
            "API URL",
            "https://api.abc123.s1.devshift.org-hive-cluster:6443",
            "NONE",
            "https://api.def456.s2.devshift.org-hive-cluster:6443",
        ]
        .iter()
        .map(|cell| format!("{cell:<100}\n"))
        .collect::<String>();

        let domains = parse_cluster_table(&output).unwrap();
        assert_eq!(
            names(&domains),
            vec![
                "abc123.s1.devshift.org-hive-cluster",
                "def456.s2.devshift.org-hive-cluster",
            ]
        );
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse_cluster_table("API URL\n").unwrap().is_empty());
        assert!(parse_cluster_table("").unwrap().is_empty());
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let output = concat!(
            "https://api.b.example:6443\n",
            "https://api.a.example:6443\n",
            "https://api.b.example:6443\n",
        );
        let domains = parse_cluster_table(output).unwrap();
        assert_eq!(names(&domains), vec!["b.example", "a.example", "b.example"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let output = "API URL\n\n   \nhttps://api.a.example:6443\n";
        assert_eq!(names(&parse_cluster_table(output).unwrap()), vec!["a.example"]);
    }

    #[test]
    fn test_unexpected_line_reports_position() {
        let output = "API URL\nhttps://api.a.example:6443\nID NAME STATE\n";
        match parse_cluster_table(output) {
            Err(ClusterListError::UnexpectedLine { line_number, line }) => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "ID NAME STATE");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_urls_of_another_shape() {
        assert!(parse_api_url("http://api.a.example:6443").is_none());
        assert!(parse_api_url("https://api.a.example:443").is_none());
        assert!(parse_api_url("https://api.:6443").is_none());
    }
}
