//! Minimal editor for the local hostname-resolution file.
//!
//! Only the single targeted mapping is ever touched; unrelated entries pass
//! through byte-for-byte. Running the same registration twice leaves exactly
//! one entry for the domain.

use std::path::Path;

/// Returns the hosts content with exactly one entry mapping `domain` to
/// `address`.
///
/// Lines that mention other hostnames alongside `domain` keep those other
/// hostnames; any inline comment on such a rewritten line is not preserved.
pub fn upsert_mapping(content: &str, address: &str, domain: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in content.lines() {
        if !line_maps_domain(line, domain) {
            lines.push(line.to_string());
            continue;
        }
        // Strip our domain from the entry; keep the line if other hostnames remain.
        let uncommented = line.split('#').next().unwrap_or("");
        let mut fields = uncommented.split_whitespace();
        let entry_address = fields.next().unwrap_or("");
        let remaining: Vec<&str> = fields.filter(|host| *host != domain).collect();
        if !remaining.is_empty() {
            lines.push(format!("{entry_address}\t{}", remaining.join(" ")));
        }
    }

    lines.push(format!("{address}\t{domain}"));

    let mut updated = lines.join("\n");
    updated.push('\n');
    updated
}

fn line_maps_domain(line: &str, domain: &str) -> bool {
    let uncommented = line.split('#').next().unwrap_or("");
    let mut fields = uncommented.split_whitespace();
    // First field is the address, the rest are hostnames.
    fields.next().is_some() && fields.any(|host| host == domain)
}

/// Adds or updates the mapping in the hosts file at `path`.
///
/// A missing file is treated as empty. The file is only rewritten when the
/// mapping actually changes.
pub fn register(path: &Path, address: &str, domain: &str) -> std::io::Result<()> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    let updated = upsert_mapping(&content, address, domain);
    if updated != content {
        std::fs::write(path, updated)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries_for<'a>(content: &'a str, domain: &str) -> Vec<&'a str> {
        content
            .lines()
            .filter(|line| line_maps_domain(line, domain))
            .collect()
    }

    #[test]
    fn appends_a_new_mapping() {
        let updated = upsert_mapping("127.0.0.1\tlocalhost\n", "192.168.56.101", "acme.medialounge.dev");
        assert!(updated.contains("127.0.0.1\tlocalhost"));
        assert_eq!(entries_for(&updated, "acme.medialounge.dev"), ["192.168.56.101\tacme.medialounge.dev"]);
    }

    #[test]
    fn registering_twice_keeps_a_single_entry() {
        let once = upsert_mapping("", "192.168.56.101", "acme.medialounge.dev");
        let twice = upsert_mapping(&once, "192.168.56.101", "acme.medialounge.dev");
        assert_eq!(once, twice);
        assert_eq!(entries_for(&twice, "acme.medialounge.dev").len(), 1);
    }

    #[test]
    fn updates_the_address_of_an_existing_mapping() {
        let content = "10.0.0.5\tacme.medialounge.dev\n";
        let updated = upsert_mapping(content, "192.168.56.101", "acme.medialounge.dev");
        assert_eq!(
            entries_for(&updated, "acme.medialounge.dev"),
            ["192.168.56.101\tacme.medialounge.dev"]
        );
    }

    #[test]
    fn unrelated_entries_are_untouched() {
        let content = "127.0.0.1 localhost\n# managed block\n10.1.1.1 other.dev\n";
        let updated = upsert_mapping(content, "192.168.56.101", "acme.medialounge.dev");
        assert!(updated.contains("127.0.0.1 localhost"));
        assert!(updated.contains("# managed block"));
        assert!(updated.contains("10.1.1.1 other.dev"));
    }

    #[test]
    fn shared_lines_keep_their_other_hostnames() {
        let content = "10.0.0.5 acme.medialounge.dev other.dev\n";
        let updated = upsert_mapping(content, "192.168.56.101", "acme.medialounge.dev");
        assert!(updated.contains("other.dev"));
        assert_eq!(
            entries_for(&updated, "acme.medialounge.dev"),
            ["192.168.56.101\tacme.medialounge.dev"]
        );
    }

    #[test]
    fn register_creates_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = dir.path().join("hosts");
        register(&hosts, "192.168.56.101", "acme.medialounge.dev").unwrap();
        let content = std::fs::read_to_string(&hosts).unwrap();
        assert_eq!(content, "192.168.56.101\tacme.medialounge.dev\n");
    }
}
