use std::fmt;

use serde::{Deserialize, Serialize};

/// Bucket that collects every filename no rule matched.
pub const OTHER_BUCKET: &str = "other";

// ---------------------------------------------------------------------------
// Rules: ordered bucket name → prefix
// ---------------------------------------------------------------------------

/// A single prefix rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    pub bucket: String,
    pub prefix: String,
}

/// Prefix rules evaluated in list order; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationRules {
    rules: Vec<PrefixRule>,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        ClassificationRules::new([("large", "inflammation"), ("small", "small")])
    }
}

impl ClassificationRules {
    pub fn new<B, P>(rules: impl IntoIterator<Item = (B, P)>) -> Self
    where
        B: Into<String>,
        P: Into<String>,
    {
        ClassificationRules {
            rules: rules
                .into_iter()
                .map(|(bucket, prefix)| PrefixRule {
                    bucket: bucket.into(),
                    prefix: prefix.into(),
                })
                .collect(),
        }
    }

    pub fn rules(&self) -> &[PrefixRule] {
        &self.rules
    }

    /// Name of the bucket `filename` belongs to.
    pub fn bucket_for(&self, filename: &str) -> &str {
        self.rules
            .iter()
            .find(|r| filename.starts_with(r.prefix.as_str()))
            .map_or(OTHER_BUCKET, |r| r.bucket.as_str())
    }
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// Filenames partitioned by [`classify`]. Buckets appear in rule order, with
/// [`OTHER_BUCKET`] last; entries keep their input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameBuckets {
    buckets: Vec<(String, Vec<String>)>,
}

impl FilenameBuckets {
    fn for_rules(rules: &ClassificationRules) -> Self {
        let mut buckets: Vec<(String, Vec<String>)> = Vec::new();
        for rule in rules.rules() {
            if !buckets.iter().any(|(name, _)| *name == rule.bucket) {
                buckets.push((rule.bucket.clone(), Vec::new()));
            }
        }
        if !buckets.iter().any(|(name, _)| name == OTHER_BUCKET) {
            buckets.push((OTHER_BUCKET.to_string(), Vec::new()));
        }
        FilenameBuckets { buckets }
    }

    /// Files in the named bucket; empty for an unknown name.
    pub fn get(&self, bucket: &str) -> &[String] {
        self.buckets
            .iter()
            .find(|(name, _)| name == bucket)
            .map(|(_, files)| files.as_slice())
            .unwrap_or(&[])
    }

    pub fn large(&self) -> &[String] {
        self.get("large")
    }

    pub fn small(&self) -> &[String] {
        self.get("small")
    }

    pub fn other(&self) -> &[String] {
        self.get(OTHER_BUCKET)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    /// Total number of classified filenames.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, f)| f.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, bucket: &str, filename: String) {
        if let Some((_, files)) = self.buckets.iter_mut().find(|(name, _)| name == bucket) {
            files.push(filename);
        }
    }
}

impl fmt::Display for FilenameBuckets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, files) in self.iter() {
            let mut title = name.to_string();
            if let Some(first) = title.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            writeln!(f, "{title} files: {files:?}")?;
        }
        Ok(())
    }
}

/// Partition `filenames` into buckets by prefix.
pub fn classify<S: AsRef<str>>(filenames: &[S], rules: &ClassificationRules) -> FilenameBuckets {
    let mut buckets = FilenameBuckets::for_rules(rules);
    for filename in filenames {
        let filename = filename.as_ref();
        let bucket = rules.bucket_for(filename);
        log::debug!("{filename} -> {bucket}");
        buckets.push(bucket, filename.to_string());
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_default_prefixes() {
        let files = ["inflammation-01.csv", "small-01.csv", "readme.txt"];
        let b = classify(&files, &ClassificationRules::default());
        assert_eq!(b.large(), ["inflammation-01.csv"]);
        assert_eq!(b.small(), ["small-01.csv"]);
        assert_eq!(b.other(), ["readme.txt"]);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn keeps_input_order_within_buckets() {
        let files = [
            "inflammation-03.csv",
            "small-02.csv",
            "inflammation-01.csv",
            "small-01.csv",
        ];
        let b = classify(&files, &ClassificationRules::default());
        assert_eq!(b.large(), ["inflammation-03.csv", "inflammation-01.csv"]);
        assert_eq!(b.small(), ["small-02.csv", "small-01.csv"]);
        assert!(b.other().is_empty());
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = ClassificationRules::new([("large", "sm"), ("small", "small")]);
        let b = classify(&["small-01.csv"], &rules);
        assert_eq!(b.large(), ["small-01.csv"]);
        assert!(b.small().is_empty());
    }

    #[test]
    fn prefix_applies_to_the_whole_string() {
        let b = classify(&["data/inflammation-01.csv"], &ClassificationRules::default());
        assert_eq!(b.other(), ["data/inflammation-01.csv"]);
        assert!(b.large().is_empty());

        let rules = ClassificationRules::new([("raw", "raw/")]);
        let b = classify(&["raw/x.csv", "x.csv"], &rules);
        assert_eq!(b.get("raw"), ["raw/x.csv"]);
        assert_eq!(b.other(), ["x.csv"]);
    }

    #[test]
    fn empty_input_gives_empty_buckets() {
        let none: [&str; 0] = [];
        let b = classify(&none, &ClassificationRules::default());
        assert!(b.is_empty());
        let names: Vec<&str> = b.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["large", "small", "other"]);
    }

    #[test]
    fn display_lists_each_bucket() {
        let b = classify(&["inflammation-01.csv"], &ClassificationRules::default());
        let text = b.to_string();
        assert!(text.contains("Large files: [\"inflammation-01.csv\"]"));
        assert!(text.contains("Small files: []"));
        assert!(text.contains("Other files: []"));
    }

    #[test]
    fn rules_deserialize_from_json() {
        let rules: ClassificationRules = serde_json::from_str(
            r#"[{"bucket": "large", "prefix": "inflammation"}, {"bucket": "tiny", "prefix": "t"}]"#,
        )
        .unwrap();
        assert_eq!(rules.bucket_for("tiny.csv"), "tiny");
        assert_eq!(rules.bucket_for("x.csv"), OTHER_BUCKET);
    }
}
