use super::reference::ReferenceTables;
use std::collections::BTreeSet;

/// Expands region aliases into their member countries.
#[derive(Debug, Clone, Copy)]
pub struct GeoResolver<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> GeoResolver<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Region aliases contribute their countries; any other entry is kept
    /// verbatim, including the "Other" sentinel. Expansion is one level deep.
    pub fn expand<I, S>(&self, destinations: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expanded = BTreeSet::new();
        for destination in destinations {
            let destination = destination.as_ref();
            match self.tables.region(destination) {
                Some(region) => expanded.extend(region.countries.iter().cloned()),
                None => {
                    expanded.insert(destination.to_string());
                }
            }
        }
        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_countries_pass_through_unchanged() {
        let tables = ReferenceTables::standard();
        let resolver = GeoResolver::new(&tables);

        let expanded = resolver.expand(["France", "Germany"]);

        let expected: BTreeSet<String> = ["France", "Germany"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(expanded, expected);
    }

    #[test]
    fn regions_expand_and_deduplicate() {
        let tables = ReferenceTables::standard();
        let resolver = GeoResolver::new(&tables);

        let expanded = resolver.expand(["EMEA", "APAC", "Armenia", "United Kingdom"]);

        // Armenia sits in both EMEA and APAC.
        assert_eq!(
            expanded.iter().filter(|country| *country == "Armenia").count(),
            1
        );
        assert!(expanded.contains("Gibraltar"));
        assert!(expanded.contains("Japan"));
        assert!(!expanded.contains("EMEA"));
        assert!(!expanded.contains("APAC"));

        let emea = tables.region("EMEA").expect("EMEA alias");
        let apac = tables.region("APAC").expect("APAC alias");
        let mut union: BTreeSet<String> = emea.countries.iter().cloned().collect();
        union.extend(apac.countries.iter().cloned());
        assert_eq!(expanded, union);
    }

    #[test]
    fn keeps_sentinel_and_unknown_entries() {
        let tables = ReferenceTables::standard();
        let resolver = GeoResolver::new(&tables);

        let expanded = resolver.expand(["Other", "Atlantis", "North America"]);

        assert!(expanded.contains("Other"));
        assert!(expanded.contains("Atlantis"));
        assert!(expanded.contains("Canada"));
        assert!(expanded.contains("United States"));
        assert_eq!(expanded.len(), 4);
    }

    #[test]
    fn expansion_is_idempotent() {
        let tables = ReferenceTables::standard();
        let resolver = GeoResolver::new(&tables);

        let inputs: Vec<Vec<&str>> = vec![
            vec![],
            vec!["EMEA"],
            vec!["LATAM", "Africa", "Other"],
            vec!["APAC", "Japan", "Narnia"],
            tables.regions().iter().map(|r| r.name.as_str()).collect(),
        ];

        for input in inputs {
            let once = resolver.expand(&input);
            let twice = resolver.expand(&once);
            assert_eq!(once, twice, "expansion of {input:?} should be stable");
        }
    }
}
