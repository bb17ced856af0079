use crate::catalog::CompiledCatalog;

const TRAILING: &[char] = &[',', ';', ':', '-', '&', '/'];
const LEADING: &[char] = &['.', ',', ';', ':'];

/// Split a description into its profession prefix and the rest.
///
/// A description opening with catalog entries gets the entry chain, cut at the
/// first period or relationship phrase if those come sooner. Anything else
/// gets the text before the first period or relationship phrase, so a
/// description that opens with a relationship has no profession.
pub fn split<'a>(description: &'a str, catalog: &CompiledCatalog) -> (String, &'a str) {
    let period = description.find('.').unwrap_or(description.len());
    let relationship = catalog
        .relationship_start(description, 0)
        .unwrap_or(description.len());
    let mut end = period.min(relationship);
    if let Some(chain_end) = catalog.profession_prefix_end(description) {
        end = end.min(chain_end);
    }

    let profession = description[..end]
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING.contains(&c))
        .trim();
    let rest = description[end..]
        .trim_start_matches(|c: char| c.is_whitespace() || LEADING.contains(&c));

    (profession.to_string(), rest)
}
