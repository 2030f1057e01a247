use std::collections::HashMap;

use partmerge_core::CatalogItem;

use super::parse::parse;

/// Anything carrying a free-text supplier description.
pub trait Described {
    fn description(&self) -> &str;
}

impl Described for str {
    fn description(&self) -> &str {
        self
    }
}

impl Described for String {
    fn description(&self) -> &str {
        self
    }
}

impl Described for CatalogItem {
    fn description(&self) -> &str {
        &self.description
    }
}

impl<T: Described + ?Sized> Described for &T {
    fn description(&self) -> &str {
        (**self).description()
    }
}

/// Items bucketed by parsed base name.
///
/// Groups iterate in the order their key was first seen; items within a
/// group keep input order.
#[derive(Debug, Clone)]
pub struct ItemGroups<T> {
    groups: Vec<(String, Vec<T>)>,
    index: HashMap<String, usize>,
}

impl<T> Default for ItemGroups<T> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> ItemGroups<T> {
    fn push(&mut self, key: String, item: T) {
        if let Some(&slot) = self.index.get(&key) {
            self.groups[slot].1.push(item);
        } else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push((key, vec![item]));
        }
    }

    /// Items whose parsed base name equals `base_name`.
    #[must_use]
    pub fn get(&self, base_name: &str) -> Option<&[T]> {
        self.index
            .get(base_name)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Number of distinct base names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of grouped items across all base names.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    /// Groups with more than one member, i.e. genuine variant families.
    pub fn families(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.iter().filter(|(_, items)| items.len() > 1)
    }
}

impl<T> IntoIterator for ItemGroups<T> {
    type Item = (String, Vec<T>);
    type IntoIter = std::vec::IntoIter<(String, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Groups items by the base name [`parse`] extracts from each description.
///
/// Keys are computed per item, so only exact base-name matches are merged:
/// case or internal whitespace differences produce separate groups.
pub fn group_items<T, I>(items: I) -> ItemGroups<T>
where
    T: Described,
    I: IntoIterator<Item = T>,
{
    let mut groups = ItemGroups::default();
    for item in items {
        let key = parse(item.description()).base_name;
        groups.push(key, item);
    }
    groups
}
